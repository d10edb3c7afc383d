//! TypeScript-to-JavaScript type stripping.
//!
//! No type checking happens here: annotations, interfaces, and type-only
//! constructs are erased and the emitted JavaScript runs in the same
//! evaluation context the dynamic member of the family uses.

use deno_ast::{
    EmitOptions, MediaType, ModuleSpecifier, ParseParams, SourceMapOption,
    TranspileModuleOptions, TranspileOptions,
};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Failure while converting TypeScript into runnable JavaScript.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TranspileError(String);

static SPECIFIER: Lazy<ModuleSpecifier> =
    Lazy::new(|| ModuleSpecifier::parse("file:///main.ts").expect("static module specifier"));

/// Strip types from `source` and emit plain JavaScript.
///
/// # Errors
/// Returns a [`TranspileError`] carrying the parser diagnostic when the
/// source is not valid TypeScript.
pub(crate) fn strip_types(source: &str) -> Result<String, TranspileError> {
    let parsed = deno_ast::parse_module(ParseParams {
        specifier: SPECIFIER.clone(),
        text: source.into(),
        media_type: MediaType::TypeScript,
        capture_tokens: false,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|diagnostic| TranspileError(diagnostic.to_string()))?;

    if let Some(diagnostic) = parsed.diagnostics().first() {
        return Err(TranspileError(diagnostic.to_string()));
    }

    let emitted = parsed
        .transpile(
            &TranspileOptions::default(),
            &TranspileModuleOptions::default(),
            &EmitOptions {
                source_map: SourceMapOption::None,
                ..Default::default()
            },
        )
        .map_err(|err| TranspileError(err.to_string()))?
        .into_source();

    Ok(emitted.text)
}
