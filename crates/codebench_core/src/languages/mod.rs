//! Language catalog and capability lookups.
//!
//! The catalog is fixed at compile time: every open document references one
//! of these ids, and the execution engine consults the same table to decide
//! whether a run is possible at all.

mod templates;

use crate::error::WorkspaceError;

/// Language id of the dynamically-typed runnable member of the catalog.
pub const JAVASCRIPT_ID: &str = "javascript";
/// Language id of the statically-typed runnable member of the catalog.
pub const TYPESCRIPT_ID: &str = "typescript";

/// Editing and execution capabilities of one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub extension: &'static str,
    pub template: &'static str,
    pub execution_supported: bool,
}

/// The full catalog, in selector display order.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        id: JAVASCRIPT_ID,
        display_name: "JavaScript",
        extension: "js",
        template: templates::JAVASCRIPT,
        execution_supported: true,
    },
    LanguageDescriptor {
        id: TYPESCRIPT_ID,
        display_name: "TypeScript",
        extension: "ts",
        template: templates::TYPESCRIPT,
        execution_supported: true,
    },
    LanguageDescriptor {
        id: "python",
        display_name: "Python",
        extension: "py",
        template: templates::PYTHON,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "cpp",
        display_name: "C++",
        extension: "cpp",
        template: templates::CPP,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "c",
        display_name: "C",
        extension: "c",
        template: templates::C,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "java",
        display_name: "Java",
        extension: "java",
        template: templates::JAVA,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "rust",
        display_name: "Rust",
        extension: "rs",
        template: templates::RUST,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "go",
        display_name: "Go",
        extension: "go",
        template: templates::GO,
        execution_supported: false,
    },
    LanguageDescriptor {
        id: "ruby",
        display_name: "Ruby",
        extension: "rb",
        template: templates::RUBY,
        execution_supported: false,
    },
];

/// Look up a descriptor by language id.
///
/// # Returns
/// The catalog entry for `id`.
///
/// # Errors
/// Returns [`WorkspaceError::UnknownLanguage`] when `id` is not in the
/// catalog. Documents only ever reference catalog ids, so hitting this from
/// workspace state means a caller bug.
pub fn describe(id: &str) -> Result<&'static LanguageDescriptor, WorkspaceError> {
    LANGUAGES
        .iter()
        .find(|language| language.id == id)
        .ok_or_else(|| WorkspaceError::UnknownLanguage(id.to_string()))
}

/// Look up a descriptor by file extension (without the dot).
///
/// # Returns
/// The catalog entry whose extension matches, otherwise `None`.
pub fn descriptor_for_extension(extension: &str) -> Option<&'static LanguageDescriptor> {
    let wanted = extension.trim_start_matches('.').to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|language| language.extension == wanted)
}

/// The catalog in display order, for language-selection surfaces.
pub fn list_supported() -> &'static [LanguageDescriptor] {
    LANGUAGES
}
