//! Language-to-syntax-profile resolution for editor sessions.

use codebench_core::LanguageDescriptor;
use once_cell::sync::Lazy;
use syntect::parsing::SyntaxSet;

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Highlighting profile bound to an editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Catalog language id this profile was resolved for.
    pub language: String,
    /// Name of the resolved syntect syntax definition.
    pub syntax_name: String,
    /// True when the language degraded to the plain-text profile.
    pub plain: bool,
}

/// Resolve the syntax profile for a language.
///
/// Resolution is a pure function of the descriptor: first by language token,
/// then by file extension. Languages the default syntax set does not know
/// degrade to the plain-text profile instead of failing.
pub fn profile_for(language: &LanguageDescriptor) -> SyntaxProfile {
    let syntaxes = &*SYNTAXES;
    let resolved = syntaxes
        .find_syntax_by_token(language.id)
        .or_else(|| syntaxes.find_syntax_by_extension(language.extension));
    match resolved {
        Some(syntax) => SyntaxProfile {
            language: language.id.to_string(),
            syntax_name: syntax.name.clone(),
            plain: false,
        },
        None => SyntaxProfile {
            language: language.id.to_string(),
            syntax_name: syntaxes.find_syntax_plain_text().name.clone(),
            plain: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebench_core::languages;

    #[test]
    fn every_catalog_language_resolves_to_a_profile() {
        for language in languages::list_supported() {
            let profile = profile_for(language);
            assert_eq!(profile.language, language.id);
            assert!(!profile.syntax_name.is_empty());
        }
    }

    #[test]
    fn known_languages_get_a_real_syntax() {
        let javascript = languages::describe("javascript").expect("catalog entry");
        let profile = profile_for(javascript);
        assert!(!profile.plain);
        assert_eq!(profile.syntax_name, "JavaScript");
    }

    #[test]
    fn unknown_languages_degrade_to_plain_text() {
        let descriptor = LanguageDescriptor {
            id: "klingon",
            display_name: "Klingon",
            extension: "tlh",
            template: "",
            execution_supported: false,
        };
        let profile = profile_for(&descriptor);
        assert!(profile.plain);
    }
}
