//! `--lang` flag handling.
//!
//! The `--lang` flag sets the base human language of a generated
//! application. A raw flag value is classified into exactly one
//! [`Category`] by [`LanguageTagClassifier`]:
//!
//! - `ParserArtifact`: the value starts with `-`, so the parser most likely
//!   swallowed the next option because `--lang` was given without a value
//! - `ValidAndAmbiguous`: a valid language code that also names a
//!   programming/markup technology (`ts`, `css`, `xml`, `xht`); accepted
//! - `TechMisuse`: names a technology and is not a language code; rejected
//! - `Valid`: a valid language code; accepted
//! - `InvalidCode`: anything else; rejected with the validator's explanation
//!
//! Classification never fails. Deciding whether a rejected category is
//! fatal is left to the caller, see [`resolve_language_flag`].

pub mod classifier;
pub mod technology;
pub mod validator;

pub use classifier::{Category, Classification, LanguageTagClassifier};
pub use technology::{is_technology_term, TECHNOLOGY_TERMS};
pub use validator::{LanguageCodeValidator, RegistryValidator, Validation};

use crate::error::{Error, Result};

/// Resolve the value passed with `--lang` for a command.
///
/// `raw` is `None` when the flag was absent, in which case `default` is
/// classified in its place. A rejected classification is fatal unless the
/// raw value equals `default`; otherwise the accepted value (or `default`)
/// is returned.
pub fn resolve_language_flag(
    classifier: &LanguageTagClassifier,
    raw: Option<&str>,
    default: &str,
) -> Result<String> {
    let raw = raw.unwrap_or(default);
    let outcome = classifier.classify(raw);

    if !outcome.is_accepted() && outcome.raw_input != default {
        return Err(Error::invalid_language_tag(
            outcome.diagnostic.unwrap_or_default(),
        ));
    }

    Ok(outcome.accepted_value.unwrap_or_else(|| default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flag_resolves_to_default() {
        let classifier = LanguageTagClassifier::new();
        assert_eq!(resolve_language_flag(&classifier, None, "").unwrap(), "");
    }

    #[test]
    fn test_explicit_default_is_not_rejected() {
        let classifier = LanguageTagClassifier::new();
        assert_eq!(
            resolve_language_flag(&classifier, Some(""), "").unwrap(),
            ""
        );
    }

    #[test]
    fn test_valid_code_is_returned_unchanged() {
        let classifier = LanguageTagClassifier::new();
        assert_eq!(
            resolve_language_flag(&classifier, Some("en-US"), "").unwrap(),
            "en-US"
        );
    }

    #[test]
    fn test_configured_default_replaces_absent_flag() {
        let classifier = LanguageTagClassifier::new();
        assert_eq!(
            resolve_language_flag(&classifier, None, "fr-CA").unwrap(),
            "fr-CA"
        );
    }

    #[test]
    fn test_rejected_value_carries_diagnostic() {
        let classifier = LanguageTagClassifier::new();
        let err = resolve_language_flag(&classifier, Some("typescript"), "").unwrap_err();
        match err {
            Error::InvalidLanguageTag { message } => {
                assert!(message.contains("set the app programming language"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
