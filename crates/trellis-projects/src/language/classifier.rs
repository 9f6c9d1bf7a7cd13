//! Classification of raw `--lang` values.

use super::technology::is_technology_term;
use super::validator::{LanguageCodeValidator, RegistryValidator};
use crate::report::Reporter;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Opening line of every `--lang` diagnostic
pub const MSG_HEADER: &str = "An error with the `--lang` flag returned the following message:";

/// Closing guidance of every `--lang` diagnostic
pub const MSG_FOOTER: &str = "If this was not your intention, you may edit the `<html>` element's
  `lang` attribute in `app/index.html` directly.
Information about using the `--lang` flag:
  The `--lang` flag sets the base human language of the app in index.html
  If used, the lang option must specify a valid language code.
  For default behavior, remove the flag.
  See `trellis <command> --help` for more information.";

/// Interpretation chosen for a raw `--lang` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A valid language code
    Valid,
    /// A valid language code that also names a technology
    ValidAndAmbiguous,
    /// Names a programming/markup/styling technology
    TechMisuse,
    /// An option token swallowed by the argument parser
    ParserArtifact,
    /// Not a valid language code
    InvalidCode,
}

impl Category {
    /// Whether a value in this category is applied
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Valid | Self::ValidAndAmbiguous)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::ValidAndAmbiguous => "valid-and-ambiguous",
            Self::TechMisuse => "tech-misuse",
            Self::ParserArtifact => "parser-artifact",
            Self::InvalidCode => "invalid-code",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one raw `--lang` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The argument exactly as supplied
    pub raw_input: String,
    pub category: Category,
    /// Set exactly when `category` is accepted; equals `raw_input`
    pub accepted_value: Option<String>,
    /// Header, body and footer; absent only for `Category::Valid`
    pub diagnostic: Option<String>,
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        self.category.is_accepted()
    }
}

/// Classifies raw `--lang` values.
///
/// Checks run in priority order, first match wins:
/// 1. leading `-` → [`Category::ParserArtifact`]
/// 2. technology term that is also a valid code → [`Category::ValidAndAmbiguous`]
/// 3. technology term → [`Category::TechMisuse`]
/// 4. valid code → [`Category::Valid`]
/// 5. otherwise → [`Category::InvalidCode`]
#[derive(Clone)]
pub struct LanguageTagClassifier {
    validator: Arc<dyn LanguageCodeValidator>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl fmt::Debug for LanguageTagClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageTagClassifier")
            .field("reporter", &self.reporter.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for LanguageTagClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTagClassifier {
    /// Create a classifier backed by [`RegistryValidator`] that reports nothing
    pub fn new() -> Self {
        Self::with_validator(Arc::new(RegistryValidator::new()))
    }

    /// Create a classifier backed by a custom validity service
    pub fn with_validator(validator: Arc<dyn LanguageCodeValidator>) -> Self {
        Self {
            validator,
            reporter: None,
        }
    }

    /// Emit advisories for accepted-but-ambiguous values to `reporter`
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Classify a raw `--lang` value. Never fails.
    pub fn classify(&self, raw_input: &str) -> Classification {
        let outcome = self.decide(raw_input);
        debug!(
            "Classified --lang value `{}` as {}",
            raw_input, outcome.category
        );

        if outcome.category == Category::ValidAndAmbiguous {
            if let Some(reporter) = &self.reporter {
                reporter.warn(&format!(
                    "{}\n\t{}",
                    MSG_HEADER,
                    ambiguous_body(raw_input)
                ));
                reporter.info(&status_line(raw_input, true));
                reporter.info(MSG_FOOTER);
            }
        }

        outcome
    }

    fn decide(&self, raw_input: &str) -> Classification {
        if raw_input.starts_with('-') {
            return rejected(raw_input, Category::ParserArtifact, &parser_artifact_body(raw_input));
        }

        let validation = self.validator.validate(raw_input);

        if is_technology_term(raw_input) {
            if validation.is_valid {
                return Classification {
                    raw_input: raw_input.to_string(),
                    category: Category::ValidAndAmbiguous,
                    accepted_value: Some(raw_input.to_string()),
                    diagnostic: Some(wrap(&format!(
                        "{}\n{}",
                        ambiguous_body(raw_input),
                        status_line(raw_input, true)
                    ))),
                };
            }
            return rejected(raw_input, Category::TechMisuse, &tech_misuse_body(raw_input));
        }

        if validation.is_valid {
            return Classification {
                raw_input: raw_input.to_string(),
                category: Category::Valid,
                accepted_value: Some(raw_input.to_string()),
                diagnostic: None,
            };
        }

        let explanation = validation
            .explanation
            .unwrap_or_else(|| format!("`{}` is not a valid language code.", raw_input));
        rejected(raw_input, Category::InvalidCode, &explanation)
    }
}

fn rejected(raw_input: &str, category: Category, body: &str) -> Classification {
    Classification {
        raw_input: raw_input.to_string(),
        category,
        accepted_value: None,
        diagnostic: Some(wrap(&format!(
            "{}\n{}",
            body,
            status_line(raw_input, false)
        ))),
    }
}

fn wrap(body: &str) -> String {
    format!("{}\n  {}\n{}", MSG_HEADER, body, MSG_FOOTER)
}

fn ambiguous_body(raw_input: &str) -> String {
    format!(
        "The `--lang` flag has been used with argument `{}`,
  which is BOTH a valid language code AND an abbreviation for a programming language.",
        raw_input
    )
}

fn tech_misuse_body(raw_input: &str) -> String {
    format!(
        "Trying to set the app programming language to `{}`?
  This is not the intended usage of the `--lang` flag.",
        raw_input
    )
}

fn parser_artifact_body(raw_input: &str) -> String {
    format!(
        "Detected a `--lang` specification starting with command flag `-`.
  Is `{}` meant to be a trellis command option?
  This issue is likely caused by using the `--lang` flag without a specification.",
        raw_input
    )
}

fn status_line(raw_input: &str, applied: bool) -> String {
    let status = if applied { "will be set" } else { "will NOT be set" };
    format!(
        "The human language of this application {} to `{}` in
  the `<html>` element's `lang` attribute in `app/index.html`.",
        status, raw_input
    )
}
