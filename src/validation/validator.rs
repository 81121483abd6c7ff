use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::patterns::{default_patterns, strict_patterns, BlockedPattern, ALLOWED_CHARS};
use crate::config_manager::ValidationProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input must be a non-empty string")]
    Missing,
    #[error("Input must be at least {min} character(s)")]
    TooShort { min: usize },
    #[error("Input must not exceed {max} characters")]
    TooLong { max: usize },
    #[error("Input contains invalid characters")]
    InvalidCharacters,
    #[error("Input contains prohibited content")]
    ProhibitedContent,
}

impl ValidationError {
    /// Machine-readable sub-reason
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Missing | Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::InvalidCharacters => "disallowed_characters",
            Self::ProhibitedContent => "prohibited_content",
        }
    }
}

/// Serializable view of a validation result
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_text: Option<String>,
}

#[cfg(test)]
impl From<Result<String, ValidationError>> for ValidationOutcome {
    fn from(result: Result<String, ValidationError>) -> Self {
        match result {
            Ok(sanitized) => Self {
                is_valid: true,
                error: None,
                sanitized_text: Some(sanitized),
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
                sanitized_text: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub max_length: usize,
    pub min_length: usize,
    pub allowed_chars: Regex,
    pub blocked_patterns: Vec<BlockedPattern>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_length: 1000,
            min_length: 1,
            allowed_chars: Regex::new(ALLOWED_CHARS).expect("allow-list pattern is valid"),
            blocked_patterns: default_patterns(),
        }
    }
}

impl ValidationConfig {
    /// 500-character cap plus the exploit/SQL keyword and bracket blocklist
    pub fn strict() -> Self {
        Self {
            max_length: 500,
            blocked_patterns: strict_patterns(),
            ..Self::default()
        }
    }
}

/// Checks user text against length, character-set and blocklist rules
#[derive(Debug, Clone)]
pub struct InputValidator {
    config: ValidationConfig,
}

impl InputValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn strict() -> Self {
        Self::new(ValidationConfig::strict())
    }

    pub fn for_profile(profile: ValidationProfile) -> Self {
        match profile {
            ValidationProfile::Default => Self::default(),
            ValidationProfile::Strict => Self::strict(),
        }
    }

    /// Returns the sanitized text when every rule passes
    pub fn validate(&self, text: &str) -> Result<String, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::Missing);
        }

        let length = text.chars().count();
        if length < self.config.min_length {
            return Err(ValidationError::TooShort {
                min: self.config.min_length,
            });
        }
        if length > self.config.max_length {
            return Err(ValidationError::TooLong {
                max: self.config.max_length,
            });
        }

        if !self.config.allowed_chars.is_match(text) {
            return Err(ValidationError::InvalidCharacters);
        }

        if self.config.blocked_patterns.iter().any(|p| p.matches(text)) {
            return Err(ValidationError::ProhibitedContent);
        }

        Ok(sanitize(text))
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

fn whitespace_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Trim, collapse whitespace, drop control characters and normalize smart quotes
pub fn sanitize(text: &str) -> String {
    let collapsed = whitespace_run().replace_all(text.trim(), " ");
    collapsed
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let outcome = ValidationOutcome::from(InputValidator::default().validate(""));
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error.as_deref(), Some("Input must be a non-empty string"));
        assert!(outcome.sanitized_text.is_none());
    }

    #[test]
    fn over_length_input_is_rejected() {
        let err = InputValidator::default().validate(&"a".repeat(1001)).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max: 1000 });
        assert_eq!(err.to_string(), "Input must not exceed 1000 characters");
        assert_eq!(err.reason(), "too_long");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let validator = InputValidator::new(ValidationConfig {
            max_length: 3,
            ..ValidationConfig::default()
        });
        // three chars, six bytes: passes the length check, then fails the allow-list
        assert_eq!(validator.validate("\u{e9}\u{e9}\u{e9}"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn repeated_characters_are_prohibited() {
        let err = InputValidator::default().validate(&"a".repeat(60)).unwrap_err();
        assert_eq!(err, ValidationError::ProhibitedContent);
        assert_eq!(err.reason(), "prohibited_content");
    }

    #[test]
    fn characters_outside_allow_list_are_rejected() {
        let validator = InputValidator::default();
        assert_eq!(validator.validate("hello <world>"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validator.validate("caf\u{e9}"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validator.validate("nul\u{0}byte"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn valid_input_is_sanitized() {
        let sanitized = InputValidator::default()
            .validate("  We need   to\tdiscuss\n\nthe budget  ")
            .unwrap();
        assert_eq!(sanitized, "We need to discuss the budget");
    }

    #[test]
    fn sanitize_normalizes_quotes_and_controls() {
        assert_eq!(sanitize("\u{201C}hi\u{201D} it\u{2019}s\u{7F} ok"), "\"hi\" it's ok");
    }

    #[test]
    fn unicode_line_separators_do_not_form_a_run() {
        let validator = InputValidator::default();
        assert!(validator.validate(&"\u{2028}".repeat(51)).is_ok());
        assert!(validator.validate(&"\u{2029}".repeat(51)).is_ok());
    }

    #[test]
    fn strict_profile_is_tighter() {
        let strict = InputValidator::for_profile(ValidationProfile::Strict);
        assert_eq!(strict.validate(&"ab ".repeat(200)), Err(ValidationError::TooLong { max: 500 }));
        assert_eq!(
            strict.validate("we must exploit this opportunity"),
            Err(ValidationError::ProhibitedContent)
        );
        assert!(InputValidator::default()
            .validate("we must exploit this opportunity")
            .is_ok());
    }
}
