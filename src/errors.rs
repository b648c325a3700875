//! Error types with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - D001: `SourceUnavailable` (A dictionary file could not be read)
//! - D002: `NoSources` (No dictionary file candidates were configured)
//! - I001: `MissingLetters` (No letters supplied)
//! - I002: `NoValidLetters` (Input had no alphabetic characters)
//! - I003: `TooManyLetters` (Input longer than the maximum)
//! - I004: `MinLengthOutOfRange` (Minimum word length outside the allowed range)
//!
//! Dictionary errors never reach a caller as a failed request: the loader
//! logs them and falls back to the built-in word list. Input errors are the
//! reasons reported in a failure response, so their `Display` text is written
//! for end users.
//!
//! # Examples
//!
//! ```
//! use wordmixr::errors::InputError;
//! use wordmixr::sanitize::validate_letters;
//!
//! match validate_letters(Some("123")) {
//!     Err(e) => {
//!         assert_eq!(e, InputError::NoValidLetters);
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(cleaned) => println!("Cleaned: {cleaned}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Failures while reading a dictionary source.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary source unavailable: '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no dictionary sources configured")]
    NoSources,
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "D001",
            DictionaryError::NoSources => "D002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "A dictionary file could not be read",
            DictionaryError::NoSources => "No dictionary file candidates were configured",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "The file does not exist, is not readable, or is not valid UTF-8. The loader moves on to the next candidate and, if none succeed, uses the built-in fallback word list.",
            DictionaryError::NoSources => "The candidate list was empty, so no file was tried. The built-in fallback word list is used instead.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::SourceUnavailable { .. } => Some("Check the path, or set WORDMIXR_DICTIONARY / --dictionary to a word list that exists (one word per line)"),
            DictionaryError::NoSources => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Reasons a query is rejected before it reaches the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Letters parameter is required")]
    MissingLetters,

    #[error("No valid letters found in input")]
    NoValidLetters,

    #[error("Too many letters (maximum {max} allowed)")]
    TooManyLetters { len: usize, max: usize },

    #[error("Minimum word length must be between {min} and {max} (got {value})")]
    MinLengthOutOfRange { value: i64, min: usize, max: usize },
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::MissingLetters => "I001",
            InputError::NoValidLetters => "I002",
            InputError::TooManyLetters { .. } => "I003",
            InputError::MinLengthOutOfRange { .. } => "I004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::MissingLetters => "No letters supplied",
            InputError::NoValidLetters => "Input had no alphabetic characters",
            InputError::TooManyLetters { .. } => "Input longer than the maximum",
            InputError::MinLengthOutOfRange { .. } => "Minimum word length outside the allowed range",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::MissingLetters => "The letters value was absent or empty.",
            InputError::NoValidLetters => "Every character of the input was stripped during cleaning; only a-z and A-Z are kept.",
            InputError::TooManyLetters { .. } => "After cleaning, the input had more letters than a single query may use.",
            InputError::MinLengthOutOfRange { .. } => "The minimum word length must lie in the inclusive range 1 to 10.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::MissingLetters => Some("Example: 'wordmixr solve bhace'"),
            InputError::NoValidLetters => Some("Digits, spaces and punctuation are ignored; include at least one letter"),
            InputError::TooManyLetters { .. } => Some("Split the letters into smaller queries of at most 20 letters"),
            InputError::MinLengthOutOfRange { .. } => Some("Use a value from 1 to 10 (the default is 3)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input_errors() -> Vec<InputError> {
        vec![
            InputError::MissingLetters,
            InputError::NoValidLetters,
            InputError::TooManyLetters { len: 25, max: 20 },
            InputError::MinLengthOutOfRange { value: 0, min: 1, max: 10 },
        ]
    }

    fn sample_dictionary_errors() -> Vec<DictionaryError> {
        vec![
            DictionaryError::SourceUnavailable {
                path: PathBuf::from("missing.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            DictionaryError::NoSources,
        ]
    }

    #[test]
    fn test_input_error_messages_match_response_text() {
        assert_eq!(InputError::MissingLetters.to_string(), "Letters parameter is required");
        assert_eq!(InputError::NoValidLetters.to_string(), "No valid letters found in input");
        assert_eq!(
            InputError::TooManyLetters { len: 21, max: 20 }.to_string(),
            "Too many letters (maximum 20 allowed)"
        );
    }

    /// Test that all variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        let all_codes = sample_input_errors()
            .iter()
            .map(InputError::code)
            .chain(sample_dictionary_errors().iter().map(DictionaryError::code))
            .collect::<Vec<_>>();

        for code in all_codes {
            assert!(codes.insert(code), "Duplicate error code: {}", code);
        }
    }

    #[test]
    fn test_error_code_format() {
        for err in sample_input_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters", code);
            assert!(code.starts_with('I'));
            assert!(code[1..].parse::<u16>().is_ok());
        }
        for err in sample_dictionary_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters", code);
            assert!(code.starts_with('D'));
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    /// Test that display_detailed properly formats errors
    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = InputError::TooManyLetters { len: 30, max: 20 };
        let detailed = err.display_detailed();

        assert!(detailed.contains("I003"));
        assert!(detailed.contains(&err.to_string()));
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = DictionaryError::NoSources;
        assert_eq!(err.display_detailed(), "no dictionary sources configured (D002)");
    }

    #[test]
    fn test_source_unavailable_mentions_path() {
        let err = DictionaryError::SourceUnavailable {
            path: PathBuf::from("/app/scowl-large.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/scowl-large.txt"));
        assert!(msg.contains("No such file"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_help_text_is_substantial() {
        for err in sample_input_errors() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
        }
    }
}
