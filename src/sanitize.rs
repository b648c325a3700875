//! Input cleaning and validation, applied before a query reaches the engine.

use crate::errors::InputError;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// Longest cleaned input a single query may use.
pub const MAX_LETTERS: usize = 20;
/// Inclusive bounds on the minimum word length.
pub const MIN_WORD_LENGTH_RANGE: (usize, usize) = (1, 10);
/// Minimum word length used when the caller gives none.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

pub(crate) static NON_ALPHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]").unwrap());

/// Strip everything but ASCII letters and lowercase the rest.
#[must_use]
pub fn clean_letters(letters: &str) -> String {
    NON_ALPHA_RE.replace_all(letters, "").to_ascii_lowercase()
}

/// Validate raw letters, returning the cleaned string to query with.
///
/// # Errors
///
/// - [`InputError::MissingLetters`] if `letters` is absent or empty
/// - [`InputError::NoValidLetters`] if nothing is left after cleaning
/// - [`InputError::TooManyLetters`] if more than [`MAX_LETTERS`] remain
pub fn validate_letters(letters: Option<&str>) -> Result<String, InputError> {
    let raw = match letters {
        Some(s) if !s.is_empty() => s,
        _ => return Err(InputError::MissingLetters),
    };

    let cleaned = clean_letters(raw);
    if cleaned.is_empty() {
        return Err(InputError::NoValidLetters);
    }
    if cleaned.len() > MAX_LETTERS {
        return Err(InputError::TooManyLetters { len: cleaned.len(), max: MAX_LETTERS });
    }
    Ok(cleaned)
}

/// Check a requested minimum word length.
///
/// # Errors
///
/// [`InputError::MinLengthOutOfRange`] outside [`MIN_WORD_LENGTH_RANGE`].
pub fn validate_min_length(value: i64) -> Result<usize, InputError> {
    let (min, max) = MIN_WORD_LENGTH_RANGE;
    usize::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(InputError::MinLengthOutOfRange { value, min, max })
}
