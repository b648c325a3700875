//! Letter multisets: per-letter occurrence counts over `a`–`z`.
//!
//! Both the query letters and every candidate word are reduced to a
//! [`LetterCounts`]; the matching engine then compares the two maps instead of
//! looking at positions, so "formable" is a sub-multiset test and "exact
//! anagram" is multiset equality.

use crate::letter_char::{LetterChar, ALPHABET_SIZE};
use std::fmt;

/// Per-letter counts saturate at `u32::MAX`, far beyond any input the
/// validator lets through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    char_counts: [u32; ALPHABET_SIZE],
    len: usize,
}

impl LetterCounts {
    /// Count the letters of a query string.
    ///
    /// Letters are case-folded; anything outside `a`–`z` after folding is
    /// skipped, so the resulting `len()` is the number of letters actually
    /// available for matching. Sanitized input never contains such characters.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut counts = LetterCounts::default();
        for c in letters.chars().map(|c| c.to_ascii_lowercase()) {
            if let Some(idx) = c.letter_index() {
                counts.char_counts[idx] = counts.char_counts[idx].saturating_add(1);
                counts.len += 1;
            }
        }
        counts
    }

    /// Count the letters of a dictionary word.
    ///
    /// Returns `None` if the word contains anything other than lowercase
    /// `a`–`z` (apostrophes, digits, accented letters). Such a word can never be
    /// built from sanitized letters, so callers treat `None` as "no match".
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = LetterCounts::default();
        for c in word.chars() {
            let idx = c.letter_index()?;
            counts.char_counts[idx] = counts.char_counts[idx].saturating_add(1);
            counts.len += 1;
        }
        Some(counts)
    }

    /// Total number of letters counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occurrences of `c` (0 for anything outside `a`–`z`).
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        c.to_ascii_lowercase()
            .letter_index()
            .map_or(0, |idx| self.char_counts[idx] as usize)
    }

    /// True if every letter of `self` occurs in `available` at least as often.
    #[must_use]
    pub fn is_within(&self, available: &LetterCounts) -> bool {
        self.len <= available.len
            && self
                .char_counts
                .iter()
                .zip(available.char_counts.iter())
                .all(|(need, have)| need <= have)
    }

    /// True if `self` and `other` are the same multiset (an exact anagram).
    #[must_use]
    pub fn is_anagram_of(&self, other: &LetterCounts) -> bool {
        self == other
    }
}

impl fmt::Display for LetterCounts {
    /// Renders the multiset as its alphagram (letters in sorted order).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &n) in self.char_counts.iter().enumerate() {
            // idx < 26, so this is always a lowercase ASCII letter
            let c = char::from(b'a' + idx as u8);
            for _ in 0..n {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
