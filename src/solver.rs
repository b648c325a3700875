//! The matching engine: find dictionary words that can be built from a set
//! of letters.
//!
//! Two predicates are supported:
//!
//! - **formable**: every letter of the word is available in the input at least
//!   as many times as the word uses it (a sub-multiset test);
//! - **exact anagram**: the word uses every input letter exactly once
//!   (multiset equality).
//!
//! Both scan the whole [`Dictionary`], drop words rejected by its
//! [`FilterPolicy`](crate::quality::FilterPolicy), and return the survivors
//! sorted by length, then alphabetically. The functions are pure: they take
//! the store by shared reference, do no I/O, and can run on any number of
//! threads at once.
//!
//! # Examples
//!
//! ```
//! use wordmixr::dictionary::Dictionary;
//! use wordmixr::solver;
//!
//! let dict = Dictionary::from_words(["ace", "cab", "ache", "each", "beach", "cat"]);
//! let words = solver::find_formable("bhace", &dict, 3);
//! assert_eq!(words, vec!["ace", "cab", "ache", "each", "beach"]);
//!
//! let anagrams = solver::find_exact_anagrams("hbeac", &dict, 3);
//! assert_eq!(anagrams, vec!["beach"]);
//! ```

use crate::dictionary::Dictionary;
use crate::letter_counts::LetterCounts;
use crate::quality::FilterPolicy;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

/// Which predicate a query applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Sub-multiset of the input letters.
    Formable,
    /// Exactly the input letters, each used once.
    ExactAnagram,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Formable => f.write_str("formable"),
            MatchMode::ExactAnagram => f.write_str("exact-anagram"),
        }
    }
}

/// One request against the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Sanitized letters.
    pub letters: String,
    pub min_length: usize,
    pub mode: MatchMode,
}

impl Query {
    #[must_use]
    pub fn new(letters: impl Into<String>, min_length: usize, mode: MatchMode) -> Self {
        Query { letters: letters.into(), min_length, mode }
    }

    /// Run this query against `dictionary`.
    #[must_use]
    pub fn run(&self, dictionary: &Dictionary) -> Vec<String> {
        solve(&self.letters, dictionary, self.min_length, self.mode)
    }
}

/// All quality words that can be spelled with `letters`, without reusing a
/// letter more often than it appears.
#[must_use]
pub fn find_formable(letters: &str, dictionary: &Dictionary, min_length: usize) -> Vec<String> {
    solve(letters, dictionary, min_length, MatchMode::Formable)
}

/// All quality words that use exactly the letters of `letters`.
#[must_use]
pub fn find_exact_anagrams(letters: &str, dictionary: &Dictionary, min_length: usize) -> Vec<String> {
    solve(letters, dictionary, min_length, MatchMode::ExactAnagram)
}

/// Run `mode` over `dictionary` with the filter policy it was built with.
#[must_use]
pub fn solve(letters: &str, dictionary: &Dictionary, min_length: usize, mode: MatchMode) -> Vec<String> {
    solve_with_policy(letters, dictionary, min_length, mode, dictionary.filter_policy())
}

/// Run `mode` over `dictionary` with an explicit filter policy.
///
/// Empty letters or an empty dictionary give an empty result, not an error.
#[must_use]
pub fn solve_with_policy(
    letters: &str,
    dictionary: &Dictionary,
    min_length: usize,
    mode: MatchMode,
    policy: FilterPolicy,
) -> Vec<String> {
    let available = LetterCounts::from_letters(letters);
    if available.is_empty() || dictionary.is_empty() {
        return Vec::new();
    }

    let t_scan = Instant::now();
    let mut words: Vec<String> = dictionary
        .iter()
        .filter(|word| matches_length(word, available.len(), mode))
        .filter(|word| policy.accepts(word, min_length))
        .filter(|word| {
            LetterCounts::from_word(word).is_some_and(|counts| match mode {
                MatchMode::Formable => counts.is_within(&available),
                MatchMode::ExactAnagram => counts.is_anagram_of(&available),
            })
        })
        .map(str::to_string)
        .collect();

    words.sort_unstable_by(|a, b| by_length_then_alpha(a, b));

    debug!(
        "{mode} scan of {} words for '{available}' (min {min_length}): {} matches in {:.3}ms",
        dictionary.len(),
        words.len(),
        t_scan.elapsed().as_secs_f64() * 1000.0
    );
    words
}

// Cheap length pre-check before building a letter map for the word.
fn matches_length(word: &str, available: usize, mode: MatchMode) -> bool {
    let len = word.len();
    match mode {
        MatchMode::Formable => len <= available,
        MatchMode::ExactAnagram => len == available,
    }
}

/// Result order: shorter words first, then alphabetical.
#[must_use]
pub fn by_length_then_alpha(a: &str, b: &str) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b), // same length → alphabetical order
        other => other,              // otherwise sort by length
    }
}
