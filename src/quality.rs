//! Word-quality filter: separates usable dictionary entries from noise.
//!
//! Every provenance gets the basic rules (minimum length, single repeated
//! letter, doubled two-letter tokens). Only the comprehensive, unfiltered
//! word list also gets the heuristic noise rules, which were tuned by hand
//! against that one list and are kept as-is.

use crate::dictionary::Provenance;
use crate::letter_char::LetterChar;

/// Endings that flag short Latin-looking entries in the comprehensive list.
pub const LATIN_SUFFIXES: [&str; 8] = ["us", "um", "ae", "is", "os", "es", "ei", "ii"];

/// Latin-suffix rule only applies to words of at most this many letters.
pub const MAX_LATIN_SUFFIX_WORD_LEN: usize = 5;

/// Longest run of consecutive consonants a word may contain.
pub const MAX_CONSONANT_RUN: usize = 4;

/// Maximum occurrences of each of `x` and `z`.
pub const MAX_RARE_LETTER_COUNT: usize = 1;

/// Tokens found to be junk by manual review of comprehensive-list results.
pub const DENY_LIST: [&str; 16] = [
    "haec", "hic", "hoc", "chab", "bache", "habe", "bch", "ech", "hae", "ecb", "hcb", "ceh",
    "beh", "heb", "chb", "bhc",
];

/// Filter strictness, resolved once from a dictionary's [`Provenance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Apply the comprehensive-list heuristics (Latin suffixes, consonant
    /// runs, repeated `x`/`z`, deny-list).
    pub strict_heuristics: bool,
}

impl FilterPolicy {
    /// Basic rules only.
    pub const BASIC: FilterPolicy = FilterPolicy { strict_heuristics: false };
    /// Basic rules plus the noise heuristics.
    pub const STRICT: FilterPolicy = FilterPolicy { strict_heuristics: true };

    #[must_use]
    pub fn for_provenance(provenance: Provenance) -> Self {
        match provenance {
            Provenance::Comprehensive => FilterPolicy::STRICT,
            Provenance::Compact
            | Provenance::Medium
            | Provenance::Large
            | Provenance::Fallback
            | Provenance::Unknown => FilterPolicy::BASIC,
        }
    }

    /// Decide whether `word` is a result-worthy entry.
    ///
    /// Rules are checked in order and the first failure rejects:
    /// 1. shorter than `min_length`
    /// 2. one letter repeated (`"aaa"`)
    /// 3. doubled two-letter token (`"aa"` .. `"zz"`)
    /// 4. strict policy only: Latin suffix on a short word, a consonant run
    ///    longer than [`MAX_CONSONANT_RUN`], repeated `x` or `z`, or a
    ///    [`DENY_LIST`] hit
    #[must_use]
    pub fn accepts(&self, word: &str, min_length: usize) -> bool {
        let len = word.chars().count();
        if len < min_length {
            return false;
        }
        if is_single_repeated_char(word) {
            return false;
        }
        if is_doubled_letter_pair(word) {
            return false;
        }
        if self.strict_heuristics && fails_strict_heuristics(word, len) {
            return false;
        }
        true
    }
}

/// Filter `word` under the policy for `provenance`.
#[must_use]
pub fn is_quality_word(word: &str, min_length: usize, provenance: Provenance) -> bool {
    FilterPolicy::for_provenance(provenance).accepts(word, min_length)
}

fn is_single_repeated_char(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut rest = chars.peekable();
            rest.peek().is_some() && rest.all(|c| c == first)
        }
        None => false,
    }
}

fn is_doubled_letter_pair(word: &str) -> bool {
    matches!(word.as_bytes(), [a, b] if a == b && a.is_ascii_lowercase())
}

fn fails_strict_heuristics(word: &str, len: usize) -> bool {
    if len <= MAX_LATIN_SUFFIX_WORD_LEN && LATIN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return true;
    }
    if longest_consonant_run(word) > MAX_CONSONANT_RUN {
        return true;
    }
    if count_char(word, 'x') > MAX_RARE_LETTER_COUNT || count_char(word, 'z') > MAX_RARE_LETTER_COUNT {
        return true;
    }
    DENY_LIST.contains(&word)
}

fn longest_consonant_run(word: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in word.chars() {
        if c.is_consonant() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn count_char(word: &str, target: char) -> usize {
    word.chars().filter(|&c| c == target).count()
}
