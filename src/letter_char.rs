use std::collections::HashSet;
use std::sync::LazyLock;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Vowels as the quality filter sees them. `y` is not one, so it counts
/// toward consonant runs.
pub(crate) const VOWELS: &str = "aeiou";

static VOWEL_SET: LazyLock<HashSet<char>> = LazyLock::new(|| VOWELS.chars().collect());

pub(crate) trait LetterChar {
    fn is_vowel(&self) -> bool;
    fn is_consonant(&self) -> bool;
    /// 'a' -> 0, 'b' -> 1, ..., 'z' -> 25; `None` for anything else.
    fn letter_index(&self) -> Option<usize>;
}

impl LetterChar for char {
    fn is_vowel(&self) -> bool {
        VOWEL_SET.contains(self)
    }
    /// Any lowercase ASCII letter that isn't a vowel. Accented and other
    /// non-ASCII letters are not consonants, so they never extend a run.
    fn is_consonant(&self) -> bool {
        self.is_ascii_lowercase() && !self.is_vowel()
    }
    fn letter_index(&self) -> Option<usize> {
        if self.is_ascii_lowercase() {
            Some(*self as usize - 'a' as usize)
        } else {
            None
        }
    }
}
