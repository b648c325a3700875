//! `dictionary` — the immutable word store the matching engine scans.
//!
//! A [`Dictionary`] is built exactly once, from a file, an in-memory string,
//! or the built-in fallback list, and is never mutated afterwards. It is
//! `Send + Sync`, so one instance can be shared by reference (or behind an
//! `Arc`) across any number of concurrent queries without locking.
//!
//! The parsing logic:
//! - Each line holds one word.
//! - Lines are trimmed and lowercased.
//! - Empty lines and entries shorter than 2 characters are skipped.
//! - Duplicates collapse (set semantics). There is no defined iteration
//!   order; result ordering is the engine's job.
//!
//! Each store carries a [`Provenance`] naming the kind of word list it came
//! from, and the [`FilterPolicy`] derived from it when the store is built.

use crate::errors::DictionaryError;
use crate::fallback::FALLBACK_WORDS;
use crate::quality::FilterPolicy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Entries shorter than this are dropped at build time.
pub const MIN_ENTRY_LEN: usize = 2;

/// Word-count thresholds used to classify a list that isn't recognised by name.
pub const COMPACT_MAX_WORDS: usize = 20_000;
pub const MEDIUM_MAX_WORDS: usize = 70_000;
pub const LARGE_MAX_WORDS: usize = 200_000;

/// Which kind of word list a [`Dictionary`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Compact,
    Medium,
    Large,
    Comprehensive,
    Fallback,
    Unknown,
}

impl Provenance {
    /// Classify a successfully loaded file.
    ///
    /// Known file names win; otherwise the word count decides:
    /// `< 20_000` compact, `< 70_000` medium, `< 200_000` large, else comprehensive.
    #[must_use]
    pub fn classify(path: &Path, word_count: usize) -> Provenance {
        let name = path.to_string_lossy();
        if name.contains("google-10000") {
            Provenance::Compact
        } else if name.contains("scowl-medium") {
            Provenance::Medium
        } else if name.contains("scowl-large") {
            Provenance::Large
        } else {
            Provenance::from_word_count(word_count)
        }
    }

    #[must_use]
    pub fn from_word_count(word_count: usize) -> Provenance {
        if word_count < COMPACT_MAX_WORDS {
            Provenance::Compact
        } else if word_count < MEDIUM_MAX_WORDS {
            Provenance::Medium
        } else if word_count < LARGE_MAX_WORDS {
            Provenance::Large
        } else {
            Provenance::Comprehensive
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Compact => "compact",
            Provenance::Medium => "medium",
            Provenance::Large => "large",
            Provenance::Comprehensive => "comprehensive",
            Provenance::Fallback => "fallback",
            Provenance::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a [`Dictionary`]'s words came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Builtin,
    InMemory,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Builtin => f.write_str("builtin_fallback"),
            DictionarySource::InMemory => f.write_str("in_memory"),
        }
    }
}

/// An immutable set of lowercase dictionary words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    provenance: Provenance,
    policy: FilterPolicy,
    source: DictionarySource,
}

impl Dictionary {
    fn new(words: HashSet<String>, provenance: Provenance, source: DictionarySource) -> Self {
        Dictionary {
            words,
            provenance,
            policy: FilterPolicy::for_provenance(provenance),
            source,
        }
    }

    /// Build an in-memory store from any collection of words.
    ///
    /// Words go through the same normalisation as file lines. The result has
    /// [`Provenance::Unknown`]; use [`Dictionary::with_provenance`] to tag it.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_entry(w.as_ref()))
            .collect();
        Dictionary::new(words, Provenance::Unknown, DictionarySource::InMemory)
    }

    /// Parse a newline-separated word list held in memory.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Self {
        Dictionary::from_words(contents.lines())
    }

    /// Read a word list from any line-oriented source.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a line cannot be read (including
    /// invalid UTF-8).
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize_entry(&line?) {
                words.insert(word);
            }
        }
        Ok(Dictionary::new(words, Provenance::Unknown, DictionarySource::InMemory))
    }

    /// Read and parse a word-list file, classifying its [`Provenance`].
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::SourceUnavailable`] if the file is missing
    /// or unreadable.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path_ref = path.as_ref();
        let unavailable = |source: io::Error| DictionaryError::SourceUnavailable {
            path: path_ref.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path_ref).map_err(unavailable)?;
        let parsed = Self::from_reader(io::BufReader::new(file)).map_err(unavailable)?;

        let provenance = Provenance::classify(path_ref, parsed.len());
        Ok(Dictionary::new(
            parsed.words,
            provenance,
            DictionarySource::File(path_ref.to_path_buf()),
        ))
    }

    /// The small built-in list used when every configured source fails.
    #[must_use]
    pub fn builtin_fallback() -> Self {
        let words = FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect();
        Dictionary::new(words, Provenance::Fallback, DictionarySource::Builtin)
    }

    /// Re-tag the store, re-resolving its filter policy.
    #[must_use]
    pub fn with_provenance(self, provenance: Provenance) -> Self {
        Dictionary::new(self.words, provenance, self.source)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every word, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    #[must_use]
    pub fn filter_policy(&self) -> FilterPolicy {
        self.policy
    }

    #[must_use]
    pub fn source(&self) -> &DictionarySource {
        &self.source
    }
}

// Trim, lowercase, and drop entries that are too short to keep.
fn normalize_entry(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.chars().count() < MIN_ENTRY_LEN {
        None
    } else {
        Some(word)
    }
}
