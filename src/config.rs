//! Dictionary selection: which word list(s) to try, and in what order.
//!
//! The active choice comes from the `WORDMIXR_DICTIONARY` environment variable
//! (or the CLI's `--dictionary-type`), defaulting to SCOWL Large. Each choice
//! expands to a short list of candidate file locations; `auto` chains several
//! choices in priority order.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the dictionary to load.
pub const DICTIONARY_ENV_VAR: &str = "WORDMIXR_DICTIONARY";

/// Directories each dictionary file name is looked up in, in order.
const SEARCH_PREFIXES: [&str; 3] = ["", "/app", "app"];

/// The word lists the service knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DictionaryChoice {
    /// Google's 10,000 most common English words
    #[value(name = "google_10k")]
    #[serde(rename = "google_10k")]
    Google10k,
    /// SCOWL Medium (~58k curated words)
    ScowlMedium,
    /// SCOWL Large (~126k curated words)
    #[default]
    ScowlLarge,
    /// Unfiltered comprehensive list (370k+ words)
    Comprehensive,
    /// SCOWL Large, then Medium, then Google 10k, then comprehensive
    Auto,
}

/// Returned when a dictionary name isn't one of [`DictionaryChoice::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dictionary type '{0}'")]
pub struct UnknownDictionaryChoice(pub String);

impl DictionaryChoice {
    pub const ALL: [DictionaryChoice; 5] = [
        DictionaryChoice::Google10k,
        DictionaryChoice::ScowlMedium,
        DictionaryChoice::ScowlLarge,
        DictionaryChoice::Comprehensive,
        DictionaryChoice::Auto,
    ];

    /// Read the choice from [`DICTIONARY_ENV_VAR`].
    ///
    /// Unset means the default; an unrecognised value is logged and the
    /// default is used.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(DICTIONARY_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|e: UnknownDictionaryChoice| {
                log::warn!("{e} in {DICTIONARY_ENV_VAR}; using '{}'", DictionaryChoice::default());
                DictionaryChoice::default()
            }),
            Err(_) => DictionaryChoice::default(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryChoice::Google10k => "google_10k",
            DictionaryChoice::ScowlMedium => "scowl_medium",
            DictionaryChoice::ScowlLarge => "scowl_large",
            DictionaryChoice::Comprehensive => "comprehensive",
            DictionaryChoice::Auto => "auto",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryChoice::Google10k => "Google 10,000 most common English words (high quality but limited coverage)",
            DictionaryChoice::ScowlMedium => "SCOWL Medium: 58k curated words (good quality but missing some words like 'gird')",
            DictionaryChoice::ScowlLarge => "SCOWL Large: 126k curated words (perfect for word games, includes 'ache' and 'gird')",
            DictionaryChoice::Comprehensive => "Comprehensive English dictionary (370k+ words, includes obscure terms)",
            DictionaryChoice::Auto => "Auto-select: SCOWL Large preferred, with intelligent fallbacks",
        }
    }

    /// The file name of a single-list choice (`None` for `Auto`).
    #[must_use]
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            DictionaryChoice::Google10k => Some("google-10000-english.txt"),
            DictionaryChoice::ScowlMedium => Some("scowl-medium.txt"),
            DictionaryChoice::ScowlLarge => Some("scowl-large.txt"),
            DictionaryChoice::Comprehensive => Some("words_alpha.txt"),
            DictionaryChoice::Auto => None,
        }
    }

    /// Candidate paths for this choice, in the order they should be tried.
    ///
    /// Relative candidates are resolved against `data_dir` when given.
    #[must_use]
    pub fn candidate_paths(&self, data_dir: Option<&Path>) -> Vec<PathBuf> {
        let choices: &[DictionaryChoice] = match self {
            DictionaryChoice::Auto => &[
                DictionaryChoice::ScowlLarge,
                DictionaryChoice::ScowlMedium,
                DictionaryChoice::Google10k,
                DictionaryChoice::Comprehensive,
            ],
            single => std::slice::from_ref(single),
        };

        choices
            .iter()
            .filter_map(DictionaryChoice::file_name)
            .flat_map(|name| SEARCH_PREFIXES.iter().map(move |prefix| Path::new(prefix).join(name)))
            .map(|path| match data_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            })
            .collect()
    }
}

impl fmt::Display for DictionaryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryChoice {
    type Err = UnknownDictionaryChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DictionaryChoice::ALL
            .into_iter()
            .find(|choice| choice.as_str() == wanted)
            .ok_or_else(|| UnknownDictionaryChoice(s.to_string()))
    }
}

/// Everything needed to locate the dictionary at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub dictionary_choice: DictionaryChoice,
    /// Explicit file that replaces the candidate list entirely.
    pub dictionary_path: Option<PathBuf>,
    /// Base directory for relative candidates.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Configuration from the environment alone.
    #[must_use]
    pub fn from_env() -> Self {
        Config {
            dictionary_choice: DictionaryChoice::from_env(),
            ..Config::default()
        }
    }

    /// Files to try, in priority order.
    #[must_use]
    pub fn dictionary_paths(&self) -> Vec<PathBuf> {
        match &self.dictionary_path {
            Some(path) => vec![path.clone()],
            None => self.dictionary_choice.candidate_paths(self.data_dir.as_deref()),
        }
    }
}
