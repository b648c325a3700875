//! Request handling around the engine: validate, solve, wrap in an envelope.
//!
//! A [`WordService`] owns the loaded [`Dictionary`] and is shared read-only
//! by every request. It never fails a request for engine reasons: the only
//! failure envelope it produces comes from input validation.

use crate::config::{Config, DictionaryChoice};
use crate::dictionary::Dictionary;
use crate::loader::load_dictionary;
use crate::response::{ApiInfo, ConfigurationInfo, DictionaryInfo, HealthReport, Response};
use crate::sanitize::{validate_letters, validate_min_length};
use crate::solver::{self, MatchMode};
use log::info;
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "Welcome to WordMixr";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD: &str = env!("GIT_HASH");

#[derive(Debug, Clone)]
pub struct WordService {
    dictionary: Dictionary,
    choice: DictionaryChoice,
}

impl WordService {
    /// Wrap an already built dictionary.
    #[must_use]
    pub fn new(dictionary: Dictionary, choice: DictionaryChoice) -> Self {
        WordService { dictionary, choice }
    }

    /// Load the dictionary described by `config` (with fallback) and wrap it.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let dictionary = load_dictionary(config);
        info!("Successfully loaded {} dictionary", dictionary.provenance());
        WordService::new(dictionary, config.dictionary_choice)
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Every word formable from `letters`.
    #[must_use]
    pub fn solve(&self, letters: Option<&str>, min_length: i64) -> Response {
        self.handle(letters, min_length, MatchMode::Formable)
    }

    /// Every word using exactly the letters given.
    #[must_use]
    pub fn anagrams(&self, letters: Option<&str>, min_length: i64) -> Response {
        self.handle(letters, min_length, MatchMode::ExactAnagram)
    }

    fn handle(&self, letters: Option<&str>, min_length: i64, mode: MatchMode) -> Response {
        let cleaned = match validate_letters(letters) {
            Ok(cleaned) => cleaned,
            Err(e) => {
                log::debug!("Rejected {mode} query: {}", e.display_detailed());
                return e.into();
            }
        };
        let min_length = match validate_min_length(min_length) {
            Ok(n) => n,
            Err(e) => {
                log::debug!("Rejected {mode} query: {}", e.display_detailed());
                return e.into();
            }
        };

        let words = solver::solve(&cleaned, &self.dictionary, min_length, mode);
        info!(
            "Found {} {} for letters: {cleaned} (min length: {min_length})",
            words.len(),
            match mode {
                MatchMode::Formable => "words",
                MatchMode::ExactAnagram => "anagrams",
            }
        );
        Response::success(words, cleaned)
    }

    #[must_use]
    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            dictionary_loaded: !self.dictionary.is_empty(),
            dictionary_size: self.dictionary.len(),
            dictionary_info: DictionaryInfo::describe(&self.dictionary, self.choice),
            configuration: ConfigurationInfo::from(self.choice),
            version: VERSION,
            build: BUILD,
        }
    }

    #[must_use]
    pub fn info(&self) -> ApiInfo {
        ApiInfo {
            message: SERVICE_NAME,
            version: VERSION,
            endpoints: BTreeMap::from([
                ("solve", "Find every word that can be formed from the letters"),
                ("anagrams", "Find anagrams using all letters exactly once"),
                ("health", "Report dictionary status and configuration"),
            ]),
        }
    }
}
