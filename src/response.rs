//! JSON envelopes returned to callers.
//!
//! ```json
//! {"success": true, "input_letters": "bhace", "word_count": 2, "words": ["ace", "ache"]}
//! {"success": false, "errors": ["No valid letters found in input"], "words": []}
//! ```

use crate::config::{DictionaryChoice, DICTIONARY_ENV_VAR};
use crate::dictionary::{Dictionary, Provenance};
use crate::errors::InputError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub input_letters: String,
    pub word_count: usize,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub errors: Vec<String>,
    pub words: Vec<String>,
}

/// Either envelope; serializes as whichever one it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    #[must_use]
    pub fn success(words: Vec<String>, input_letters: impl Into<String>) -> Self {
        Response::Success(SuccessResponse {
            success: true,
            input_letters: input_letters.into(),
            word_count: words.len(),
            words,
        })
    }

    #[must_use]
    pub fn failure<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Response::Error(ErrorResponse {
            success: false,
            errors: errors.into_iter().map(Into::into).collect(),
            words: Vec::new(),
        })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// The result words (always empty for a failure).
    #[must_use]
    pub fn words(&self) -> &[String] {
        match self {
            Response::Success(r) => &r.words,
            Response::Error(r) => &r.words,
        }
    }
}

impl From<InputError> for Response {
    fn from(e: InputError) -> Self {
        Response::failure([e.to_string()])
    }
}

/// The active configuration as reported by [`HealthReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInfo {
    #[serde(rename = "type")]
    pub choice: DictionaryChoice,
    pub description: &'static str,
}

impl From<DictionaryChoice> for ConfigInfo {
    fn from(choice: DictionaryChoice) -> Self {
        ConfigInfo { choice, description: choice.description() }
    }
}

/// What was actually loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryInfo {
    pub filepath: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub provenance: Provenance,
    pub config: ConfigInfo,
}

impl DictionaryInfo {
    #[must_use]
    pub fn describe(dictionary: &Dictionary, choice: DictionaryChoice) -> Self {
        DictionaryInfo {
            filepath: dictionary.source().to_string(),
            size: dictionary.len(),
            provenance: dictionary.provenance(),
            config: choice.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationInfo {
    pub dictionary_type: DictionaryChoice,
    pub environment_var: &'static str,
    pub available_types: Vec<DictionaryChoice>,
}

impl From<DictionaryChoice> for ConfigurationInfo {
    fn from(choice: DictionaryChoice) -> Self {
        ConfigurationInfo {
            dictionary_type: choice,
            environment_var: DICTIONARY_ENV_VAR,
            available_types: DictionaryChoice::ALL.to_vec(),
        }
    }
}

/// Read-only diagnostics about the loaded store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub dictionary_loaded: bool,
    pub dictionary_size: usize,
    pub dictionary_info: DictionaryInfo,
    pub configuration: ConfigurationInfo,
    pub version: &'static str,
    pub build: &'static str,
}

/// Service name, version and the operations it offers, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
