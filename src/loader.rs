//! Startup dictionary resolution: try each candidate file in order, keep the
//! first one that loads, and fall back to the built-in list if none do.

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::errors::DictionaryError;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Load the first readable file among `paths` that yields at least one entry.
///
/// A file that opens but contains no usable words is treated like an
/// unreadable one and the walk moves on.
///
/// # Errors
///
/// Returns the error from the last candidate tried, or
/// [`DictionaryError::NoSources`] if `paths` is empty.
pub fn try_load_first(paths: &[PathBuf]) -> Result<Dictionary, DictionaryError> {
    let mut last_err = DictionaryError::NoSources;
    for path in paths {
        if !path.exists() {
            log::debug!("Dictionary candidate not found: {}", path.display());
            last_err = DictionaryError::SourceUnavailable {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            };
            continue;
        }
        match Dictionary::load_from_path(path) {
            Ok(dict) if !dict.is_empty() => return Ok(dict),
            Ok(_) => {
                let e = DictionaryError::SourceUnavailable {
                    path: path.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidData, "no usable entries"),
                };
                warn!("Error loading dictionary: {}", e.display_detailed());
                last_err = e;
            }
            Err(e) => {
                warn!("Error loading dictionary: {}", e.display_detailed());
                last_err = e;
            }
        }
    }
    Err(last_err)
}

/// Load the first readable candidate, or the built-in list if every one fails.
///
/// Never fails: a missing dictionary is recovered here and only shows up in
/// the returned store's provenance and source.
#[must_use]
pub fn load_or_fallback(paths: &[PathBuf]) -> Dictionary {
    let t_load = Instant::now();
    let dict = match try_load_first(paths) {
        Ok(dict) => dict,
        Err(e) => {
            warn!("No dictionary source could be read ({}); using fallback dictionary", e.code());
            Dictionary::builtin_fallback()
        }
    };
    info!(
        "Loaded dictionary: {} ({} words, {}) in {:.3}s",
        dict.source(),
        dict.len(),
        dict.provenance(),
        t_load.elapsed().as_secs_f64()
    );
    dict
}

/// Resolve and load the dictionary described by `config`.
#[must_use]
pub fn load_dictionary(config: &Config) -> Dictionary {
    info!(
        "Dictionary configuration: {}",
        config.dictionary_choice.description()
    );
    load_or_fallback(&config.dictionary_paths())
}
