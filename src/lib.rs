// Reusable library API, shared by the CLI and the benchmark runner
pub mod config;
pub mod dictionary;
pub mod errors;
mod fallback;
mod letter_char;
pub mod letter_counts;
pub mod loader;
pub mod log;
pub mod quality;
pub mod response;
pub mod sanitize;
pub mod service;
pub mod solver;

pub use dictionary::{Dictionary, Provenance};
pub use service::WordService;
pub use solver::{find_exact_anagrams, find_formable, MatchMode, Query};
