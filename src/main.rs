use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordmixr::config::{Config, DictionaryChoice};
use wordmixr::sanitize::DEFAULT_MIN_WORD_LENGTH;
use wordmixr::WordService;

/// WordMixr word puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Word list to load (one word per line); overrides --dictionary-type
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Which known word list to look for [default: $WORDMIXR_DICTIONARY, else scowl_large]
    #[arg(short = 't', long, global = true, value_enum)]
    dictionary_type: Option<DictionaryChoice>,

    /// Directory that relative dictionary paths are resolved against
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every word that can be formed from the letters
    Solve {
        /// Scrambled letters (non-letters are ignored)
        letters: Option<String>,

        /// Minimum word length to include in results (1-10)
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_WORD_LENGTH as i64, allow_negative_numbers = true)]
        min_word_length: i64,
    },
    /// Find anagrams that use all the letters exactly once
    Anagrams {
        /// Letters to rearrange (non-letters are ignored)
        letters: Option<String>,

        /// Minimum word length to include in results (1-10)
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_WORD_LENGTH as i64, allow_negative_numbers = true)]
        min_word_length: i64,
    },
    /// Report dictionary status and configuration
    Health,
    /// Show the service name, version and operations
    Info,
}

/// Entry point of the WordMixr CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// before exiting with code 1. A rejected query is not an error here: it
/// prints a failure envelope and exits with code 2.
fn main() -> ExitCode {
    let debug_enabled = wordmixr::log::debug_requested();
    wordmixr::log::init_logger(debug_enabled);

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary (first readable candidate, or the built-in list).
/// 3. Run the requested operation.
/// 4. Print the JSON result on stdout and timings on stderr.
///
/// Returns whether the operation succeeded, or an error if output could not
/// be written.
fn try_main() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(choice) = cli.dictionary_type {
        config.dictionary_choice = choice;
    }
    config.dictionary_path = cli.dictionary;
    config.data_dir = cli.data_dir;

    // 1. Load the dictionary once
    let t_load = Instant::now();
    let service = WordService::from_config(&config);
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Run the operation
    let t_run = Instant::now();
    let (ok, json) = match &cli.command {
        Command::Solve { letters, min_word_length } => {
            let resp = service.solve(letters.as_deref(), *min_word_length);
            (resp.is_success(), to_json(&resp, cli.pretty)?)
        }
        Command::Anagrams { letters, min_word_length } => {
            let resp = service.anagrams(letters.as_deref(), *min_word_length);
            (resp.is_success(), to_json(&resp, cli.pretty)?)
        }
        Command::Health => (true, to_json(&service.health(), cli.pretty)?),
        Command::Info => (true, to_json(&service.info(), cli.pretty)?),
    };
    let run_secs = t_run.elapsed().as_secs_f64();

    // 3. Result on stdout, diagnostics on stderr
    println!("{json}");
    eprintln!(
        "Loaded {} words ({}) in {:.3}s; answered in {:.3}s.",
        service.dictionary().len(),
        service.dictionary().provenance(),
        load_secs,
        run_secs
    );

    Ok(ok)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordmixr::response::Response;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_defaults() {
        let cli = Cli::try_parse_from(["wordmixr", "solve", "bhace"]).unwrap();
        match cli.command {
            Command::Solve { letters, min_word_length } => {
                assert_eq!(letters.as_deref(), Some("bhace"));
                assert_eq!(min_word_length, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "wordmixr", "anagrams", "listen", "-m", "6", "--dictionary-type", "google_10k", "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.dictionary_type, Some(DictionaryChoice::Google10k));
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Anagrams { min_word_length: 6, .. }));
    }

    #[test]
    fn test_failure_envelope_serializes() {
        let json = to_json(&Response::failure(["Letters parameter is required"]), false).unwrap();
        assert_eq!(json, r#"{"success":false,"errors":["Letters parameter is required"],"words":[]}"#);
    }
}
