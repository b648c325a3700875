//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the matching engine on *your* machine.
//! - Loads the dictionary once, then runs each letter case several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few results:            `cargo run --bin bench_local --release -- -p 5`
//! - Specific word list:             `cargo run --bin bench_local --release -- -d words_alpha.txt`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - Cases live in `get_cases()` below.
//! - Printing is kept outside the timed section; one warm-up run per case is not timed.

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use wordmixr::config::Config;
use wordmixr::loader;
use wordmixr::solver::{self, MatchMode};

/// Simple local benchmark runner: load the dictionary once, time several letter sets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list to load (defaults to the configured candidates, then the built-in list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Minimum word length
    #[arg(short = 'm', long, default_value_t = 3)]
    min_word_length: usize,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many words per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: the letters and which predicate to run.
#[derive(Clone)]
struct Case {
    letters: &'static str,
    mode: MatchMode,
}

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { letters: "bhace", mode: MatchMode::Formable },
        Case { letters: "grindk", mode: MatchMode::Formable },
        Case { letters: "listen", mode: MatchMode::ExactAnagram },
        Case { letters: "abcdefghijklmnopqrst", mode: MatchMode::Formable },
        Case { letters: "eeeeeeeeeeeeeeeeeeee", mode: MatchMode::Formable },
        Case { letters: "stationeries", mode: MatchMode::ExactAnagram },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

fn main() {
    /// One row in the benchmark summary: (case label, median seconds, number of results).
    type SummaryRow = (String, f64, usize);

    let cli = Cli::parse();
    wordmixr::log::init_logger(wordmixr::log::debug_requested());

    // Load the dictionary once. This I/O is *not* included in per-case timing.
    let mut config = Config::from_env();
    config.dictionary_path = cli.dictionary;
    let t_load = Instant::now();
    let dict = loader::load_dictionary(&config);
    eprintln!(
        "Loaded {} words ({}) in {:.3}s",
        dict.len(),
        dict.provenance(),
        t_load.elapsed().as_secs_f64()
    );

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let label = format!("{} {}", case.mode, case.letters);
        eprintln!("\n[{:02}] {}", idx + 1, label);

        // One *warm-up* execution per case; its timing is ignored.
        let _warmup = solver::solve(case.letters, &dict, cli.min_word_length, case.mode);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_words: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_solve = Instant::now();
            let words = solver::solve(black_box(case.letters), &dict, cli.min_word_length, case.mode);
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            last_words = black_box(words);

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} {})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_words.len(),
                pluralizer(last_words.len(), "word")
            );
        }

        let med = median(times);

        if cli.print_limit > 0 {
            for word in last_words.iter().take(cli.print_limit) {
                println!("{word}");
            }
        }

        eprintln!("  → median {:.4}s over {} run(s)", med, cli.num_repeats);
        summary.push((label, med, last_words.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<36} | {:>10} | {:>7}", "case", "median (s)", "# words");
    eprintln!("{:-<36}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (label, med, num_words) in &summary {
        eprintln!("{label:<36} | {med:>10.4} | {num_words:>7}");
    }
}
