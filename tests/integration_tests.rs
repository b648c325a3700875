//! Integration tests for the WordMixr solver.
//!
//! These tests exercise the complete pipeline from loading a dictionary file
//! through validation and matching to the JSON envelope, using a small fixture
//! word list that mixes real words with the kinds of noise the quality filter
//! is meant to remove.

use std::collections::HashMap;
use std::sync::Arc;

use wordmixr::dictionary::{Dictionary, Provenance};
use wordmixr::quality::is_quality_word;
use wordmixr::response::Response;
use wordmixr::solver::{by_length_then_alpha, find_exact_anagrams, find_formable};
use wordmixr::config::DictionaryChoice;
use wordmixr::WordService;

const FIXTURE: &str = "tests/fixtures/test_dictionary.txt";

/// Load the fixture dictionary from disk
fn load_test_dictionary() -> Dictionary {
    Dictionary::load_from_path(FIXTURE).expect("Failed to read test dictionary")
}

/// Independent letter-count oracle for checking engine output
fn char_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn is_sub_multiset(word: &str, letters: &str) -> bool {
    let have = char_counts(letters);
    char_counts(word)
        .iter()
        .all(|(c, n)| have.get(c).copied().unwrap_or(0) >= *n)
}

fn assert_sorted(words: &[String]) {
    for pair in words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.len() < b.len() || (a.len() == b.len() && a <= b),
            "'{a}' should not come before '{b}'"
        );
        assert_eq!(by_length_then_alpha(a, b), std::cmp::Ordering::Less);
    }
}

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn test_fixture_loads_and_normalizes() {
        let dict = load_test_dictionary();

        assert!(dict.contains("beach"));
        assert!(dict.contains("stone"), "surrounding whitespace should be trimmed");
        assert!(!dict.contains("Beach"), "entries should be lowercased");
        assert!(!dict.contains("e"), "single letters should be dropped");
        assert_eq!(dict.iter().filter(|w| *w == "beach").count(), 1);
    }

    #[test]
    fn test_fixture_provenance_by_size() {
        let dict = load_test_dictionary();
        assert_eq!(dict.provenance(), Provenance::Compact);
    }
}

#[cfg(test)]
mod formable {
    use super::*;

    #[test]
    fn test_bhace_scenario_in_memory() {
        let dict = Dictionary::from_words(["ace", "cab", "ache", "each", "beach", "cat", "gird", "bee"]);
        let words = find_formable("bhace", &dict, 3);
        assert_eq!(words, vec!["ace", "cab", "ache", "each", "beach"]);
    }

    #[test]
    fn test_bhace_on_fixture() {
        let dict = load_test_dictionary();
        let words = find_formable("bhace", &dict, 3);
        // compact lists only get the basic rules, so haec and bache survive
        assert_eq!(words, vec!["ace", "cab", "ache", "each", "haec", "bache", "beach"]);
    }

    #[test]
    fn test_bhace_on_fixture_with_strict_filter() {
        let dict = load_test_dictionary().with_provenance(Provenance::Comprehensive);
        let words = find_formable("bhace", &dict, 3);
        assert_eq!(words, vec!["ace", "cab", "ache", "each", "beach"]);
    }

    #[test]
    fn test_grindk_scenario() {
        let dict = load_test_dictionary();
        let words = find_formable("grindk", &dict, 4);
        assert_eq!(words, vec!["gird", "grid", "grin", "kind", "ring", "rink", "drink", "grind"]);
    }

    #[test]
    fn test_tac_formable_matches_anagrams() {
        let dict = Dictionary::from_words(["cat", "act", "tac", "bat"]);
        assert_eq!(find_formable("tac", &dict, 3), vec!["act", "cat", "tac"]);
    }

    #[test]
    fn test_noise_never_returned() {
        let dict = load_test_dictionary();
        let words = find_formable("aaabbzz", &dict, 1);
        for junk in ["aa", "bb", "aaa", "zz"] {
            assert!(!words.iter().any(|w| w == junk), "'{junk}' should be filtered");
        }
    }
}

#[cfg(test)]
mod anagrams {
    use super::*;

    #[test]
    fn test_tac_scenario() {
        let dict = Dictionary::from_words(["cat", "act", "tac", "bat"]);
        assert_eq!(find_exact_anagrams("tac", &dict, 3), vec!["act", "cat", "tac"]);
    }

    #[test]
    fn test_listen_scenario() {
        let dict = load_test_dictionary();
        let words = find_exact_anagrams("listen", &dict, 6);
        assert_eq!(words, vec!["enlist", "inlets", "listen", "silent", "tinsel"]);
        assert!(words.iter().all(|w| w.len() == 6));
    }

    #[test]
    fn test_stone_scenario() {
        let dict = load_test_dictionary();
        assert_eq!(find_exact_anagrams("tones", &dict, 3), vec!["notes", "onset", "stone", "tones"]);
    }

    #[test]
    fn test_no_partial_matches() {
        let dict = load_test_dictionary();
        assert_eq!(find_exact_anagrams("beach", &dict, 3), vec!["bache", "beach"]);
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    const LETTER_SETS: [&str; 8] = [
        "bhace", "grindk", "listen", "tac", "stonelis", "aabbzz", "xeroxpizza", "abcdefghijklmnopqrst",
    ];

    #[test]
    fn test_formable_is_sound_and_complete() {
        let dict = load_test_dictionary();
        for letters in LETTER_SETS {
            for min_length in [1, 3, 5] {
                let words = find_formable(letters, &dict, min_length);
                let mut expected: Vec<String> = dict
                    .iter()
                    .filter(|w| w.len() <= letters.len())
                    .filter(|w| is_quality_word(w, min_length, dict.provenance()))
                    .filter(|w| is_sub_multiset(w, letters))
                    .map(String::from)
                    .collect();
                expected.sort_by(|a, b| by_length_then_alpha(a, b));

                assert_eq!(words, expected, "letters={letters} min={min_length}");
                assert!(words.iter().all(|w| w.len() >= min_length));
                assert_sorted(&words);
            }
        }
    }

    #[test]
    fn test_anagrams_are_exact() {
        let dict = load_test_dictionary();
        for letters in LETTER_SETS {
            let letter_counts = char_counts(letters);
            for word in find_exact_anagrams(letters, &dict, 1) {
                assert_eq!(char_counts(&word), letter_counts, "'{word}' is not an anagram of '{letters}'");
            }
        }
    }

    #[test]
    fn test_results_are_idempotent() {
        let dict = load_test_dictionary();
        for letters in LETTER_SETS {
            assert_eq!(find_formable(letters, &dict, 2), find_formable(letters, &dict, 2));
            assert_eq!(find_exact_anagrams(letters, &dict, 2), find_exact_anagrams(letters, &dict, 2));
        }
    }

    #[test]
    fn test_empty_letters() {
        let dict = load_test_dictionary();
        assert!(find_formable("", &dict, 1).is_empty());
        assert!(find_exact_anagrams("", &dict, 1).is_empty());
    }

    #[test]
    fn test_concurrent_queries_share_one_store() {
        let dict = Arc::new(load_test_dictionary());
        let expected = find_formable("grindk", &dict, 3);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dict = Arc::clone(&dict);
                std::thread::spawn(move || find_formable("grindk", &dict, 3))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

#[cfg(test)]
mod service {
    use super::*;
    use serde_json::json;

    fn fixture_service() -> WordService {
        WordService::new(load_test_dictionary(), DictionaryChoice::ScowlLarge)
    }

    #[test]
    fn test_solve_envelope() {
        let resp = fixture_service().solve(Some("G-R-I-N-D-K"), 5);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "success": true,
                "input_letters": "grindk",
                "word_count": 2,
                "words": ["drink", "grind"],
            })
        );
    }

    #[test]
    fn test_anagrams_envelope() {
        let resp = fixture_service().anagrams(Some("Listen"), 6);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["input_letters"], json!("listen"));
        assert_eq!(value["word_count"], json!(5));
    }

    #[test]
    fn test_validation_failures() {
        let svc = fixture_service();
        let cases: [(Option<&str>, &str); 3] = [
            (None, "Letters parameter is required"),
            (Some("123!"), "No valid letters found in input"),
            (Some("abcdefghijklmnopqrstu"), "Too many letters (maximum 20 allowed)"),
        ];
        for (input, message) in cases {
            let resp = svc.solve(input, 3);
            assert_eq!(resp, Response::failure([message]));
            assert_eq!(
                serde_json::to_value(&resp).unwrap(),
                json!({"success": false, "errors": [message], "words": []})
            );
        }
    }

    #[test]
    fn test_empty_result_is_success() {
        let resp = fixture_service().solve(Some("qqqq"), 3);
        assert!(resp.is_success());
        assert!(resp.words().is_empty());
    }

    #[test]
    fn test_health_reports_store() {
        let svc = fixture_service();
        let value = serde_json::to_value(svc.health()).unwrap();
        assert_eq!(value["status"], json!("healthy"));
        assert_eq!(value["dictionary_loaded"], json!(true));
        assert_eq!(value["dictionary_size"], json!(svc.dictionary().len()));
        assert_eq!(value["dictionary_info"]["type"], json!("compact"));
        assert_eq!(value["dictionary_info"]["filepath"], json!(FIXTURE));
        assert_eq!(value["configuration"]["environment_var"], json!("WORDMIXR_DICTIONARY"));
    }

    #[test]
    fn test_fallback_service_still_answers() {
        let svc = WordService::new(Dictionary::builtin_fallback(), DictionaryChoice::Auto);
        let resp = svc.solve(Some("tac"), 3);
        assert_eq!(resp.words(), ["act", "cat"]);
        assert_eq!(svc.health().dictionary_info.provenance, Provenance::Fallback);
    }
}
