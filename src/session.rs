//! Drives one end-to-end search: load a dictionary, reduce it, run the
//! search engine, and print progress/solution/timing lines to stdout,
//! while collecting every solution for an optional exporter.

use std::time::{Duration, Instant};

use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::mask::LetterMask;
use crate::memo::{MemoTable, Width};
use crate::render::render;
use crate::search::{self, SearchStats};
use crate::words::{self, WordList};

/// One emitted heterogram: its masks (for an exporter that wants the raw
/// cover) and its rendered sentence (for printing and for the simpler
/// exporters).
#[derive(Debug, Clone)]
pub struct Solution {
    pub masks: Vec<LetterMask>,
    pub text: String,
}

/// Everything produced by a completed (or early-stopped) run.
#[derive(Debug)]
pub struct Report {
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
}

/// Load `config.dict_file_path` and search it to completion.
pub fn run(config: &Config) -> Result<Report> {
    let raw = words::load_dictionary(&config.dict_file_path)?;
    run_on_text(&raw, config)
}

/// Same as [`run`], but takes already-loaded dictionary text. Split out
/// so tests can exercise the full pipeline without touching the
/// filesystem.
pub fn run_on_text(raw: &str, config: &Config) -> Result<Report> {
    let start = Instant::now();

    println!("initial word count: {}", raw.split('\n').count());
    println!("converting dictionary to bitmask");
    println!("removing words that use a letter more than once");
    println!("resizing word list");

    let word_list: WordList = words::normalize_words(raw);
    println!("current word count: {}", word_list.len());

    println!("removing anagrams");
    let level0 = words::build_level0(&word_list);
    println!("current word count: {}", level0.len());

    let width = if config.compact_memo { Width::Compact } else { Width::Wide };
    let mut memo = MemoTable::new(width)?;

    let mut solutions: Vec<Solution> = Vec::new();
    let max_solutions = config.max_solutions;
    let stats = search::search(&level0, &mut memo, |masks| {
        let text = render(masks, &word_list);
        let (mins, secs) = mins_secs(start.elapsed());
        println!("{text}      found at {mins} mins {secs:.3} secs ({})", solutions.len() + 1);
        solutions.push(Solution { masks: masks.to_vec(), text });
        max_solutions == 0 || solutions.len() < max_solutions
    });

    debug!(
        "frames_visited={} memo_skips={} memo_shrinks={}",
        stats.frames_visited, stats.memo_skips, stats.memo_shrinks
    );

    let (mins, secs) = mins_secs(start.elapsed());
    println!("finished at {mins} mins {secs:.3} secs, with {} solutions.", stats.solutions);

    Ok(Report { solutions, stats })
}

/// Split an elapsed duration into whole minutes and the remaining
/// seconds (with millisecond precision), matching the original C
/// program's `clock()`-derived `%i mins %0.3f secs` formatting.
fn mins_secs(elapsed: Duration) -> (u64, f64) {
    let total_secs = elapsed.as_secs_f64();
    let mins = (total_secs / 60.0).floor() as u64;
    (mins, total_secs - mins as f64 * 60.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> Config {
        Config {
            dict_file_path: "unused-in-these-tests".into(),
            verbose: false,
            output: None,
            compact_memo: false,
            max_solutions: 0,
        }
    }

    #[test]
    fn two_disjoint_words_covering_the_alphabet_form_one_sentence() {
        let report = run_on_text("abcdefghijklm\nnopqrstuvwxyz\n", &config()).unwrap();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].text, "abcdefghijklm nopqrstuvwxyz");
    }

    #[test]
    fn anagrams_at_the_same_position_are_grouped_with_pipe() {
        let report = run_on_text(
            "abcdefghijklm\nmlkjihgfedcba\nnopqrstuvwxyz\n",
            &config(),
        )
        .unwrap();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].text, "abcdefghijklm|mlkjihgfedcba nopqrstuvwxyz");
    }

    #[test]
    fn output_is_alphabetically_ordered_regardless_of_input_order() {
        let report = run_on_text("nopqrstuvwxyz\nabcdefghijklm\n", &config()).unwrap();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].text, "abcdefghijklm nopqrstuvwxyz");
    }

    #[test]
    fn words_with_repeated_letters_are_rejected() {
        let report = run_on_text("aabcdefghijklm\nnopqrstuvwxyz\n", &config()).unwrap();
        assert!(report.solutions.is_empty());
    }

    #[test]
    fn empty_dictionary_yields_no_solutions_and_does_not_crash() {
        let report = run_on_text("", &config()).unwrap();
        assert!(report.solutions.is_empty());
        assert_eq!(report.stats.solutions, 0);
    }

    #[test]
    fn single_pangrammatic_word_is_its_own_sentence() {
        let alphabet: String = ('a'..='z').collect();
        let report = run_on_text(&alphabet, &config()).unwrap();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].text, alphabet);
    }

    #[test]
    fn max_solutions_stops_the_search_early() {
        // Three disjoint one-letter-apart groups admit more than one
        // completion; capping at 1 should leave the rest unexplored.
        let dict = "abcdefghijklm\nnopqrstuvwxy\nz\nnopqrstuvwx\nyz\n";
        let mut cfg = config();
        cfg.max_solutions = 1;
        let report = run_on_text(dict, &cfg).unwrap();
        assert_eq!(report.solutions.len(), 1);
    }
}
