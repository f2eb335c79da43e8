//! Wordle command: filter candidates and optionally suggest a next guess.

use std::path::Path;

use anyhow::{Result, bail};

use crate::filter::{WordleFilter, suggest_guess};
use crate::output;
use crate::wordlists;

pub fn run(
    green: &str,
    yellow: &[String],
    gray: &str,
    words_path: &Path,
    suggest: bool,
) -> Result<()> {
    let filter = WordleFilter::new(green, yellow, gray)?;

    let entries = wordlists::load_from_path(words_path, 0)?;
    let words: Vec<String> = entries.into_iter().map(|entry| entry.word).collect();

    let candidates: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| filter.is_candidate(word))
        .collect();
    log::info!("{} of {} words remain", candidates.len(), words.len());

    if candidates.is_empty() {
        bail!("no candidates remain; check the green/yellow/gray constraints");
    }
    output::print_candidates(&candidates);

    if suggest && candidates.len() > 1 {
        match suggest_guess(&words, &candidates, &filter.known_letters()) {
            Some(guess) => output::print_suggestion(&guess),
            None => println!("All letters are known; pick from the candidates above."),
        }
    }
    Ok(())
}
