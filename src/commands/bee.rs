//! Bee command: find pangrams and valid words for a letter-subset puzzle.

use std::path::Path;

use anyhow::Result;

use crate::filter::BeeFilter;
use crate::output;
use crate::wordlists::{self, Unigram};

pub fn run(letters: &str, words_path: &Path, min_count: u64) -> Result<()> {
    let filter = BeeFilter::new(letters)?;

    let entries = wordlists::load_from_path(words_path, 0)?;
    let valid: Vec<&Unigram> = entries
        .iter()
        .filter(|entry| filter.is_valid(&entry.word))
        .collect();
    log::info!("{} of {} words use only puzzle letters", valid.len(), entries.len());

    // Pangrams are always shown, most frequent first.
    let mut pangrams: Vec<&Unigram> = valid
        .iter()
        .copied()
        .filter(|entry| filter.is_pangram(&entry.word))
        .collect();
    pangrams.sort_by_key(|entry| std::cmp::Reverse(entry.count.unwrap_or(0)));

    // Everything else is count-filtered and ordered longest first.
    let mut others: Vec<&Unigram> = valid
        .iter()
        .copied()
        .filter(|entry| !filter.is_pangram(&entry.word))
        .filter(|entry| entry.count.is_none_or(|count| count > min_count))
        .collect();
    others.sort_by_key(|entry| std::cmp::Reverse(entry.word.len()));

    output::print_bee_results(&pangrams, &others);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_letters_are_rejected() {
        let err = run("", Path::new("/nonexistent"), 0).unwrap_err();
        assert!(err.to_string().contains("at least one letter"));
    }
}
