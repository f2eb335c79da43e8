//! Wordament command: score a word list against a letter grid.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core;
use crate::output;
use crate::solver::WordEngine;
use crate::wordlists;

pub fn run(board_spec: &str, words_path: &Path, min_count: u64, show_board: bool) -> Result<()> {
    let boards = core::parse(board_spec)?;
    if show_board {
        for board in boards.boards() {
            output::print_board(board);
        }
    }

    let words = wordlists::load_from_path(words_path, min_count)?;
    log::info!("loaded {} candidate words", words.len());

    let engine = WordEngine::new(boards).context("failed to compile board prefilter")?;
    let results = engine.score_all(&words);
    log::info!("{} words are playable", results.len());

    output::print_scored_words(&results);
    Ok(())
}
