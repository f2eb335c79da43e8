//! Display functions for command results.

use colored::Colorize;

use crate::core::{Board, SIZE};
use crate::solver::ScoredWord;
use crate::wordlists::Unigram;

/// Print a board's tiles and scores, four tiles per line in the order the
/// specification reads.
pub fn print_board(board: &Board) {
    let tiles: Vec<Vec<String>> = (0..SIZE)
        .map(|col| {
            (0..SIZE)
                .map(|row| board.tile(row, col).to_string())
                .collect()
        })
        .collect();
    let scores: Vec<Vec<String>> = (0..SIZE)
        .map(|col| {
            (0..SIZE)
                .map(|row| board.score(row, col).to_string())
                .collect()
        })
        .collect();

    println!("{}", "Grid".bright_cyan().bold());
    print_grid(&tiles);
    println!("{}", "Scores".bright_cyan().bold());
    print_grid(&scores);
    println!();
}

fn print_grid(rows: &[Vec<String>]) {
    let width = 2 + rows
        .iter()
        .flatten()
        .map(String::len)
        .max()
        .unwrap_or(1);
    for row in rows {
        for cell in row {
            print!("{cell:<width$}");
        }
        println!();
    }
}

/// Print scored words as `word  count  score` lines, input order.
pub fn print_scored_words(results: &[ScoredWord]) {
    for result in results {
        let score = result.score.to_string().bright_yellow();
        match result.count {
            Some(count) => println!("{} {} {score}", result.word, count.to_string().dimmed()),
            None => println!("{} {score}", result.word),
        }
    }
}

/// Print surviving Wordle candidates; a lone survivor is the answer.
pub fn print_candidates(candidates: &[&str]) {
    if let [only] = candidates {
        println!("{} {}", "Success:".green().bold(), only);
    } else {
        for candidate in candidates {
            println!("{candidate}");
        }
    }
}

/// Print a suggested next guess.
pub fn print_suggestion(word: &str) {
    println!("{} {}", "Next guess:".bright_cyan().bold(), word);
}

/// Print bee results: pangrams first, then the remaining words.
pub fn print_bee_results(pangrams: &[&Unigram], others: &[&Unigram]) {
    println!("{}", "Pangrams:".bright_cyan().bold());
    for entry in pangrams {
        print_unigram(entry);
    }
    println!("\n{}", "All:".bright_cyan().bold());
    for entry in others {
        print_unigram(entry);
    }
}

fn print_unigram(entry: &Unigram) {
    match entry.count {
        Some(count) => println!("{} {}", entry.word, count.to_string().dimmed()),
        None => println!("{}", entry.word),
    }
}
