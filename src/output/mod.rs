//! Terminal output formatting.

pub mod display;

pub use display::{
    print_bee_results, print_board, print_candidates, print_scored_words, print_suggestion,
};
