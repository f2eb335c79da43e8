//! Candidate filters for the non-grid puzzles.

pub mod bee;
pub mod wordle;

pub use bee::{BeeError, BeeFilter};
pub use wordle::{FilterError, WordleFilter, suggest_guess};
