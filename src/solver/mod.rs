//! Grid word-scoring: path search and the word engine.

mod engine;
mod path;

pub use engine::{ScoredWord, WordEngine};
pub use path::PathSearch;
