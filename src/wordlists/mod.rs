//! Word lists and unigram frequency data.

pub mod loader;

pub use loader::{Unigram, load_from_path, parse_from_str};
