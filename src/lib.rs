//! Word-puzzle toolkit.
//!
//! The heart of the crate is a Wordament-style grid scorer: a 4×4 board of
//! letter, combo, and affix tiles is parsed from a flat specification, and
//! candidate words are scored by tracing tile-disjoint paths across
//! adjacent cells. Around it sit small utilities for Wordle-style
//! candidate filtering and Spelling-Bee letter puzzles, all fed from
//! plain or frequency-annotated word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use puzzle_tools::core::parse;
//! use puzzle_tools::solver::WordEngine;
//!
//! let boards = parse("pmrepea[en]rihbbslt").unwrap();
//! let engine = WordEngine::new(boards).unwrap();
//! assert!(engine.score_word("pear") > 0);
//! assert_eq!(engine.score_word("zebra"), 0);
//! ```
//!
//! # Scoring quirks
//!
//! Two behaviors are preserved from the scoring rules this implements and
//! are worth knowing about:
//!
//! - The searcher returns the score of the *first* path it finds in a
//!   fixed traversal order, not the best-scoring path among all valid
//!   ones.
//! - Combo tiles score a flat value that is a known approximation; the
//!   real rule for fused tiles is unknown.

// Board domain types
pub mod core;

// Path search and word scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Wordle / bee candidate filters
pub mod filter;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
