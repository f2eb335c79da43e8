//! Core board domain types.
//!
//! Tiles, the score table, the immutable 4×4 board, and the
//! board-specification parser.

mod board;
mod parser;
mod tile;

pub use board::{Board, BoardBuilder, SIZE};
pub use parser::{BoardError, BoardSet, CHOICE_SCORE, parse};
pub use tile::{AFFIX_SCORE, COMBO_SCORE, LetterScores, Tile, TileKind};
