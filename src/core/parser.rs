//! Board-specification parsing.
//!
//! A spec is a flat string of 16 logical tiles in column-major order (tile
//! `k` lands at row `k % 4`, column `k / 4`). A bracketed group `[...]` is
//! one logical tile: with a `-` marker it is an affix tile, without one a
//! combo tile. A single `x/y` pair means the puzzle offers two alternative
//! boards, one per letter, with the chosen cell's score forced to a fixed
//! value on both.

use std::fmt;

use super::board::{Board, BoardBuilder, SIZE};
use super::tile::{AFFIX_SCORE, COMBO_SCORE, LetterScores, Tile};

/// Score forced onto the alternate-choice cell of both generated boards.
pub const CHOICE_SCORE: u32 = 20;

/// Errors from board-spec parsing. No partial board is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A `[` group was never closed.
    UnterminatedGroup { offset: usize },
    /// A bracketed group had no matchable content.
    EmptyGroup { offset: usize },
    /// A `-` marker somewhere other than the start or end of a group.
    MalformedGroup { offset: usize },
    /// The spec did not contain exactly 16 logical tiles.
    TileCount { found: usize },
    /// More than one `/` in the spec.
    SecondAlternate,
    /// A `/` that is not between two bare letters.
    MalformedAlternate,
    /// A letter with no configured score.
    UnscoredLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedGroup { offset } => {
                write!(f, "invalid board specification: unterminated '[' at offset {offset}")
            }
            Self::EmptyGroup { offset } => {
                write!(f, "invalid board specification: empty group at offset {offset}")
            }
            Self::MalformedGroup { offset } => write!(
                f,
                "invalid board specification: '-' must lead or trail the group at offset {offset}"
            ),
            Self::TileCount { found } => write!(
                f,
                "invalid board specification: expected 16 tiles, found {found}"
            ),
            Self::SecondAlternate => {
                write!(f, "invalid board specification: '/' may only appear once")
            }
            Self::MalformedAlternate => write!(
                f,
                "invalid board specification: '/' must sit between two bare letters"
            ),
            Self::UnscoredLetter(c) => write!(
                f,
                "invalid letter score configuration: no score is known for '{c}'"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// The board(s) a spec describes: one, or an alternate-choice pair.
#[derive(Debug, Clone)]
pub enum BoardSet {
    Single(Board),
    Alternate(Board, Board),
}

impl BoardSet {
    /// The boards in the order they should be tried.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        let (first, second) = match self {
            Self::Single(b) => (b, None),
            Self::Alternate(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Parse a board specification into one or two finalized boards.
pub fn parse(spec: &str) -> Result<BoardSet, BoardError> {
    let slashes: Vec<usize> = spec
        .char_indices()
        .filter_map(|(i, c)| (c == '/').then_some(i))
        .collect();

    match slashes.as_slice() {
        [] => Ok(BoardSet::Single(parse_one(spec)?.finalize())),
        [at] => parse_alternate(spec, *at),
        _ => Err(BoardError::SecondAlternate),
    }
}

/// Build the two boards of an `x/y` spec, forcing the choice cell's score.
fn parse_alternate(spec: &str, slash: usize) -> Result<BoardSet, BoardError> {
    let bytes = spec.as_bytes();
    if slash == 0 || slash + 1 >= bytes.len() {
        return Err(BoardError::MalformedAlternate);
    }
    let first = bytes[slash - 1] as char;
    let second = bytes[slash + 1] as char;
    if !first.is_ascii_lowercase() || !second.is_ascii_lowercase() {
        return Err(BoardError::MalformedAlternate);
    }
    log::info!("alternate letters detected: {first}/{second}");

    // Splice out "/y" and "x/" respectively; the chosen letter then sits at
    // byte offset slash - 1 in both substituted specs.
    let with_first = format!("{}{}", &spec[..slash], &spec[slash + 2..]);
    let with_second = format!("{}{}{}", &spec[..slash - 1], second, &spec[slash + 2..]);

    let board_a = finalize_with_choice(&with_first, slash - 1)?;
    let board_b = finalize_with_choice(&with_second, slash - 1)?;
    Ok(BoardSet::Alternate(board_a, board_b))
}

fn finalize_with_choice(spec: &str, choice_offset: usize) -> Result<Board, BoardError> {
    let mut builder = parse_one(spec)?;
    // Locate the logical tile that starts at the substitution offset. A
    // miss means the '/' was inside a bracketed group.
    let ordinal = builder
        .offsets
        .iter()
        .position(|&o| o == choice_offset)
        .ok_or(BoardError::MalformedAlternate)?;
    builder
        .builder
        .force_score(ordinal % SIZE, ordinal / SIZE, CHOICE_SCORE);
    Ok(builder.finalize())
}

/// A parsed spec before freezing: the builder plus each tile's byte offset
/// in the spec string, used to locate the alternate-choice cell.
struct ParsedSpec {
    builder: BoardBuilder,
    offsets: Vec<usize>,
}

impl ParsedSpec {
    fn finalize(self) -> Board {
        self.builder.finalize()
    }
}

fn parse_one(spec: &str) -> Result<ParsedSpec, BoardError> {
    let chars: Vec<(usize, char)> = spec.char_indices().collect();
    let mut tiles: Vec<(Tile, u32, usize)> = Vec::with_capacity(SIZE * SIZE);
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if c == '[' {
            let close = chars[i + 1..]
                .iter()
                .position(|&(_, c)| c == ']')
                .map(|p| i + 1 + p)
                .ok_or(BoardError::UnterminatedGroup { offset })?;
            let inner: String = chars[i + 1..close].iter().map(|&(_, c)| c).collect();
            let (tile, score) = group_tile(&inner, offset)?;
            tiles.push((tile, score, offset));
            i = close + 1;
        } else {
            let score = LetterScores::STANDARD
                .score(c)
                .ok_or(BoardError::UnscoredLetter(c))?;
            tiles.push((Tile::letter(c), score, offset));
            i += 1;
        }
    }

    if tiles.len() != SIZE * SIZE {
        return Err(BoardError::TileCount { found: tiles.len() });
    }

    let offsets: Vec<usize> = tiles.iter().map(|&(_, _, o)| o).collect();
    // Column-major placement: tile k at row k % 4, column k / 4.
    let tile_grid: [[Tile; SIZE]; SIZE] =
        std::array::from_fn(|row| std::array::from_fn(|col| tiles[col * SIZE + row].0.clone()));
    let score_grid: [[u32; SIZE]; SIZE] =
        std::array::from_fn(|row| std::array::from_fn(|col| tiles[col * SIZE + row].1));

    Ok(ParsedSpec {
        builder: BoardBuilder::new(tile_grid, score_grid),
        offsets,
    })
}

/// Classify a bracketed group as affix or combo.
fn group_tile(inner: &str, offset: usize) -> Result<(Tile, u32), BoardError> {
    if inner.contains('-') {
        let (anchored_end, token) = if let Some(rest) = inner.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = inner.strip_suffix('-') {
            (false, rest)
        } else {
            return Err(BoardError::MalformedGroup { offset });
        };
        if token.is_empty() {
            return Err(BoardError::EmptyGroup { offset });
        }
        if token.contains('-') {
            return Err(BoardError::MalformedGroup { offset });
        }
        let tile = if anchored_end {
            Tile::suffix(token)
        } else {
            Tile::prefix(token)
        };
        Ok((tile, AFFIX_SCORE))
    } else if inner.is_empty() {
        Err(BoardError::EmptyGroup { offset })
    } else {
        Ok((Tile::combo(inner), COMBO_SCORE))
    }
}
