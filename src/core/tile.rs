//! Board tile representation and the letter score table.
//!
//! A tile occupies one grid cell and carries the text it can match. Besides
//! plain letters there are combo tiles (a fused multi-letter unit written
//! `[en]` in a board spec) and affix tiles (`[qu-]` may only start a word,
//! `[-ing]` may only end one).

use std::fmt;

/// Score of every combo tile.
///
/// Known approximation: the real scoring rule for fused tiles is not known,
/// so this fixed value is used for all of them.
pub const COMBO_SCORE: u32 = 8;

/// Score of every affix (prefix/suffix) tile.
pub const AFFIX_SCORE: u32 = 12;

/// What kind of content a tile holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// A single lowercase letter.
    Letter,
    /// A fused multi-letter unit; matches only as a whole.
    Combo,
    /// May only match at the start of the tested word (`[qu-]`).
    Prefix,
    /// May only match at the end of the tested word (`[-ing]`).
    Suffix,
}

/// One cell of the board: its kind plus the text it can match.
///
/// The matchable text never contains the affix marker; it is stripped at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    token: String,
}

impl Tile {
    pub fn letter(c: char) -> Self {
        Self {
            kind: TileKind::Letter,
            token: c.to_string(),
        }
    }

    pub fn combo(token: impl Into<String>) -> Self {
        Self {
            kind: TileKind::Combo,
            token: token.into(),
        }
    }

    pub fn prefix(token: impl Into<String>) -> Self {
        Self {
            kind: TileKind::Prefix,
            token: token.into(),
        }
    }

    pub fn suffix(token: impl Into<String>) -> Self {
        Self {
            kind: TileKind::Suffix,
            token: token.into(),
        }
    }

    /// The text this tile contributes to a path, marker already stripped.
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Whether this tile may appear anywhere in a path for `word`.
    ///
    /// A suffix tile requires the word to end with its token, a prefix tile
    /// requires the word to start with it. Letter and combo tiles admit any
    /// word; the per-step prefix check is done by the search itself.
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        match self.kind {
            TileKind::Suffix => word.ends_with(&self.token),
            TileKind::Prefix => word.starts_with(&self.token),
            TileKind::Letter | TileKind::Combo => true,
        }
    }

    /// The letter of a single-letter tile, `None` for anything else.
    ///
    /// Used by the corner-bonus check, which only fires for letter tiles.
    #[must_use]
    pub fn single_letter(&self) -> Option<char> {
        match self.kind {
            TileKind::Letter => self.token.chars().next(),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    /// Renders the tile in board-spec form, marker included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TileKind::Letter => write!(f, "{}", self.token),
            TileKind::Combo => write!(f, "[{}]", self.token),
            TileKind::Prefix => write!(f, "[{}-]", self.token),
            TileKind::Suffix => write!(f, "[-{}]", self.token),
        }
    }
}

/// Per-letter base scores.
///
/// The table is fixed data; `q` has no known score (the value is missing in
/// the source scoring data), so looking it up reports a configuration
/// problem instead of inventing a number.
pub struct LetterScores {
    table: [Option<u32>; 26],
}

impl LetterScores {
    /// The standard score table.
    //  a  b  c  d  e  f  g  h  i  j   k  l  m  n  o  p  q  r  s  t  u  v  w  x  y  z
    pub const STANDARD: Self = Self {
        table: [
            Some(2),
            Some(5),
            Some(3),
            Some(3),
            Some(1),
            Some(5),
            Some(4),
            Some(4),
            Some(2),
            Some(10),
            Some(6),
            Some(3),
            Some(4),
            Some(2),
            Some(2),
            Some(4),
            None, // q: unknown
            Some(2),
            Some(2),
            Some(2),
            Some(4),
            Some(6),
            Some(6),
            Some(9),
            Some(5),
            Some(8),
        ],
    };

    /// Score for a letter, or `None` when the letter has no configured
    /// score (including anything outside `a..=z`).
    #[must_use]
    pub fn score(&self, letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            self.table[letter as usize - 'a' as usize]
        } else {
            None
        }
    }
}
