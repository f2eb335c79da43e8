//! The 4×4 board: tile grid plus a parallel score grid.
//!
//! A board is immutable once built. The two score adjustments the rules
//! allow — the corner bonus and the forced score on an alternate-choice
//! cell — are applied by [`BoardBuilder::finalize`], after which the board
//! is frozen.

use rustc_hash::FxHashSet;

use super::tile::Tile;

/// Side length of the grid.
pub const SIZE: usize = 4;

/// Neighbor offsets as `(row, col)` deltas, in the order the search visits
/// them: column offset varies slowest (-1, 0, 1), row offset fastest.
/// The order is part of the observable first-path-wins behavior, so it is
/// fixed here rather than derived.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// An immutable 4×4 board.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [[Tile; SIZE]; SIZE],
    scores: [[u32; SIZE]; SIZE],
}

impl Board {
    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[row][col]
    }

    #[inline]
    #[must_use]
    pub fn score(&self, row: usize, col: usize) -> u32 {
        self.scores[row][col]
    }

    /// Every distinct matchable string on the board, markers stripped.
    ///
    /// Sorted longest-first (ties alphabetical) so downstream consumers —
    /// notably the prefilter regex — are deterministic.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        let set: FxHashSet<&str> = self
            .tiles
            .iter()
            .flatten()
            .map(Tile::token)
            .collect();
        let mut tokens: Vec<&str> = set.into_iter().collect();
        tokens.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        tokens
    }

    /// The cells adjacent to `(row, col)` under 8-connectivity, in the
    /// fixed enumeration order. Computed on demand; boundary cells simply
    /// yield fewer neighbors.
    pub fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < SIZE && c < SIZE).then_some((r, c))
        })
    }
}

/// Builder that applies the one-time score adjustments and freezes the
/// result into a [`Board`].
pub struct BoardBuilder {
    tiles: [[Tile; SIZE]; SIZE],
    scores: [[u32; SIZE]; SIZE],
    forced: Option<(usize, usize, u32)>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new(tiles: [[Tile; SIZE]; SIZE], scores: [[u32; SIZE]; SIZE]) -> Self {
        Self {
            tiles,
            scores,
            forced: None,
        }
    }

    /// Force the score of one cell, applied after the corner bonus so a
    /// forced value always wins.
    pub fn force_score(&mut self, row: usize, col: usize, score: u32) {
        self.forced = Some((row, col, score));
    }

    /// Apply the corner bonus and any forced score, then freeze.
    ///
    /// The bonus fires only when all four corners hold the identical
    /// single-letter tile; each corner score is then incremented by one.
    #[must_use]
    pub fn finalize(mut self) -> Board {
        const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 3), (3, 0), (3, 3)];

        if let Some(corner) = self.tiles[0][0].single_letter()
            && CORNERS
                .iter()
                .all(|&(r, c)| self.tiles[r][c].single_letter() == Some(corner))
        {
            for (r, c) in CORNERS {
                self.scores[r][c] += 1;
            }
            log::info!(
                "corner letter '{corner}' detected; corner score now {}",
                self.scores[0][0]
            );
        }

        if let Some((row, col, score)) = self.forced {
            self.scores[row][col] = score;
        }

        Board {
            tiles: self.tiles,
            scores: self.scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_grid(letters: [[char; SIZE]; SIZE]) -> [[Tile; SIZE]; SIZE] {
        letters.map(|row| row.map(Tile::letter))
    }

    fn uniform_scores(score: u32) -> [[u32; SIZE]; SIZE] {
        [[score; SIZE]; SIZE]
    }

    #[test]
    fn corner_bonus_fires_for_identical_letter_corners() {
        let tiles = letter_grid([
            ['a', 'b', 'c', 'a'],
            ['d', 'e', 'f', 'g'],
            ['h', 'i', 'j', 'k'],
            ['a', 'l', 'm', 'a'],
        ]);
        let board = BoardBuilder::new(tiles, uniform_scores(2)).finalize();

        assert_eq!(board.score(0, 0), 3);
        assert_eq!(board.score(0, 3), 3);
        assert_eq!(board.score(3, 0), 3);
        assert_eq!(board.score(3, 3), 3);
        // Non-corner cells are untouched.
        assert_eq!(board.score(1, 1), 2);
    }

    #[test]
    fn corner_bonus_skipped_when_any_corner_differs() {
        let tiles = letter_grid([
            ['a', 'b', 'c', 'a'],
            ['d', 'e', 'f', 'g'],
            ['h', 'i', 'j', 'k'],
            ['a', 'l', 'm', 'z'],
        ]);
        let board = BoardBuilder::new(tiles, uniform_scores(2)).finalize();

        assert_eq!(board.score(0, 0), 2);
        assert_eq!(board.score(3, 3), 2);
    }

    #[test]
    fn corner_bonus_skipped_for_non_letter_corners() {
        let mut tiles = letter_grid([
            ['a', 'b', 'c', 'a'],
            ['d', 'e', 'f', 'g'],
            ['h', 'i', 'j', 'k'],
            ['a', 'l', 'm', 'a'],
        ]);
        tiles[0][0] = Tile::combo("a");
        let board = BoardBuilder::new(tiles, uniform_scores(2)).finalize();

        assert_eq!(board.score(0, 0), 2);
        assert_eq!(board.score(3, 3), 2);
    }

    #[test]
    fn forced_score_wins_over_corner_bonus() {
        let tiles = letter_grid([['a'; SIZE]; SIZE]);
        let mut builder = BoardBuilder::new(tiles, uniform_scores(2));
        builder.force_score(0, 0, 20);
        let board = builder.finalize();

        assert_eq!(board.score(0, 0), 20);
        assert_eq!(board.score(0, 3), 3);
    }

    #[test]
    fn tokens_are_distinct_and_sorted() {
        let mut tiles = letter_grid([
            ['a', 'a', 'a', 'a'],
            ['b', 'b', 'b', 'b'],
            ['c', 'c', 'c', 'c'],
            ['d', 'd', 'd', 'd'],
        ]);
        tiles[0][0] = Tile::combo("en");
        tiles[1][0] = Tile::suffix("ing");
        let board = BoardBuilder::new(tiles, uniform_scores(1)).finalize();

        assert_eq!(board.tokens(), vec!["ing", "en", "a", "b", "c", "d"]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = Board::neighbors(1, 1).collect();
        assert_eq!(
            neighbors,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2),
            ]
        );
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<_> = Board::neighbors(0, 0).collect();
        assert_eq!(neighbors, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(Board::neighbors(0, 2).count(), 5);
    }
}
