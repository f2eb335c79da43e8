//! Backtracking path search over one board.
//!
//! A word is playable when a sequence of distinct, pairwise-adjacent cells
//! spells it exactly; its score is the sum of the per-tile scores along
//! that path. The search returns the *first* path it finds in a fixed
//! traversal order, not the best-scoring one — a deliberate, documented
//! quirk of the scoring rules. The orders are pinned: starting cells are
//! tried column-major (column outer, row inner) and neighbors in the fixed
//! order [`Board::neighbors`] yields, so results are reproducible.

use fancy_regex::Regex;

use crate::core::{Board, SIZE};

/// Search context for one board: the board itself plus a compiled
/// prefilter that cheaply rejects words no tile sequence could spell.
pub struct PathSearch {
    board: Board,
    prefilter: Regex,
}

impl PathSearch {
    /// Build the search context, compiling the prefilter from the board's
    /// token set: a word must be expressible as a concatenation of board
    /// tokens (`^(tok1|tok2|...)+$`) to stand any chance of being tiled.
    pub fn new(board: Board) -> Result<Self, Box<fancy_regex::Error>> {
        let alternation = board
            .tokens()
            .iter()
            .map(|t| fancy_regex::escape(t).into_owned())
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("^({alternation})+$");
        log::debug!("board prefilter: {pattern}");
        let prefilter = Regex::new(&pattern).map_err(Box::new)?;
        Ok(Self { board, prefilter })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Score `word`, or 0 when it cannot be played on this board.
    ///
    /// The prefilter is an optimization only: [`Self::search`] gives the
    /// same verdict without it. A prefilter engine error therefore falls
    /// through to the full search rather than rejecting the word.
    #[must_use]
    pub fn run(&self, word: &str) -> u32 {
        match self.prefilter.is_match(word) {
            Ok(false) => 0,
            Ok(true) | Err(_) => self.search(word),
        }
    }

    /// The exact search, bypassing the prefilter.
    #[must_use]
    pub fn search(&self, word: &str) -> u32 {
        for col in 0..SIZE {
            for row in 0..SIZE {
                let tile = self.board.tile(row, col);
                if !tile.admits(word) {
                    continue;
                }
                let token = tile.token();
                if !word.starts_with(token) {
                    continue;
                }
                // Fresh visited state per starting-cell attempt.
                let mut visited = [[false; SIZE]; SIZE];
                if let Some(rest) = self.extend(word, token.len(), row, col, &mut visited) {
                    return rest + self.board.score(row, col);
                }
            }
        }
        0
    }

    /// Extend a partial path at `(row, col)` with `consumed` bytes of the
    /// word already matched. Returns the score of the remainder of the
    /// path (excluding the current cell), or `None` if no extension
    /// spells the rest of the word.
    fn extend(
        &self,
        word: &str,
        consumed: usize,
        row: usize,
        col: usize,
        visited: &mut [[bool; SIZE]; SIZE],
    ) -> Option<u32> {
        if visited[row][col] {
            return None;
        }
        if consumed == word.len() {
            return Some(0);
        }
        visited[row][col] = true;
        for (nrow, ncol) in Board::neighbors(row, col) {
            let tile = self.board.tile(nrow, ncol);
            if !tile.admits(word) {
                continue;
            }
            let token = tile.token();
            if word[consumed..].starts_with(token)
                && let Some(rest) = self.extend(word, consumed + token.len(), nrow, ncol, visited)
            {
                return Some(rest + self.board.score(nrow, ncol));
            }
        }
        // Release the mark so sibling branches may route through this cell.
        visited[row][col] = false;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AFFIX_SCORE, BoardSet, COMBO_SCORE, parse};

    fn searcher(spec: &str) -> PathSearch {
        let BoardSet::Single(board) = parse(spec).unwrap() else {
            panic!("expected a single board");
        };
        PathSearch::new(board).unwrap()
    }

    #[test]
    fn straight_line_word_sums_tile_scores() {
        let s = searcher("abcdefghijklmnop");
        // Row 0 reads a e i m; column 0 reads a b c d.
        assert_eq!(s.run("aeim"), 2 + 1 + 2 + 4);
        assert_eq!(s.run("abcd"), 2 + 5 + 3 + 3);
        // Main diagonal a f k p.
        assert_eq!(s.run("afkp"), 2 + 5 + 6 + 4);
    }

    #[test]
    fn non_adjacent_letters_do_not_score() {
        let s = searcher("abcdefghijklmnop");
        // 'a' at (0,0) and 'i' at (0,2) are not adjacent.
        assert_eq!(s.run("ai"), 0);
    }

    #[test]
    fn cell_reuse_is_rejected() {
        let s = searcher("abcdefghijklmnop");
        // The only 'a' would have to be visited twice.
        assert_eq!(s.run("aba"), 0);
    }

    #[test]
    fn word_with_absent_letter_is_rejected_both_ways() {
        let s = searcher("abcdefghijklmnop");
        // 'z' is not on the board: the prefilter rejects it, and the
        // exact search agrees when invoked directly.
        assert_eq!(s.run("az"), 0);
        assert_eq!(s.search("az"), 0);
    }

    #[test]
    fn run_is_idempotent() {
        let s = searcher("abcdefghijklmnop");
        let first = s.run("afkp");
        assert_eq!(s.run("afkp"), first);
        assert_eq!(s.run("afkp"), first);
    }

    #[test]
    fn combo_tile_matches_as_a_unit() {
        let s = searcher("pmrepea[en]rihbbslt");
        // b at (3,2) is adjacent to [en] at (3,1).
        assert_eq!(s.run("ben"), 5 + COMBO_SCORE);
        // h at (2,2) is adjacent to the combo as well.
        assert_eq!(s.run("hen"), 4 + COMBO_SCORE);
        // The combo alone is a (degenerate) one-tile path.
        assert_eq!(s.run("en"), COMBO_SCORE);
        // No bare 'n' tile, so "net" cannot be assembled at all.
        assert_eq!(s.run("net"), 0);
        assert_eq!(s.search("net"), 0);
    }

    #[test]
    fn words_on_the_sample_board() {
        let s = searcher("pmrepea[en]rihbbslt");
        assert_eq!(s.run("pea"), 4 + 1 + 2);
        assert_eq!(s.run("pear"), 4 + 1 + 2 + 2);
        assert_eq!(s.run("hire"), 4 + 2 + 2 + 1);
    }

    #[test]
    fn suffix_tile_must_end_the_word() {
        let s = searcher("[-ing]rscdefghijlmnop");
        // r at (1,0) is adjacent to the [-ing] tile at (0,0).
        assert_eq!(s.run("ring"), 2 + AFFIX_SCORE);
        // "rings" does not end in "ing", so the tile admits nothing and
        // the 'i'/'n'/'g' letters are not on the board individually.
        assert_eq!(s.run("rings"), 0);
    }

    #[test]
    fn prefix_tile_must_start_the_word() {
        let s = searcher("[qu-]ackdefghijlmnop");
        // [qu-] a c k run down column 0.
        assert_eq!(s.run("quack"), AFFIX_SCORE + 2 + 3 + 6);
        // The tile cannot sit mid-word.
        assert_eq!(s.run("aquack"), 0);
    }

    #[test]
    fn duplicate_letters_map_to_distinct_cells() {
        // Column 0 holds a b a c, so "aba" runs (0,0) -> (1,0) -> (2,0)
        // without reusing the first 'a'.
        let s = searcher("abacdefghijlmnop");
        assert_eq!(s.run("aba"), 2 + 5 + 2);
    }

    #[test]
    fn backtracking_releases_cells_for_sibling_branches() {
        // Grid: c(0,0) a(1,0) b(2,0) | a(0,1). For "caab" the search
        // first tries c -> a(1,0) -> a(0,1), which has no adjacent 'b'
        // and dead-ends. The winning path c -> a(0,1) -> a(1,0) -> b
        // routes through both cells that failed branch visited, so it is
        // only found if marks are released on backtrack.
        let s = searcher("cabdaefghijklmno");
        assert_eq!(s.run("caab"), 3 + 2 + 2 + 5);
    }

    #[test]
    fn empty_word_is_not_playable() {
        let s = searcher("abcdefghijklmnop");
        assert_eq!(s.run(""), 0);
        assert_eq!(s.search(""), 0);
    }
}
