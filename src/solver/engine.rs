//! The word-scoring engine.
//!
//! Drives the path search over a candidate word stream, handling the
//! alternate-choice case where a spec describes two boards: each word is
//! tried against the boards in order and the first nonzero score wins.

use rayon::prelude::*;

use crate::core::BoardSet;
use crate::wordlists::Unigram;

use super::path::PathSearch;

/// A word that scored, with its external frequency if one was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub count: Option<u64>,
    pub score: u32,
}

/// Scores candidate words against one board or an alternate-choice pair.
pub struct WordEngine {
    searchers: Vec<PathSearch>,
}

impl WordEngine {
    /// Build one search context per board.
    pub fn new(boards: BoardSet) -> Result<Self, Box<fancy_regex::Error>> {
        let searchers = match boards {
            BoardSet::Single(board) => vec![PathSearch::new(board)?],
            BoardSet::Alternate(first, second) => {
                vec![PathSearch::new(first)?, PathSearch::new(second)?]
            }
        };
        Ok(Self { searchers })
    }

    /// Score one word: boards are tried in order, first nonzero wins;
    /// 0 means the word is not playable on any of them.
    #[must_use]
    pub fn score_word(&self, word: &str) -> u32 {
        self.searchers
            .iter()
            .map(|searcher| searcher.run(word))
            .find(|&score| score > 0)
            .unwrap_or(0)
    }

    /// Score a whole candidate stream, dropping unplayable words.
    ///
    /// Scoring is embarrassingly parallel — every search owns its visited
    /// state and reads only frozen board data — so the words are fanned
    /// out over rayon. Output order follows input order.
    #[must_use]
    pub fn score_all(&self, words: &[Unigram]) -> Vec<ScoredWord> {
        words
            .par_iter()
            .filter_map(|entry| {
                let score = self.score_word(&entry.word);
                (score > 0).then(|| ScoredWord {
                    word: entry.word.clone(),
                    count: entry.count,
                    score,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CHOICE_SCORE, parse};

    fn unigrams(words: &[(&str, Option<u64>)]) -> Vec<Unigram> {
        words
            .iter()
            .map(|&(word, count)| Unigram {
                word: word.into(),
                count,
            })
            .collect()
    }

    #[test]
    fn single_board_scores_and_filters() {
        let engine = WordEngine::new(parse("abcdefghijklmnop").unwrap()).unwrap();
        let words = unigrams(&[("abcd", Some(10)), ("zzz", Some(99)), ("aeim", None)]);

        let scored = engine.score_all(&words);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].word, "abcd");
        assert_eq!(scored[0].count, Some(10));
        assert_eq!(scored[0].score, 2 + 5 + 3 + 3);
        assert_eq!(scored[1].word, "aeim");
        assert_eq!(scored[1].count, None);
    }

    #[test]
    fn output_follows_input_order() {
        let engine = WordEngine::new(parse("abcdefghijklmnop").unwrap()).unwrap();
        let words = unigrams(&[("afkp", None), ("abcd", None), ("aeim", None)]);

        let scored = engine.score_all(&words);
        let order: Vec<&str> = scored.iter().map(|s| s.word.as_str()).collect();

        assert_eq!(order, vec!["afkp", "abcd", "aeim"]);
    }

    #[test]
    fn alternate_boards_are_tried_in_order() {
        // "ac" is only playable with the 'a' substitution, "bc" only with
        // the 'b' one; both reflect the forced choice-cell score.
        let engine = WordEngine::new(parse("a/bcdefghijklmnopr").unwrap()).unwrap();

        assert_eq!(engine.score_word("ac"), CHOICE_SCORE + 3);
        assert_eq!(engine.score_word("bc"), CHOICE_SCORE + 3);
        assert_eq!(engine.score_word("az"), 0);
    }

    #[test]
    fn word_playable_on_neither_substitution_scores_zero() {
        let engine = WordEngine::new(parse("a/bcdefghijklmnopr").unwrap()).unwrap();
        assert_eq!(engine.score_word("cdx"), 0);
    }

    #[test]
    fn unsubstituted_board_does_not_score_choice_words() {
        // The same word against a board with neither letter at the cell.
        let engine = WordEngine::new(parse("zcdefghijklmnopr").unwrap()).unwrap();
        assert_eq!(engine.score_word("ac"), 0);
    }

    #[test]
    fn score_word_is_idempotent() {
        let engine = WordEngine::new(parse("a/bcdefghijklmnopr").unwrap()).unwrap();
        let first = engine.score_word("ac");
        assert_eq!(engine.score_word("ac"), first);
    }
}
