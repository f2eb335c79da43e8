//! Spelling-Bee style letter-subset filtering.
//!
//! A puzzle is a handful of letters whose first letter is mandatory. A
//! word is valid when it uses only puzzle letters and contains the
//! mandatory one; a pangram uses every puzzle letter at least once.

use std::fmt;

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeeError {
    /// No letters were supplied.
    Empty,
}

impl fmt::Display for BeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "a bee puzzle needs at least one letter"),
        }
    }
}

impl std::error::Error for BeeError {}

/// The puzzle's letter set; the first supplied letter is mandatory.
#[derive(Debug)]
pub struct BeeFilter {
    letters: FxHashSet<char>,
    required: char,
}

impl BeeFilter {
    pub fn new(letters: &str) -> Result<Self, BeeError> {
        let normalized = letters.to_lowercase();
        let required = normalized.chars().next().ok_or(BeeError::Empty)?;
        Ok(Self {
            letters: normalized.chars().collect(),
            required,
        })
    }

    #[must_use]
    pub const fn required(&self) -> char {
        self.required
    }

    /// Only puzzle letters, and the mandatory letter appears.
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        !word.is_empty()
            && word.contains(self.required)
            && word.chars().all(|c| self.letters.contains(&c))
    }

    /// Uses every puzzle letter at least once.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        let used: FxHashSet<char> = word.chars().collect();
        used == self.letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_words_use_only_puzzle_letters() {
        let f = BeeFilter::new("tramplo").unwrap();
        assert!(!f.is_valid("rattle")); // 'e' not in puzzle
        assert!(f.is_valid("tram"));
        assert!(f.is_valid("part"));
        assert!(!f.is_valid("poll")); // missing mandatory 't'
    }

    #[test]
    fn mandatory_letter_is_the_first() {
        let f = BeeFilter::new("tramplo").unwrap();
        assert_eq!(f.required(), 't');
        assert!(!f.is_valid("moral"));
    }

    #[test]
    fn pangram_uses_every_letter() {
        let f = BeeFilter::new("tramplo").unwrap();
        assert!(f.is_pangram("trampolo")); // letters {t,r,a,m,p,l,o} all used
        assert!(!f.is_pangram("tram"));
    }

    #[test]
    fn letters_are_case_normalized() {
        let f = BeeFilter::new("TRAMPLO").unwrap();
        assert!(f.is_valid("tram"));
    }

    #[test]
    fn empty_puzzle_is_an_error() {
        assert_eq!(BeeFilter::new("").unwrap_err(), BeeError::Empty);
    }

    #[test]
    fn empty_word_is_never_valid() {
        let f = BeeFilter::new("tramplo").unwrap();
        assert!(!f.is_valid(""));
    }
}
