//! Wordle-style candidate filtering.
//!
//! Constraints come from played guesses: `green` is a five-character
//! dot-pattern (e.g. `g...n`) treated as an anchored regex, `yellow` is
//! one character set per position holding letters known to be in the word
//! but not at that position (`.` meaning no information), and `gray`
//! holds letters known to be absent.

use std::fmt;

use fancy_regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Length of a Wordle word.
pub const WORD_LEN: usize = 5;

#[derive(Debug)]
pub enum FilterError {
    /// The green pattern did not compile as a regex.
    BadGreen(Box<fancy_regex::Error>),
    /// Yellow must supply exactly one entry per position.
    WrongYellowCount(usize),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadGreen(e) => write!(f, "invalid green pattern: {e}"),
            Self::WrongYellowCount(found) => {
                write!(f, "expected {WORD_LEN} yellow entries, got {found}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadGreen(e) => Some(e),
            Self::WrongYellowCount(_) => None,
        }
    }
}

/// Compiled green/yellow/gray constraints.
pub struct WordleFilter {
    green: Regex,
    green_letters: FxHashSet<char>,
    /// Letters excluded per position.
    yellow: Vec<FxHashSet<char>>,
    /// Letters that must appear somewhere.
    yellow_letters: FxHashSet<char>,
    gray: FxHashSet<char>,
}

impl WordleFilter {
    pub fn new(green: &str, yellow: &[String], gray: &str) -> Result<Self, FilterError> {
        if yellow.len() != WORD_LEN {
            return Err(FilterError::WrongYellowCount(yellow.len()));
        }
        let green_regex = Regex::new(&format!("^{green}"))
            .map_err(|e| FilterError::BadGreen(Box::new(e)))?;

        let yellow_sets: Vec<FxHashSet<char>> = yellow
            .iter()
            .map(|entry| {
                if entry == "." {
                    FxHashSet::default()
                } else {
                    entry.chars().collect()
                }
            })
            .collect();
        let yellow_letters = yellow_sets.iter().flatten().copied().collect();

        Ok(Self {
            green: green_regex,
            green_letters: green.chars().filter(char::is_ascii_lowercase).collect(),
            yellow: yellow_sets,
            yellow_letters,
            gray: gray.chars().collect(),
        })
    }

    /// Whether `word` is consistent with every constraint.
    #[must_use]
    pub fn is_candidate(&self, word: &str) -> bool {
        // Gray: none of these letters may appear.
        if word.chars().any(|c| self.gray.contains(&c)) {
            return false;
        }
        // Green: the positional pattern must match.
        if !self.green.is_match(word).unwrap_or(false) {
            return false;
        }
        // Every yellow letter appears somewhere...
        if !self.yellow_letters.iter().all(|&c| word.contains(c)) {
            return false;
        }
        // ...but never at a position that flagged it.
        !word
            .chars()
            .zip(&self.yellow)
            .any(|(c, excluded)| excluded.contains(&c))
    }

    /// Letters the constraints already tell us something about.
    #[must_use]
    pub fn known_letters(&self) -> FxHashSet<char> {
        let mut known = self.green_letters.clone();
        known.extend(&self.yellow_letters);
        known.extend(&self.gray);
        known
    }
}

/// Pick a next guess that probes as many informative letters as possible.
///
/// Letters are ranked by how often they occur in the surviving candidates
/// (letters we already have information about are ignored). The guess is
/// the word covering the most ranked letters; a word whose five letters
/// are all informative is preferred, widening the letter pool from most
/// to least frequent until one is found.
#[must_use]
pub fn suggest_guess(
    words: &[String],
    candidates: &[&str],
    known: &FxHashSet<char>,
) -> Option<String> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in candidates {
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    for c in known {
        counts.remove(c);
    }
    if counts.is_empty() {
        return None;
    }

    let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
    // Frequency descending, alphabetical for determinism.
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let letters: Vec<char> = ranked.into_iter().map(|(c, _)| c).collect();
    log::info!("informative letters: {}", letters.iter().collect::<String>());

    if letters.len() >= WORD_LEN {
        for n in WORD_LEN..letters.len() {
            if let Some((word, coverage)) = best_coverage(words, &letters[..n])
                && coverage == WORD_LEN
            {
                return Some(word.to_string());
            }
        }
    }
    best_coverage(words, &letters).map(|(word, _)| word.to_string())
}

/// The word covering the most of `letters` (distinct overlap), first wins
/// on ties.
fn best_coverage<'a>(words: &'a [String], letters: &[char]) -> Option<(&'a str, usize)> {
    let pool: FxHashSet<char> = letters.iter().copied().collect();
    let mut best: Option<(&str, usize)> = None;
    for word in words {
        let covered: FxHashSet<char> = word.chars().filter(|c| pool.contains(c)).collect();
        if best.is_none_or(|(_, n)| covered.len() > n) {
            best = Some((word, covered.len()));
        }
    }
    best
}
