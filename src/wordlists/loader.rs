//! Word-list loading.
//!
//! Accepts both plain word lists (one word per line) and unigram count
//! files (`<count> <word>` per line). The core engine only ever sees the
//! word and, when present, its count.

use std::fs;
use std::io;
use std::path::Path;

/// A candidate word with its optional external frequency count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unigram {
    pub word: String,
    pub count: Option<u64>,
}

/// Parse word-list contents from an in-memory string.
///
/// - Blank lines are skipped.
/// - A line is either `word` or `<count> <word>`; anything else (extra
///   fields, unparseable count) is skipped.
/// - Entries whose count is below `min_count` are dropped; entries
///   without a count always pass.
/// - Words with three identical letters in a row are dropped — these are
///   almost never real words in frequency data.
/// - Words are normalized to lowercase; input order is preserved.
#[must_use]
pub fn parse_from_str(contents: &str, min_count: u64) -> Vec<Unigram> {
    contents
        .lines()
        .filter_map(|raw_line| {
            let line = raw_line.trim();
            if line.is_empty() {
                return None;
            }
            let mut fields = line.split_whitespace();
            let (word, count) = match (fields.next(), fields.next(), fields.next()) {
                (Some(word), None, _) => (word, None),
                (Some(count), Some(word), None) => (word, Some(count.parse::<u64>().ok()?)),
                _ => return None,
            };
            if let Some(n) = count
                && n < min_count
            {
                return None;
            }
            let word = word.to_lowercase();
            if has_triple_repeat(&word) {
                return None;
            }
            Some(Unigram { word, count })
        })
        .collect()
}

/// Read a word list from a file and parse it.
pub fn load_from_path<P: AsRef<Path>>(path: P, min_count: u64) -> io::Result<Vec<Unigram>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("failed to read word list '{}': {e}", path_ref.display()),
        )
    })?;
    Ok(parse_from_str(&contents, min_count))
}

/// Three identical letters in a row.
fn has_triple_repeat(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}
