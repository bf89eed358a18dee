//! Longest-match lookup of reserved words and phrases.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::dialect::IdentChars;

/// A compiled reserved-word vocabulary.
///
/// Entries are indexed by their uppercased first word; candidates sharing a
/// first word are kept longest first so `LEFT OUTER JOIN` wins over
/// `LEFT JOIN`.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    by_first_word: HashMap<String, Vec<Vec<String>>>,
    values: HashSet<String>,
}

impl ReservedWords {
    /// Compiles a vocabulary list.
    #[must_use]
    pub fn new(entries: &[String]) -> Self {
        let mut by_first_word: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        let mut values = HashSet::new();

        for entry in entries {
            let words: Vec<String> = entry.split_whitespace().map(str::to_uppercase).collect();
            let Some(first) = words.first() else {
                continue;
            };
            if values.insert(words.join(" ")) {
                by_first_word.entry(first.clone()).or_default().push(words);
            }
        }

        for candidates in by_first_word.values_mut() {
            candidates.sort_by_key(|words| {
                Reverse((words.len(), words.iter().map(String::len).sum::<usize>()))
            });
        }

        Self {
            by_first_word,
            values,
        }
    }

    /// Returns true if the normalized `value` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Returns true if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Matches the longest entry at the start of `input`.
    ///
    /// Returns the matched byte length and the normalized value (uppercase,
    /// words joined by single spaces).
    #[must_use]
    pub fn match_at(&self, input: &str, chars: &IdentChars) -> Option<(usize, String)> {
        let first_len = word_len(input, chars);
        if first_len == 0 {
            return None;
        }
        let candidates = self.by_first_word.get(&input[..first_len].to_uppercase())?;

        candidates.iter().find_map(|words| {
            let len = match_words(input, words, chars)?;
            Some((len, words.join(" ")))
        })
    }
}

/// Byte length of the word run at the start of `input`.
fn word_len(input: &str, chars: &IdentChars) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !chars.is_rest(c))
        .map_or(input.len(), |(i, _)| i)
}

fn match_words(input: &str, words: &[String], chars: &IdentChars) -> Option<usize> {
    let mut pos = 0;
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let gap = input[pos..]
                .char_indices()
                .find(|&(_, c)| !c.is_whitespace())
                .map_or(input.len() - pos, |(j, _)| j);
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        let len = word_len(&input[pos..], chars);
        if len == 0 || input[pos..pos + len].to_uppercase() != *word {
            return None;
        }
        pos += len;
    }
    Some(pos)
}
