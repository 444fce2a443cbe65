//! Word splitting shared by index construction and query processing.
//!
//! Both sides split text on single space characters, so that a run of `n`
//! spaces produces `n - 1` empty tokens. The two sides differ only in what
//! they do with the pieces:
//!
//! 1. **Index Creation**: [`DatasetTokenizer`] drops tokens shorter than the
//!    configured minimum length (two bytes by default), so empty and
//!    single-letter words never become index keys. Dataset text is already
//!    lowercase and is passed through unchanged.
//! 2. **Query Processing**: [`query_terms`] lowercases the query and keeps
//!    every token, including empty ones. An empty token is a prefix of every
//!    indexed word.

use std::str::Split;

/// Default minimum length, in bytes, of an indexed word.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Splits dataset names and aliases into index keys.
#[derive(Debug, Clone, Copy)]
pub struct DatasetTokenizer {
    min_word_length: usize,
}

impl DatasetTokenizer {
    /// Creates a tokenizer that skips words shorter than `min_word_length` bytes.
    pub fn with_min_length(min_word_length: usize) -> Self {
        DatasetTokenizer { min_word_length }
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Returns the words of `text` eligible for indexing, in order of appearance.
    pub fn tokenize<'a>(&self, text: &'a str) -> DatasetWords<'a> {
        DatasetWords {
            inner: text.split(' '),
            min_word_length: self.min_word_length,
        }
    }
}

impl Default for DatasetTokenizer {
    fn default() -> Self {
        Self::with_min_length(DEFAULT_MIN_WORD_LENGTH)
    }
}

/// Iterator returned by [`DatasetTokenizer::tokenize`].
pub struct DatasetWords<'a> {
    inner: Split<'a, char>,
    min_word_length: usize,
}

impl<'a> Iterator for DatasetWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let min_word_length = self.min_word_length.max(1);
        self.inner
            .by_ref()
            .find(|word| word.len() >= min_word_length)
    }
}

/// Lowercases `query` and splits it into search terms.
///
/// The result always holds at least one term: an empty query yields a single
/// empty term.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}
