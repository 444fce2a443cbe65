//! The immutable character-name index.

use ahash::AHashMap;

/// Dense ordinal of a dataset record, assigned in file order.
///
/// Marks stand in for codepoints everywhere inside the index; they are
/// translated back to codepoints only when results leave the index.
pub type Mark = u16;

/// A word key together with the sorted marks of every record containing it.
#[derive(Debug, Clone)]
pub(crate) struct WordEntry {
    pub(crate) word: Box<str>,
    pub(crate) marks: Box<[Mark]>,
}

/// In-memory index over the character-name dataset.
///
/// The index consists of three structures built together by
/// [`NameIndexBuilder`](crate::builder::NameIndexBuilder):
///
/// - codepoint → canonical name, for [`lookup_name`](NameIndex::lookup_name);
/// - mark → codepoint, a dense array that is the only translation from
///   ordinals to codepoints;
/// - word → marks, the inverted index used by [`query`](NameIndex::query).
///   Entries are sorted by word so that all words sharing a prefix form a
///   contiguous run.
///
/// A `NameIndex` is never modified after construction and can be shared
/// freely between threads.
#[derive(Debug)]
pub struct NameIndex {
    names: AHashMap<u32, Box<str>>,
    marks: Box<[u32]>,
    words: Vec<WordEntry>,
}

/// Size figures of a [`NameIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of dataset records (and assigned marks).
    pub record_count: usize,
    /// Number of distinct indexed words.
    pub word_count: usize,
    /// Total number of word → mark entries.
    pub posting_count: usize,
}

impl NameIndex {
    pub(crate) fn from_parts(
        names: AHashMap<u32, Box<str>>,
        marks: Box<[u32]>,
        words: Vec<WordEntry>,
    ) -> NameIndex {
        debug_assert!(words.windows(2).all(|w| w[0].word < w[1].word));
        debug_assert!(
            words
                .iter()
                .flat_map(|e| e.marks.iter())
                .all(|&m| (m as usize) < marks.len())
        );
        NameIndex {
            names,
            marks,
            words,
        }
    }

    /// Returns the canonical name of `codepoint`, or an empty string when the
    /// dataset has no record for it. Aliases are never returned.
    pub fn lookup_name(&self, codepoint: u32) -> &str {
        self.names.get(&codepoint).map_or("", |name| name.as_ref())
    }

    /// Returns `true` if the dataset has a record for `codepoint`.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.names.contains_key(&codepoint)
    }

    /// Translates a mark into the codepoint of its record.
    pub fn codepoint_of(&self, mark: Mark) -> Option<u32> {
        self.marks.get(mark as usize).copied()
    }

    pub fn record_count(&self) -> usize {
        self.marks.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            record_count: self.record_count(),
            word_count: self.word_count(),
            posting_count: self.words.iter().map(|e| e.marks.len()).sum(),
        }
    }

    /// All indexed words in ascending byte order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|e| e.word.as_ref())
    }

    /// Marks of the records containing exactly `word`.
    pub fn marks_of(&self, word: &str) -> Option<&[Mark]> {
        self.words
            .binary_search_by(|e| e.word.as_ref().cmp(word))
            .ok()
            .map(|pos| self.words[pos].marks.as_ref())
    }

    /// The contiguous run of entries whose word starts with `prefix`.
    pub(crate) fn prefix_entries(&self, prefix: &str) -> &[WordEntry] {
        let start = self.words.partition_point(|e| e.word.as_ref() < prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|e| e.word.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }

    /// Indexed words that start with `prefix`, in ascending order.
    pub fn words_with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.prefix_entries(prefix).iter().map(|e| e.word.as_ref())
    }
}
