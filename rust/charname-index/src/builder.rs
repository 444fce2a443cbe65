//! One-pass construction of a [`NameIndex`] from decoded dataset records.

use std::time::Instant;

use ahash::AHashMap;

use crate::dataset::{DatasetDecoder, Record};
use crate::error::{Error, Result};
use crate::index::{Mark, NameIndex, WordEntry};
use crate::tokenizer::{DEFAULT_MIN_WORD_LENGTH, DatasetTokenizer};

/// Settings for building a [`NameIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameIndexConfig {
    /// Minimum length, in bytes, of a word that becomes an index key.
    pub min_word_length: usize,
}

impl NameIndexConfig {
    pub const DEFAULT: NameIndexConfig = NameIndexConfig {
        min_word_length: DEFAULT_MIN_WORD_LENGTH,
    };
}

impl Default for NameIndexConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builds the three index structures together, one record at a time.
///
/// Records receive consecutive marks in the order they are pushed. The
/// builder owns copies of all text, so the decoded buffer can be released as
/// soon as the last record has been pushed.
pub struct NameIndexBuilder {
    tokenizer: DatasetTokenizer,
    names: AHashMap<u32, Box<str>>,
    marks: Vec<u32>,
    words: AHashMap<Box<str>, Vec<Mark>>,
}

impl NameIndexBuilder {
    pub fn new(config: NameIndexConfig) -> NameIndexBuilder {
        Self::with_capacity(config, 0, 0)
    }

    /// Creates a builder presized for `record_count` records and `word_count`
    /// distinct words.
    pub fn with_capacity(
        config: NameIndexConfig,
        record_count: usize,
        word_count: usize,
    ) -> NameIndexBuilder {
        NameIndexBuilder {
            tokenizer: DatasetTokenizer::with_min_length(config.min_word_length),
            names: AHashMap::with_capacity(record_count),
            marks: Vec::with_capacity(record_count),
            words: AHashMap::with_capacity(word_count),
        }
    }

    /// Number of records pushed so far.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Adds a record to the index and returns the mark assigned to it.
    ///
    /// The record's name and alias text are split into words; each word of at
    /// least the configured minimum length gets the record's mark added to its
    /// posting list.
    ///
    /// # Errors
    ///
    /// - `DuplicateCodepoint` if a record for the same codepoint was already pushed.
    /// - `InvalidFormat` if the 16-bit mark space is exhausted.
    pub fn push_record(&mut self, record: &Record<'_>) -> Result<Mark> {
        let mark = Mark::try_from(self.marks.len())
            .map_err(|_| Error::invalid_format("record_count", "more than 65536 records"))?;
        if self.names.contains_key(&record.codepoint) {
            return Err(Error::duplicate_codepoint(record.codepoint));
        }

        self.names.insert(record.codepoint, record.name.into());
        self.marks.push(record.codepoint);

        let tokens = self
            .tokenizer
            .tokenize(record.name)
            .chain(self.tokenizer.tokenize(record.aliases));
        for word in tokens {
            match self.words.get_mut(word) {
                Some(marks) => {
                    // Marks arrive in increasing order, so a repeated word
                    // within one record can only match the last entry.
                    if marks.last() != Some(&mark) {
                        marks.push(mark);
                    }
                }
                None => {
                    self.words.insert(word.into(), vec![mark]);
                }
            }
        }
        Ok(mark)
    }

    /// Freezes the collected data into an immutable [`NameIndex`].
    pub fn finish(self) -> NameIndex {
        let mut words = self
            .words
            .into_iter()
            .map(|(word, marks)| WordEntry {
                word,
                marks: marks.into_boxed_slice(),
            })
            .collect::<Vec<_>>();
        words.sort_unstable_by(|a, b| a.word.cmp(&b.word));

        NameIndex::from_parts(self.names, self.marks.into_boxed_slice(), words)
    }
}

impl NameIndex {
    /// Decodes a decompressed dataset buffer and builds the index from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is malformed or truncated, or if it
    /// lists the same codepoint twice.
    pub fn from_dataset(buf: &[u8], config: NameIndexConfig) -> Result<NameIndex> {
        let start = Instant::now();
        let decoder = DatasetDecoder::new(buf)?;
        let header = decoder.header();
        let mut builder = NameIndexBuilder::with_capacity(
            config,
            header.record_count as usize,
            header.word_count as usize,
        );
        for record in decoder {
            builder.push_record(&record?)?;
        }
        let index = builder.finish();
        log::debug!(
            "built character name index: {} records, {} words in {:?}",
            index.record_count(),
            index.word_count(),
            start.elapsed()
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetWriter;
    use crate::error::ErrorKind;

    fn record<'a>(codepoint: u32, name: &'a str, aliases: &'a str) -> Record<'a> {
        Record {
            codepoint,
            name,
            aliases,
        }
    }

    #[test]
    fn test_marks_follow_push_order() {
        let mut builder = NameIndexBuilder::new(NameIndexConfig::default());
        assert!(builder.is_empty());
        let first = builder
            .push_record(&record(0x2b2d, "white horizontal ellipse", ""))
            .unwrap();
        let second = builder
            .push_record(&record(0x41, "latin capital letter a", ""))
            .unwrap();
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(builder.len(), 2);

        let index = builder.finish();
        assert_eq!(index.codepoint_of(0), Some(0x2b2d));
        assert_eq!(index.codepoint_of(1), Some(0x41));
        assert_eq!(index.codepoint_of(2), None);
    }

    #[test]
    fn test_word_postings() {
        let mut builder = NameIndexBuilder::new(NameIndexConfig::default());
        builder
            .push_record(&record(0x2026, "horizontal ellipsis", "horiz"))
            .unwrap();
        builder
            .push_record(&record(0x22ee, "vertical ellipsis", "vert"))
            .unwrap();
        builder
            .push_record(&record(0x41, "latin capital letter a", ""))
            .unwrap();
        let index = builder.finish();

        assert_eq!(index.marks_of("ellipsis"), Some(&[0, 1][..]));
        assert_eq!(index.marks_of("horiz"), Some(&[0][..]));
        assert_eq!(index.marks_of("letter"), Some(&[2][..]));
        // single letters are not indexed
        assert_eq!(index.marks_of("a"), None);
        assert_eq!(index.marks_of(""), None);
    }

    #[test]
    fn test_repeated_word_in_record() {
        let mut builder = NameIndexBuilder::new(NameIndexConfig::default());
        builder
            .push_record(&record(0x1f46f, "woman with bunny ears", "bunny woman"))
            .unwrap();
        let index = builder.finish();
        assert_eq!(index.marks_of("bunny"), Some(&[0][..]));
        assert_eq!(index.marks_of("woman"), Some(&[0][..]));
    }

    #[test]
    fn test_words_are_sorted() {
        let mut builder = NameIndexBuilder::new(NameIndexConfig::default());
        builder
            .push_record(&record(1, "zeta beta", "alpha"))
            .unwrap();
        builder.push_record(&record(2, "gamma beta", "")).unwrap();
        let index = builder.finish();
        let words = index.words().collect::<Vec<_>>();
        assert_eq!(words, vec!["alpha", "beta", "gamma", "zeta"]);
    }

    #[test]
    fn test_duplicate_codepoint() {
        let mut builder = NameIndexBuilder::new(NameIndexConfig::default());
        builder
            .push_record(&record(0x41, "latin capital letter a", ""))
            .unwrap();
        let err = builder
            .push_record(&record(0x41, "latin capital letter a", ""))
            .unwrap_err();
        assert!(matches!(
            err.into_kind(),
            ErrorKind::DuplicateCodepoint { codepoint: 0x41 }
        ));
    }

    #[test]
    fn test_min_word_length_config() {
        let config = NameIndexConfig { min_word_length: 4 };
        let mut builder = NameIndexBuilder::new(config);
        builder
            .push_record(&record(0x2600, "black sun with rays", "sun"))
            .unwrap();
        let index = builder.finish();
        assert!(index.marks_of("sun").is_none());
        assert!(index.marks_of("rays").is_some());
    }

    #[test]
    fn test_from_dataset() {
        let mut writer = DatasetWriter::new();
        writer
            .push(0x2026, "horizontal ellipsis", &["horiz"])
            .unwrap();
        writer.push(0x1f41d, "honeybee", &["bee"]).unwrap();
        let buf = writer.finish();

        let index = NameIndex::from_dataset(&buf, NameIndexConfig::default()).unwrap();
        assert_eq!(index.record_count(), 2);
        // horizontal, ellipsis, horiz, honeybee, bee
        assert_eq!(index.word_count(), 5);
        assert_eq!(index.lookup_name(0x1f41d), "honeybee");
    }

    #[test]
    fn test_from_truncated_dataset() {
        let mut writer = DatasetWriter::new();
        writer
            .push(0x2026, "horizontal ellipsis", &["horiz"])
            .unwrap();
        let buf = writer.finish();
        let truncated = &buf[..buf.len() - 3];
        let result = NameIndex::from_dataset(truncated, NameIndexConfig::default());
        assert!(result.is_err());
    }
}
