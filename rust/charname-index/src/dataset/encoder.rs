//! Writer producing the dataset layout consumed by [`DatasetDecoder`](super::DatasetDecoder).

use ahash::AHashSet;
use byteorder::{LE, WriteBytesExt};

use crate::dataset::{HEADER_SIZE, MAX_RECORD_COUNT, RECORD_FIXED_SIZE};
use crate::error::{Error, Result};
use crate::tokenizer::DatasetTokenizer;
use crate::verify_arg;

/// Accumulates records and serializes them into an uncompressed dataset buffer.
///
/// Text is written exactly as given: the writer does not change word casing,
/// so callers are expected to pass lowercase names and aliases to keep the
/// dataset searchable by the query engine.
pub struct DatasetWriter {
    buf: Vec<u8>,
    record_count: u32,
    words: AHashSet<String>,
    tokenizer: DatasetTokenizer,
}

impl Default for DatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetWriter {
    pub fn new() -> DatasetWriter {
        let mut buf = Vec::with_capacity(4096);
        buf.resize(HEADER_SIZE, 0);
        DatasetWriter {
            buf,
            record_count: 0,
            words: AHashSet::new(),
            tokenizer: DatasetTokenizer::default(),
        }
    }

    /// Number of records pushed so far.
    pub fn record_count(&self) -> usize {
        self.record_count as usize
    }

    /// Appends a record.
    ///
    /// # Arguments
    ///
    /// * `codepoint` - The character the record describes.
    /// * `name` - The canonical name, returned verbatim by name lookups.
    /// * `aliases` - Additional search words, joined with single spaces into
    ///   the record's alias text.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if the dataset is full, if the name
    /// does not fit a 16-bit length, or if the encoded record body would
    /// exceed 65535 bytes.
    pub fn push(&mut self, codepoint: u32, name: &str, aliases: &[&str]) -> Result<()> {
        verify_arg!(
            record_count,
            (self.record_count as usize) < MAX_RECORD_COUNT
        );
        verify_arg!(name, name.len() <= u16::MAX as usize);

        let alias_len = aliases.iter().map(|a| a.len()).sum::<usize>()
            + aliases.len().saturating_sub(1);
        let body_len = RECORD_FIXED_SIZE + name.len() + alias_len;
        if body_len > u16::MAX as usize {
            return Err(Error::invalid_arg(
                "aliases",
                format!("record for U+{codepoint:04X} is {body_len} bytes long"),
            ));
        }

        self.buf.write_u16::<LE>(body_len as u16)?;
        self.buf.write_u32::<LE>(codepoint)?;
        self.buf.write_u16::<LE>(name.len() as u16)?;
        self.buf.extend_from_slice(name.as_bytes());
        for (i, alias) in aliases.iter().enumerate() {
            if i > 0 {
                self.buf.push(b' ');
            }
            self.buf.extend_from_slice(alias.as_bytes());
        }

        for word in self
            .tokenizer
            .tokenize(name)
            .chain(aliases.iter().flat_map(|&a| self.tokenizer.tokenize(a)))
        {
            if !self.words.contains(word) {
                self.words.insert(word.to_string());
            }
        }
        self.record_count += 1;
        Ok(())
    }

    /// Writes the header and returns the encoded dataset.
    pub fn finish(mut self) -> Vec<u8> {
        let word_count = self.words.len() as u32;
        self.buf[0..4].copy_from_slice(&self.record_count.to_le_bytes());
        self.buf[4..8].copy_from_slice(&word_count.to_le_bytes());
        self.buf
    }
}
