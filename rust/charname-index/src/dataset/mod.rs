//! Binary layout of the character-name dataset.
//!
//! The dataset is a flat, little-endian buffer produced offline and embedded
//! into the crate in compressed form:
//!
//! ```text
//! +--------------------+--------------------+----------+----------+-----
//! | record_count: u32  | word_count: u32    | record 0 | record 1 | ...
//! +--------------------+--------------------+----------+----------+-----
//!
//! record:
//! +----------------+----------------+------------------+--------------+-------------+
//! | body_len: u16  | codepoint: u32 | name_len: u16    | name (UTF-8) | alias text  |
//! +----------------+----------------+------------------+--------------+-------------+
//!                  |<----------------------- body_len bytes -------------------------->|
//! ```
//!
//! The alias text fills the remainder of the record body and holds
//! space-separated search words with no further length prefix. `word_count`
//! is a sizing hint for the inverted index and is not validated.

pub mod decoder;
pub mod embedded;
pub mod encoder;

pub use decoder::DatasetDecoder;
pub use encoder::DatasetWriter;

/// Size of the dataset header (`record_count` + `word_count`).
pub const HEADER_SIZE: usize = 8;

/// Size of the `body_len` prefix in front of every record.
pub const RECORD_LEN_SIZE: usize = 2;

/// Size of the fixed part of a record body (`codepoint` + `name_len`).
pub const RECORD_FIXED_SIZE: usize = 6;

/// Maximum number of records a dataset may hold, bounded by the 16-bit mark space.
pub const MAX_RECORD_COUNT: usize = u16::MAX as usize + 1;

/// Dataset header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetHeader {
    /// Total number of records that follow the header.
    pub record_count: u32,
    /// Number of distinct search words, used only to presize the inverted index.
    pub word_count: u32,
}

/// A single decoded dataset entry, borrowing its text from the dataset buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub codepoint: u32,
    /// Canonical character name.
    pub name: &'a str,
    /// Space-separated alias and search words; empty when the record has none.
    pub aliases: &'a str,
}
