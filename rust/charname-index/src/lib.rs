//! Search index over Unicode character names.
//!
//! This crate answers two questions about a fixed dictionary of character
//! names and aliases:
//!
//! - **Name lookup**: what is the canonical name of a codepoint?
//! - **Name search**: which codepoints have a name or alias containing, for
//!   every word of a query, some word starting with it?
//!
//! The dictionary ships with the crate as a compressed binary dataset (see
//! [`dataset`]). It is decoded and indexed once, on first use, into an
//! immutable [`NameIndex`] that any number of threads can then query without
//! synchronization.
//!
//! # Quick Start
//!
//! ```rust
//! // The embedded dataset is indexed on the first call.
//! assert_eq!(charname_index::lookup_name(0x2026), "horizontal ellipsis");
//!
//! let matches = charname_index::query("horiz ell");
//! assert!(matches.contains(&0x2026));
//! ```
//!
//! Applications that prefer an explicit context over the process-wide index
//! can own a [`LazyNameIndex`], or build a [`NameIndex`] directly with
//! [`NameIndex::from_dataset`], and pass it to the code that needs it.

pub mod builder;
pub mod dataset;
pub mod error;
pub mod index;
pub mod lazy;
pub mod query;
pub mod tokenizer;

use ahash::AHashSet;

pub use builder::{NameIndexBuilder, NameIndexConfig};
pub use error::{Error, ErrorKind, Result};
pub use index::{IndexStats, Mark, NameIndex};
pub use lazy::{DatasetSource, LazyNameIndex};

static EMBEDDED_INDEX: LazyNameIndex = LazyNameIndex::embedded();

/// The process-wide index over the embedded dataset, built on first access.
pub fn embedded_index() -> &'static NameIndex {
    EMBEDDED_INDEX.get()
}

/// Returns the canonical name of `codepoint`, or `""` if the embedded dataset
/// has no entry for it.
pub fn lookup_name(codepoint: u32) -> &'static str {
    embedded_index().lookup_name(codepoint)
}

/// Returns the codepoints matching every word-prefix term of `text` in the
/// embedded dataset. See [`NameIndex::query`].
pub fn query(text: &str) -> AHashSet<u32> {
    embedded_index().query(text)
}
