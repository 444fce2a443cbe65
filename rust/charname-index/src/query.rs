//! Word-prefix query evaluation over a [`NameIndex`].
//!
//! A query is split into terms by [`query_terms`]. Every term is resolved
//! independently into the set of records having at least one indexed word
//! that starts with the term; the per-term sets are then intersected. Term
//! resolution only reads the index, so the terms are evaluated in parallel
//! on the rayon pool and joined with a local intersection.

use ahash::AHashSet;
use rayon::prelude::*;
use roaring::RoaringBitmap;

use crate::index::{Mark, NameIndex};
use crate::tokenizer::query_terms;

impl NameIndex {
    /// Returns every codepoint whose name or aliases match all terms of `text`.
    ///
    /// The query is lowercased and split on single spaces. A record matches a
    /// term if any of its indexed words starts with the term; it matches the
    /// query if it matches every term. The order of the returned set is
    /// unspecified.
    ///
    /// Empty terms, produced by an empty query or by consecutive spaces, are a
    /// prefix of every word: on their own they match every record with at
    /// least one indexed word, and next to other terms they do not narrow the
    /// result.
    pub fn query(&self, text: &str) -> AHashSet<u32> {
        let marks = self.query_marks(text);
        marks
            .iter()
            .filter_map(|mark| self.codepoint_of(mark as Mark))
            .collect()
    }

    /// Evaluates `text` and returns the matching marks.
    pub fn query_marks(&self, text: &str) -> RoaringBitmap {
        let terms = query_terms(text);
        log::trace!("query {text:?}: {} terms", terms.len());
        terms
            .par_iter()
            .map(|term| self.prefix_marks(term))
            .reduce_with(|mut acc, marks| {
                acc &= marks;
                acc
            })
            .unwrap_or_default()
    }

    /// Returns the union of the posting lists of all words starting with `prefix`.
    ///
    /// `prefix` is matched as given; it is not lowercased.
    pub fn prefix_marks(&self, prefix: &str) -> RoaringBitmap {
        let mut marks = RoaringBitmap::new();
        for entry in self.prefix_entries(prefix) {
            marks.extend(entry.marks.iter().map(|&mark| mark as u32));
        }
        marks
    }
}
