//! Command implementations for charname-cmd

use anyhow::{Context, Result};
use charname_index::dataset::embedded;
use charname_index::{NameIndex, NameIndexConfig};

use crate::utils;

pub mod lookup;
pub mod query;
pub mod stats;

/// Returns the index over `dataset`, or the embedded index when no path is given.
///
/// An external dataset is read, decompressed and indexed eagerly so that a
/// malformed file is reported as an error rather than a panic. The index is
/// kept for the remainder of the process.
pub fn open_index(dataset: Option<&str>) -> Result<&'static NameIndex> {
    let Some(path) = dataset else {
        return Ok(charname_index::embedded_index());
    };

    utils::validate_file_exists(path)?;
    let compressed =
        std::fs::read(path).with_context(|| format!("Failed to read dataset: {path}"))?;
    let buf = embedded::decompress(&compressed)
        .with_context(|| format!("Failed to decompress dataset: {path}"))?;
    let index = NameIndex::from_dataset(&buf, NameIndexConfig::default())
        .with_context(|| format!("Invalid dataset: {path}"))?;
    Ok(Box::leak(Box::new(index)))
}

/// Parses a codepoint written as `U+XXXX`, `0xXXXX` or a decimal number.
pub fn parse_codepoint(text: &str) -> Result<u32> {
    let text = text.trim();
    let hex = text
        .strip_prefix("U+")
        .or_else(|| text.strip_prefix("u+"))
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => text.parse::<u32>(),
    };
    parsed.with_context(|| format!("Invalid codepoint: {text}"))
}
