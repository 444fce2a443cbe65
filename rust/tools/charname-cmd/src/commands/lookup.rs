//! Lookup command implementation

use anyhow::Result;

use crate::commands::{open_index, parse_codepoint};
use crate::utils;

/// Run the lookup command
pub fn run(dataset: Option<String>, codepoint: &str) -> Result<()> {
    let codepoint = parse_codepoint(codepoint)?;
    let index = open_index(dataset.as_deref())?;
    let name = index.lookup_name(codepoint);
    if name.is_empty() {
        anyhow::bail!("No name found for {}", utils::format_codepoint(codepoint));
    }
    println!("{}  {name}", utils::format_codepoint(codepoint));
    Ok(())
}
