//! Query command implementation

use anyhow::Result;
use charname_index::tokenizer::query_terms;

use crate::commands::open_index;
use crate::utils;

/// Run the query command
pub fn run(
    dataset: Option<String>,
    words: bool,
    limit: Option<usize>,
    text: String,
) -> Result<()> {
    let index = open_index(dataset.as_deref())?;

    if words {
        for term in query_terms(&text) {
            let matched = index.words_with_prefix(&term).collect::<Vec<_>>();
            println!("{term:?}: {} words", matched.len());
            for word in matched.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("  {word}");
            }
        }
    }

    let mut codepoints = index.query(&text).into_iter().collect::<Vec<_>>();
    codepoints.sort_unstable();
    let total = codepoints.len();
    for codepoint in codepoints.into_iter().take(limit.unwrap_or(usize::MAX)) {
        println!(
            "{}  {}",
            utils::format_codepoint(codepoint),
            index.lookup_name(codepoint)
        );
    }
    if let Some(limit) = limit.filter(|&limit| limit < total) {
        println!("... {} more", total - limit);
    }
    Ok(())
}
