//! Stats command implementation

use anyhow::Result;
use charname_index::dataset::embedded;
use std::time::Instant;

use crate::commands::open_index;
use crate::utils;

/// Run the stats command
pub fn run(dataset: Option<String>) -> Result<()> {
    let start_time = Instant::now();
    let index = open_index(dataset.as_deref())?;
    let elapsed = start_time.elapsed();

    let stats = index.stats();
    match &dataset {
        Some(path) => println!("Dataset: {path}"),
        None => println!(
            "Dataset: embedded ({} compressed)",
            utils::format_size(embedded::COMPRESSED_DATASET.len() as u64)
        ),
    }
    println!("  Records: {}", stats.record_count);
    println!("  Distinct words: {}", stats.word_count);
    println!("  Postings: {}", stats.posting_count);
    if stats.word_count > 0 {
        println!(
            "  Average postings per word: {:.2}",
            stats.posting_count as f64 / stats.word_count as f64
        );
    }
    println!("  Build time: {:.3} seconds", elapsed.as_secs_f64());
    Ok(())
}
