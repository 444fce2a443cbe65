use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "charname-cmd")]
#[command(about = "Command-line utility for searching Unicode character names")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find characters whose names match every word prefix of a query
    Query {
        /// zstd-compressed dataset to search instead of the embedded one
        #[arg(long)]
        dataset: Option<String>,

        /// Also list the indexed words matched by each query term
        #[arg(long)]
        words: bool,

        /// Maximum number of characters to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Query text (multiple arguments are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print the canonical name of a codepoint
    Lookup {
        /// zstd-compressed dataset to read instead of the embedded one
        #[arg(long)]
        dataset: Option<String>,

        /// Codepoint as U+XXXX, 0xXXXX or decimal
        codepoint: String,
    },

    /// Build the index and display summary information
    Stats {
        /// zstd-compressed dataset to index instead of the embedded one
        #[arg(long)]
        dataset: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            dataset,
            words,
            limit,
            text,
        } => commands::query::run(dataset, words, limit, text.join(" ")),
        Commands::Lookup { dataset, codepoint } => commands::lookup::run(dataset, &codepoint),
        Commands::Stats { dataset } => commands::stats::run(dataset),
    }
}
