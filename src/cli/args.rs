//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Apothecary - embedded full-text search for the Apothecary site
#[derive(Parser, Debug, Clone)]
#[command(name = "apothecary")]
#[command(about = "Search the Apothecary content corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ApothecaryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ApothecaryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a one-shot query against the corpus
    Search(SearchArgs),

    /// Interactive line-oriented search session
    Interactive(InteractiveArgs),

    /// Show corpus and index statistics
    Stats(StatsArgs),
}

/// Arguments for a one-shot search
#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Path to the serialized corpus (JSON array of documents)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Cap the number of displayed entries per group
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the interactive session
#[derive(clap::Args, Debug, Clone)]
pub struct InteractiveArgs {
    /// Path to the serialized corpus (JSON array of documents)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Debounce quiet period in milliseconds
    #[arg(long, default_value_t = 200)]
    pub debounce_ms: u64,
}

/// Arguments for the stats command
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the serialized corpus (JSON array of documents)
    #[arg(short, long)]
    pub corpus: PathBuf,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = ApothecaryArgs::parse_from(["apothecary", "stats", "--corpus", "x.json"]);
        assert_eq!(args.verbosity(), 1);

        let args = ApothecaryArgs::parse_from(["apothecary", "-vv", "stats", "--corpus", "x.json"]);
        assert_eq!(args.verbosity(), 2);

        let args = ApothecaryArgs::parse_from(["apothecary", "-q", "-v", "stats", "--corpus", "x.json"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_args() {
        let args = ApothecaryArgs::parse_from([
            "apothecary", "search", "mdma", "--corpus", "search.json", "--limit", "5",
        ]);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.query, "mdma");
                assert_eq!(search.limit, Some(5));
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }
}
