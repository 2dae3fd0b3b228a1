//! Command implementations for the Apothecary CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::Serialize;

use crate::cli::args::{
    ApothecaryArgs, Command, InteractiveArgs, OutputFormat, SearchArgs, StatsArgs,
};
use crate::cli::output;
use crate::corpus::{load_corpus, DocKind};
use crate::error::{ApothecaryError, Result};
use crate::search::{EngineSlot, QueryEngine, SearchSession};

/// Execute a CLI command.
pub fn execute_command(args: ApothecaryArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Interactive(interactive_args) => interactive(interactive_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Run a one-shot query.
fn search(args: SearchArgs, cli_args: &ApothecaryArgs) -> Result<()> {
    let documents = load_corpus(&args.corpus)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} documents from {}", documents.len(), args.corpus.display());
    }

    let engine = QueryEngine::new(documents)?;
    let outcome = engine.execute(&args.query)?;
    output::print_outcome(&outcome, cli_args.output_format, cli_args.pretty, args.limit)
}

/// Run a line-oriented interactive session.
///
/// Each submitted line bypasses the debounce timer, exactly like
/// pressing Enter in the site's search box; the debounced path is
/// exercised by type-ahead callers embedding [`SearchSession`].
fn interactive(args: InteractiveArgs, cli_args: &ApothecaryArgs) -> Result<()> {
    let documents = load_corpus(&args.corpus)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let slot: EngineSlot = Arc::new(RwLock::new(None));

        // One-time blocking build, completed before any query is
        // accepted.
        let engine = QueryEngine::new(documents)?;
        if cli_args.verbosity() > 0 {
            println!(
                "Index ready: {} documents, {} terms",
                engine.index().doc_count(),
                engine.index().term_count()
            );
        }
        *slot.write() = Some(engine);

        let (mut session, mut states) =
            SearchSession::new(slot, Duration::from_millis(args.debounce_ms));

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("search> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let query = line.trim();
            if query.is_empty() {
                break;
            }

            session.submit(query);
            while let Ok(state) = states.try_recv() {
                output::print_state(&state, cli_args.output_format, cli_args.pretty, None)?;
            }
        }

        Ok::<(), ApothecaryError>(())
    })
}

/// Corpus and index statistics.
#[derive(Debug, Serialize)]
struct StatsReport {
    documents: usize,
    substances: usize,
    posts: usize,
    distinct_terms: usize,
    postings: u64,
}

/// Show corpus and index statistics.
fn show_stats(args: StatsArgs, cli_args: &ApothecaryArgs) -> Result<()> {
    let documents = load_corpus(&args.corpus)?;
    let engine = QueryEngine::new(documents)?;

    let substances = engine
        .documents()
        .iter()
        .filter(|document| document.kind == DocKind::Substance)
        .count();
    let report = StatsReport {
        documents: engine.documents().len(),
        substances,
        posts: engine.documents().len() - substances,
        distinct_terms: engine.index().term_count(),
        postings: engine.index().posting_count(),
    };

    match cli_args.output_format {
        OutputFormat::Json => {
            let rendered = if cli_args.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{rendered}");
        }
        OutputFormat::Human => {
            println!("Documents:      {}", report.documents);
            println!("  substances:   {}", report.substances);
            println!("  posts:        {}", report.posts);
            println!("Distinct terms: {}", report.distinct_terms);
            println!("Postings:       {}", report.postings);
        }
    }

    Ok(())
}
