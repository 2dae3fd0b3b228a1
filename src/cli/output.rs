//! Output formatting for CLI results.

use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::search::{QueryOutcome, SearchResults, SearchState};

/// Print a one-shot query outcome.
pub fn print_outcome(
    outcome: &QueryOutcome,
    format: OutputFormat,
    pretty: bool,
    limit: Option<usize>,
) -> Result<()> {
    let state = match outcome {
        QueryOutcome::Idle => SearchState::Idle,
        QueryOutcome::Success(results) => SearchState::Success(results.clone()),
        QueryOutcome::Empty => SearchState::Empty,
    };
    print_state(&state, format, pretty, limit)
}

/// Print one search state as it arrives from a session.
pub fn print_state(
    state: &SearchState,
    format: OutputFormat,
    pretty: bool,
    limit: Option<usize>,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_state_json(state, pretty, limit),
        OutputFormat::Human => {
            print_state_human(state, limit);
            Ok(())
        }
    }
}

fn print_state_json(state: &SearchState, pretty: bool, limit: Option<usize>) -> Result<()> {
    let value = match state {
        SearchState::Idle => json!({ "state": "idle" }),
        SearchState::Pending => json!({ "state": "pending" }),
        SearchState::Empty => json!({ "state": "empty" }),
        SearchState::Error(message) => json!({ "state": "error", "message": message }),
        SearchState::Success(results) => {
            json!({ "state": "success", "results": capped(results, limit) })
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_state_human(state: &SearchState, limit: Option<usize>) {
    match state {
        SearchState::Idle => {}
        SearchState::Pending => println!("searching..."),
        SearchState::Empty => println!("No results found."),
        SearchState::Error(message) => println!("Search failed: {message}"),
        SearchState::Success(results) => print_results_human(&capped(results, limit)),
    }
}

fn print_results_human(results: &SearchResults) {
    if !results.substances.is_empty() {
        println!("Substances");
        for (position, entry) in results.substances.iter().enumerate() {
            println!("  {}. {} — {}", position + 1, entry.title, entry.category);
            if let Some(ref chemical_name) = entry.chemical_name {
                println!("     {chemical_name}");
            }
            println!("     {}", entry.legal_status);
            if !entry.also_known_as.is_empty() {
                println!("     also known as: {}", entry.also_known_as.join(", "));
            }
            if !entry.url.is_empty() {
                println!("     {}", entry.url);
            }
        }
    }

    if !results.posts.is_empty() {
        println!("Posts");
        for (position, entry) in results.posts.iter().enumerate() {
            println!(
                "  {}. {} — {} ({})",
                position + 1,
                entry.title,
                entry.author,
                entry.category
            );
            if !entry.description.is_empty() {
                println!("     {}", entry.description);
            }
            if !entry.archive_link.is_empty() {
                println!("     {}", entry.archive_link);
            }
        }
    }

    if results.truncated {
        println!(
            "(showing {} of {} results)",
            results.substances.len() + results.posts.len(),
            results.total_hits
        );
    }
}

/// Apply a display-only cap on top of the engine's result cap.
fn capped(results: &SearchResults, limit: Option<usize>) -> SearchResults {
    match limit {
        None => results.clone(),
        Some(limit) => {
            let mut capped = results.clone();
            capped.substances.truncate(limit);
            capped.posts.truncate(limit);
            capped
        }
    }
}
