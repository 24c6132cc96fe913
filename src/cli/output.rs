use anyhow::Result;
use booksy_core::{CoverSize, ResultKey, SearchResult, SearchState};
use booksy_tui::BrowseOutcome;
use booksy_tui::components::UNKNOWN_AUTHOR;
use serde_json::{Value, json};

use super::OutputFormat;

/// Print how an interactive session ended.
pub(crate) fn print_outcome(
	format: OutputFormat,
	outcome: &BrowseOutcome,
	covers_url: &str,
) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome, covers_url)?),
	}
	Ok(())
}

/// Print the settled state of a one-shot search.
pub(crate) fn print_batch(
	format: OutputFormat,
	query: &str,
	state: &SearchState,
	covers_url: &str,
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			let text = format_batch_plain(query, state);
			if !text.is_empty() {
				println!("{text}");
			}
		}
		OutputFormat::Json => println!("{}", format_batch_json(query, state, covers_url)?),
	}
	Ok(())
}

pub(crate) fn format_outcome_plain(outcome: &BrowseOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}
	match &outcome.selection {
		Some(book) => book_line(book),
		None => "No selection".to_string(),
	}
}

pub(crate) fn format_outcome_json(outcome: &BrowseOutcome, covers_url: &str) -> Result<String> {
	let selection = match (&outcome.selection, &outcome.selection_key) {
		(Some(book), Some(key)) => book_json(book, key, covers_url),
		(Some(book), None) => book_json(book, &book.list_key(0), covers_url),
		(None, _) => Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// One tab-separated line per book; errors are reported by the caller.
pub(crate) fn format_batch_plain(query: &str, state: &SearchState) -> String {
	match state {
		SearchState::Success(results) => results
			.iter()
			.map(book_line)
			.collect::<Vec<_>>()
			.join("\n"),
		SearchState::Empty => format!("No books found for '{query}'"),
		_ => String::new(),
	}
}

pub(crate) fn format_batch_json(query: &str, state: &SearchState, covers_url: &str) -> Result<String> {
	let results: Vec<Value> = state
		.results()
		.iter()
		.enumerate()
		.map(|(index, book)| book_json(book, &book.list_key(index), covers_url))
		.collect();

	let payload = json!({
		"query": query,
		"state": state.label(),
		"results": results,
		"error": state.error(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

fn book_line(book: &SearchResult) -> String {
	let authors = book
		.author_line()
		.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
	format!("{}\t{}\t{}", book.title, authors, book.year_label())
}

fn book_json(book: &SearchResult, key: &ResultKey, covers_url: &str) -> Value {
	json!({
		"key": key.to_string(),
		"title": book.title,
		"authors": book.authors,
		"first_publish_year": book.first_publish_year,
		"cover_url": book.cover_url(covers_url, CoverSize::Large),
		"subjects": book.subjects,
	})
}
