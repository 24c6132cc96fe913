//! A single result card in the grid.

use booksy_core::{CoverSize, SearchResult};
use ratatui::text::{Line, Span};

use crate::style::Theme;

/// Author text on a card whose entry lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Cover text on a card whose entry has no cover.
pub const NO_COVER: &str = "No Cover";

/// Outer width of a card, borders included.
pub const CARD_WIDTH: u16 = 30;
/// Outer height of a card, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Lines shown inside a card: title, authors, year, cover.
#[must_use]
pub fn card_lines(result: &SearchResult, covers_url: &str, theme: &Theme) -> Vec<Line<'static>> {
	let authors = result
		.author_line()
		.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
	let cover = result
		.cover_url(covers_url, CoverSize::Medium)
		.unwrap_or_else(|| NO_COVER.to_string());

	vec![
		Line::from(Span::styled(result.title.clone(), theme.highlight)),
		Line::from(authors),
		Line::from(Span::styled(result.year_label().into_owned(), theme.empty)),
		Line::from(Span::styled(cover, theme.empty)),
	]
}
