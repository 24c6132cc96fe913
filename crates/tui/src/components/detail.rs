//! Detail overlay for the selected result.

use booksy_core::{CoverSize, SearchResult};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::modal::centered_rect;
use crate::style::Theme;

/// Author text in the detail view when the entry lists no authors.
pub const UNKNOWN: &str = "Unknown";
/// Cover text in the detail view when the entry has no cover.
pub const NO_COVER_AVAILABLE: &str = "No Cover Available";

const DETAIL_WIDTH: u16 = 72;

/// Everything besides the selection that the overlay needs to draw.
pub struct DetailContext<'a> {
	/// Overlay title.
	pub title: &'a str,
	/// Base URL of the covers service.
	pub covers_url: &'a str,
	/// Active theme.
	pub theme: &'a Theme,
}

/// Lines describing `result`: cover, title, author, year, and subjects when
/// the entry has any.
#[must_use]
pub fn detail_lines(result: &SearchResult, covers_url: &str, theme: &Theme) -> Vec<Line<'static>> {
	let cover = result
		.cover_url(covers_url, CoverSize::Large)
		.unwrap_or_else(|| NO_COVER_AVAILABLE.to_string());
	let authors = result.author_line().unwrap_or_else(|| UNKNOWN.to_string());

	let mut lines = vec![
		Line::from(Span::styled(cover, theme.empty)),
		Line::default(),
		Line::from(Span::styled(result.title.clone(), theme.highlight)),
		labelled("Author:", authors, theme),
		labelled("First Published:", result.year_label().into_owned(), theme),
	];
	if let Some(subjects) = result.subject_line() {
		lines.push(Line::default());
		lines.push(labelled("Subjects:", subjects, theme));
	}
	lines
}

fn labelled(label: &'static str, value: String, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(label, theme.prompt),
		Span::raw(" "),
		Span::raw(value),
	])
}

/// Draw the overlay over `area`. Renders nothing and returns `None` when no
/// result is selected; otherwise returns the overlay's area.
pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	selection: Option<&SearchResult>,
	ctx: DetailContext<'_>,
) -> Option<Rect> {
	let result = selection?;
	let lines = detail_lines(result, ctx.covers_url, ctx.theme);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(ctx.theme.border_style())
		.title(Line::from(format!(" {} ", ctx.title)).alignment(Alignment::Left))
		.title_bottom(
			Line::from(Span::styled(" Esc close · Enter choose ", ctx.theme.empty))
				.alignment(Alignment::Right),
		);
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true });

	// Height of the wrapped text at the inner width, borders included.
	let text_width = DETAIL_WIDTH.min(area.width).saturating_sub(2);
	let height = u16::try_from(paragraph.line_count(text_width)).unwrap_or(u16::MAX);
	let modal = centered_rect(area, DETAIL_WIDTH, height);

	frame.render_widget(Clear, modal);
	frame.render_widget(paragraph, modal);
	Some(modal)
}
