//! Header, search prompt, and the status line beneath it.

use booksy_core::SearchState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{Theme, ThemeKind};

/// Draw the title, tagline, and theme hint.
///
/// The hint is dropped when it would overlap the centred title.
pub fn render_header(frame: &mut Frame, area: Rect, labels: &UiLabels, kind: ThemeKind, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let first_row = Rect { height: 1, ..area };
	let title = Line::from(Span::styled(
		labels.title.clone(),
		theme.header.add_modifier(Modifier::BOLD),
	))
	.alignment(Alignment::Center);
	frame.render_widget(Paragraph::new(title), first_row);

	let hint = format!("Ctrl+T {} mode", kind.toggled());
	if hint_fits(area.width, labels.title.width(), hint.width()) {
		let hint = Line::from(Span::styled(hint, theme.empty)).alignment(Alignment::Right);
		frame.render_widget(Paragraph::new(hint), first_row);
	}

	if area.height > 1 {
		let second_row = Rect {
			y: area.y + 1,
			height: 1,
			..area
		};
		let tagline = Line::from(Span::styled(labels.tagline.clone(), theme.empty))
			.alignment(Alignment::Center);
		frame.render_widget(Paragraph::new(tagline), second_row);
	}
}

fn hint_fits(width: u16, title_width: usize, hint_width: usize) -> bool {
	let width = usize::from(width);
	let title_end = width.saturating_sub(title_width) / 2 + title_width;
	title_end + 1 + hint_width <= width
}

/// Inputs for [`render_input`].
pub struct InputContext<'a, 'b> {
	/// The query field.
	pub input: &'a QueryInput<'b>,
	/// Whether keyboard focus is on the field.
	pub focused: bool,
	/// Active theme.
	pub theme: &'a Theme,
}

/// Draw the query field inside a bordered box.
pub fn render_input(frame: &mut Frame, area: Rect, ctx: InputContext<'_, '_>) {
	let border = if ctx.focused {
		ctx.theme.prompt
	} else {
		ctx.theme.border_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border)
		.title(" Search ")
		.title_bottom(
			Line::from(Span::styled(" Enter search · Ctrl+L clear ", ctx.theme.empty))
				.alignment(Alignment::Right),
		);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	ctx.input.render(frame, inner);
}

/// Inputs for [`render_status`].
pub struct StatusContext<'a> {
	/// Current search state.
	pub state: &'a SearchState,
	/// Query the state belongs to.
	pub query: &'a str,
	/// Labels for idle and loading text.
	pub labels: &'a UiLabels,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Active theme.
	pub theme: &'a Theme,
}

/// The status line for the current state.
#[must_use]
pub fn status_line(ctx: &StatusContext<'_>) -> Line<'static> {
	let theme = ctx.theme;
	match ctx.state {
		SearchState::Idle => Line::from(Span::styled(ctx.labels.idle_hint.clone(), theme.empty)),
		SearchState::Loading => {
			let spinner = Throbber::default()
				.style(theme.prompt)
				.throbber_style(theme.prompt)
				.to_symbol_span(ctx.throbber_state);
			Line::from(vec![
				spinner,
				Span::styled(ctx.labels.loading.clone(), theme.prompt),
			])
		}
		SearchState::Error(message) => Line::from(Span::styled(message.clone(), theme.error)),
		SearchState::Success(results) => Line::from(Span::styled(
			format!(
				"{} result{} for \"{}\"",
				results.len(),
				if results.len() == 1 { "" } else { "s" },
				ctx.query
			),
			theme.empty,
		)),
		SearchState::Empty => Line::default(),
	}
}

/// Draw the status line centred in `area`.
pub fn render_status(frame: &mut Frame, area: Rect, ctx: StatusContext<'_>) {
	let line = status_line(&ctx).alignment(Alignment::Center);
	frame.render_widget(Paragraph::new(line), area);
}
