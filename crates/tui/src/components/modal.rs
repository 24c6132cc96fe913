//! Overlay helpers and the "no matches" alert.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::point_in_rect;
use crate::config::UiLabels;
use crate::style::Theme;

/// A rectangle of at most `width` × `height` centred in `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

const ALERT_WIDTH: u16 = 58;

/// Where the "no matches" alert landed on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertArea {
	/// The whole card, border included.
	pub card: Rect,
	/// The row holding the dismiss button.
	pub button: Rect,
}

impl AlertArea {
	/// Whether a click at (`column`, `row`) should close the alert: on the
	/// button, or anywhere outside the card.
	#[must_use]
	pub fn dismisses(&self, column: u16, row: u16) -> bool {
		point_in_rect(column, row, self.button) || !point_in_rect(column, row, self.card)
	}
}

/// Draw the dismissable "no matches" alert and return where it landed.
pub fn render_empty_alert(
	frame: &mut Frame,
	area: Rect,
	labels: &UiLabels,
	theme: &Theme,
) -> AlertArea {
	let message = vec![
		Line::from(Span::styled(labels.empty_title.clone(), theme.error)),
		Line::default(),
		Line::from(labels.empty_body.clone()),
		Line::default(),
	];
	let button_label = format!("[ {} ]", labels.empty_button);
	let button_width = u16::try_from(button_label.width()).unwrap_or(u16::MAX);
	let button_line = Line::from(Span::styled(
		button_label,
		theme.row_highlight.add_modifier(Modifier::BOLD),
	));

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.error)
		.padding(Padding::vertical(1));
	let text_width = ALERT_WIDTH.min(area.width).saturating_sub(2);
	let message_rows = wrapped_rows(Paragraph::new(message.clone()), text_width);

	let mut lines = message;
	lines.push(button_line);
	let paragraph = Paragraph::new(lines)
		.block(block.clone())
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	let height = u16::try_from(paragraph.line_count(text_width)).unwrap_or(u16::MAX);
	let card = centered_rect(area, ALERT_WIDTH, height);

	let inner = block.inner(card);
	let button_width = button_width.min(inner.width);
	let button = Rect {
		x: inner.x + (inner.width - button_width) / 2,
		y: inner.y.saturating_add(message_rows).min(inner.bottom().saturating_sub(1)),
		width: button_width,
		height: u16::from(inner.height > 0),
	};

	frame.render_widget(Clear, card);
	frame.render_widget(paragraph, card);
	AlertArea { card, button }
}

fn wrapped_rows(paragraph: Paragraph<'_>, width: u16) -> u16 {
	let count = paragraph.wrap(Wrap { trim: true }).line_count(width);
	u16::try_from(count).unwrap_or(u16::MAX)
}
