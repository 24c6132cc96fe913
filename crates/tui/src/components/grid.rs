//! Grid of result cards with keyboard and mouse navigation.

use booksy_core::SearchResult;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::card::{CARD_HEIGHT, CARD_WIDTH, card_lines};
use super::scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
use crate::style::Theme;

/// Upper bound on cards per grid row.
pub const MAX_COLUMNS: usize = 5;

/// Number of card columns that fit in `width`.
#[must_use]
pub fn columns_for_width(width: u16) -> usize {
	usize::from(width / CARD_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Cursor, scroll offset, and hit-test geometry for the grid.
#[derive(Debug, Clone)]
pub struct GridState {
	selected: Option<usize>,
	offset_row: usize,
	columns: usize,
	visible_rows: usize,
	cards: Vec<(usize, Rect)>,
	area: Option<Rect>,
}

impl Default for GridState {
	fn default() -> Self {
		Self {
			selected: None,
			offset_row: 0,
			columns: 1,
			visible_rows: 1,
			cards: Vec::new(),
			area: None,
		}
	}
}

impl GridState {
	/// Forget the cursor and scroll position.
	pub fn reset(&mut self) {
		self.selected = None;
		self.offset_row = 0;
		self.cards.clear();
		self.area = None;
	}

	/// Index of the highlighted card.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	/// Highlight `index`, clamped to `len`.
	pub fn select(&mut self, index: usize, len: usize) {
		self.selected = (len > 0).then(|| index.min(len - 1));
	}

	/// Make sure a card is highlighted when there are any.
	pub fn ensure_selection(&mut self, len: usize) {
		match self.selected {
			Some(index) if index < len => {}
			Some(_) | None if len > 0 => self.selected = Some(0),
			_ => self.selected = None,
		}
	}

	/// Columns used by the last render.
	#[must_use]
	pub fn columns(&self) -> usize {
		self.columns
	}

	/// Move left one card, stopping at the first.
	pub fn move_left(&mut self, len: usize) {
		self.step(-1, len);
	}

	/// Move right one card, stopping at the last.
	pub fn move_right(&mut self, len: usize) {
		self.step(1, len);
	}

	/// Move up one row, staying put on the first row.
	pub fn move_up(&mut self, len: usize) {
		if let Some(index) = self.selected
			&& index >= self.columns
		{
			self.select(index - self.columns, len);
		} else {
			self.ensure_selection(len);
		}
	}

	/// Move down one row, landing on the last card when the row below is
	/// short.
	pub fn move_down(&mut self, len: usize) {
		match self.selected {
			Some(index) => {
				let next_row_start = (index / self.columns + 1) * self.columns;
				if next_row_start < len {
					self.select(index + self.columns, len);
				}
			}
			None => self.ensure_selection(len),
		}
	}

	/// Jump to the first card.
	pub fn move_first(&mut self, len: usize) {
		self.select(0, len);
	}

	/// Jump to the last card.
	pub fn move_last(&mut self, len: usize) {
		self.select(len.saturating_sub(1), len);
	}

	/// Scroll by whole rows without moving the cursor off screen.
	pub fn scroll_rows(&mut self, delta: isize, len: usize) {
		let total_rows = len.div_ceil(self.columns.max(1));
		let metrics = ScrollMetrics::compute(total_rows, self.visible_rows);
		self.offset_row = self
			.offset_row
			.saturating_add_signed(delta)
			.min(metrics.max_scroll);
		if let Some(index) = self.selected {
			let row = index / self.columns;
			let last_visible = self.offset_row + metrics.viewport_len.saturating_sub(1);
			let row = row.clamp(self.offset_row, last_visible);
			let column = index % self.columns;
			self.select(row * self.columns + column, len);
		}
	}

	/// Card under the given terminal cell, if any.
	#[must_use]
	pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
		self.cards
			.iter()
			.find(|(_, rect)| point_in_rect(column, row, *rect))
			.map(|(index, _)| *index)
	}

	/// Where the card for `index` was last drawn.
	#[must_use]
	pub fn card_area(&self, index: usize) -> Option<Rect> {
		self.cards
			.iter()
			.find(|(card, _)| *card == index)
			.map(|(_, rect)| *rect)
	}

	/// Whether the cell lies anywhere inside the grid.
	#[must_use]
	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	fn step(&mut self, delta: isize, len: usize) {
		match self.selected {
			Some(index) => {
				let target = index.saturating_add_signed(delta);
				self.select(target, len);
			}
			None => self.ensure_selection(len),
		}
	}
}

/// Everything besides the results that the grid needs to draw.
pub struct GridContext<'a> {
	/// Base URL of the covers service.
	pub covers_url: &'a str,
	/// Active theme.
	pub theme: &'a Theme,
	/// Whether keyboard focus is on the grid.
	pub focused: bool,
}

/// Render `results` as cards, updating scroll position and hit-test areas.
pub fn render_grid(
	frame: &mut Frame,
	area: Rect,
	results: &[SearchResult],
	state: &mut GridState,
	ctx: GridContext<'_>,
) {
	state.cards.clear();
	state.area = Some(area);
	if area.width == 0 || area.height == 0 || results.is_empty() {
		return;
	}

	state.columns = columns_for_width(area.width);
	state.visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
	let total_rows = results.len().div_ceil(state.columns);
	let metrics = ScrollMetrics::compute(total_rows, state.visible_rows);
	if let Some(index) = state.selected {
		state.offset_row = metrics.offset_showing(state.offset_row, index / state.columns);
	}
	state.offset_row = state.offset_row.min(metrics.max_scroll);

	let content = render_scrollbar(frame, area, metrics, state.offset_row, ctx.theme);
	let card_width = content.width / state.columns as u16;

	let first = state.offset_row * state.columns;
	let last = ((state.offset_row + metrics.viewport_len) * state.columns).min(results.len());
	for (index, result) in results.iter().enumerate().take(last).skip(first) {
		let slot = index - first;
		let column = (slot % state.columns) as u16;
		let row = (slot / state.columns) as u16;
		let rect = Rect {
			x: content.x + column * card_width,
			y: content.y + row * CARD_HEIGHT,
			width: card_width,
			height: CARD_HEIGHT.min(content.bottom().saturating_sub(content.y + row * CARD_HEIGHT)),
		};
		if rect.height == 0 {
			continue;
		}

		let selected = state.selected == Some(index);
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(ctx.theme.border_style());
		if selected && ctx.focused {
			block = block.style(ctx.theme.row_highlight);
		} else if selected {
			block = block.border_style(ctx.theme.prompt);
		}

		let paragraph = Paragraph::new(card_lines(result, ctx.covers_url, ctx.theme)).block(block);
		frame.render_widget(paragraph, rect);
		state.cards.push((index, rect));
	}
}
