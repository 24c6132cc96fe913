use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, BrowseOutcome, Focus};
use crate::components::point_in_rect;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => return Ok(Some(self.outcome(false))),
				KeyCode::Char('t') => {
					self.toggle_theme();
					return Ok(None);
				}
				KeyCode::Char('l') => {
					self.clear();
					return Ok(None);
				}
				_ => {}
			}
		}

		// Overlays swallow keys until dismissed.
		if self.search.is_empty_result() {
			if matches!(
				key.code,
				KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('o')
			) {
				self.search.dismiss_empty();
			}
			return Ok(None);
		}
		if self.search.selection().is_some() {
			match key.code {
				KeyCode::Enter => return Ok(Some(self.outcome(true))),
				KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
					self.search.dismiss_selection();
				}
				_ => {}
			}
			return Ok(None);
		}

		match self.focus {
			Focus::Query => self.handle_query_key(key),
			Focus::Results => {
				self.handle_results_key(key);
				Ok(None)
			}
		}
	}

	fn handle_query_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => self.submit_query(),
			KeyCode::Tab | KeyCode::Down => self.focus_results(),
			_ => {
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		let len = self.search.results().len();
		match key.code {
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.focus = Focus::Query,
			KeyCode::Left => self.grid.move_left(len),
			KeyCode::Right => self.grid.move_right(len),
			KeyCode::Up => {
				// Leaving the first row goes back to the query field.
				if self.grid.selected().is_none_or(|index| index < self.grid.columns()) {
					self.focus = Focus::Query;
				} else {
					self.grid.move_up(len);
				}
			}
			KeyCode::Down => self.grid.move_down(len),
			KeyCode::Home => self.grid.move_first(len),
			KeyCode::End => self.grid.move_last(len),
			KeyCode::PageUp => self.grid.scroll_rows(-3, len),
			KeyCode::PageDown => self.grid.scroll_rows(3, len),
			KeyCode::Enter | KeyCode::Char(' ') => {
				if let Some(index) = self.grid.selected() {
					self.open_detail(index);
				}
			}
			KeyCode::Char(_) | KeyCode::Backspace => {
				self.focus = Focus::Query;
				self.search_input.input(key);
			}
			_ => {}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);

		if self.search.is_empty_result() {
			if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
				&& self
					.alert_area
					.is_none_or(|alert| alert.dismisses(column, row))
			{
				self.search.dismiss_empty();
			}
			return;
		}
		if self.search.selection().is_some() {
			if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
				&& !self
					.detail_area
					.is_some_and(|area| point_in_rect(column, row, area))
			{
				self.search.dismiss_selection();
			}
			return;
		}

		let len = self.search.results().len();
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.grid.card_at(column, row) {
					self.open_detail(index);
				} else if self
					.input_area
					.is_some_and(|area| point_in_rect(column, row, area))
				{
					self.focus = Focus::Query;
				}
			}
			MouseEventKind::ScrollUp if self.grid.contains(column, row) => {
				self.grid.scroll_rows(-1, len);
			}
			MouseEventKind::ScrollDown if self.grid.contains(column, row) => {
				self.grid.scroll_rows(1, len);
			}
			_ => {}
		}
	}
}
