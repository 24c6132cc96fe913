//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// Text field holding the query being typed.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial` and showing `placeholder`
	/// while empty.
	pub fn new(initial: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let line = initial.lines().next().unwrap_or_default().to_string();
		let mut textarea = TextArea::new(vec![line]);
		textarea.move_cursor(CursorMove::End);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		Self { textarea }
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the field. Returns whether the text changed.
	///
	/// Keys that would add a second line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Empty the field, keeping its placeholder and styling.
	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	/// Restyle the field for `theme`.
	pub fn apply_theme(&mut self, theme: &Theme) {
		self.textarea.set_style(Style::default().fg(
			theme
				.highlight
				.fg
				.unwrap_or(ratatui::style::Color::Reset),
		));
		self.textarea.set_placeholder_style(theme.empty);
		self.textarea
			.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
	}

	/// Draw the field into `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		}
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = QueryInput::new("du", "Enter book title...");
		assert!(input.input(key(KeyCode::Char('n'))));
		assert!(input.input(key(KeyCode::Char('e'))));
		assert_eq!(input.text(), "dune");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = QueryInput::new("dune", "");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "dune");
	}

	#[test]
	fn clear_empties_the_field() {
		let mut input = QueryInput::new("dune", "");
		input.clear();
		assert_eq!(input.text(), "");
		assert!(input.input(key(KeyCode::Char('x'))));
		assert_eq!(input.text(), "x");
	}

	#[test]
	fn multi_line_initial_text_keeps_first_line() {
		let input = QueryInput::new("emma\nwoodhouse", "");
		assert_eq!(input.text(), "emma");
	}
}
