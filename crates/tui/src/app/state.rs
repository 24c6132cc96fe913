//! Core state container for the terminal front-end.
//!
//! [`App`] bundles the [`SearchController`] with the query field, the result
//! grid, and the geometry the mouse handlers hit-test against.

use booksy_core::{DEFAULT_COVERS_URL, ResultKey, SearchController, SearchResult, Submission};
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use crate::components::{AlertArea, GridState};
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{Theme, ThemeKind};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	/// The query field.
	#[default]
	Query,
	/// The grid of result cards.
	Results,
}

/// How a browsing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOutcome {
	/// Whether the user chose a book rather than quitting.
	pub accepted: bool,
	/// The query text at exit.
	pub query: String,
	/// The chosen book, when accepted.
	pub selection: Option<SearchResult>,
	/// Key of the chosen book within the result list, when accepted.
	pub selection_key: Option<ResultKey>,
}

/// Aggregate state for the terminal UI.
pub struct App<'a> {
	pub(crate) search: SearchController,
	pub(crate) search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) theme_kind: ThemeKind,
	pub(crate) theme: Theme,
	pub(crate) covers_url: String,
	pub(crate) focus: Focus,
	pub(crate) grid: GridState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) input_area: Option<Rect>,
	pub(crate) alert_area: Option<AlertArea>,
	pub(crate) detail_area: Option<Rect>,
	pending_query: Option<String>,
}

impl<'a> App<'a> {
	/// Wrap `search` with default labels and the light theme.
	pub fn new(search: SearchController) -> Self {
		let ui = UiLabels::default();
		let theme_kind = ThemeKind::default();
		let theme = theme_kind.theme();
		let mut search_input = QueryInput::new("", ui.placeholder.clone());
		search_input.apply_theme(&theme);

		Self {
			search,
			search_input,
			ui,
			theme_kind,
			theme,
			covers_url: DEFAULT_COVERS_URL.to_string(),
			focus: Focus::Query,
			grid: GridState::default(),
			throbber_state: ThrobberState::default(),
			input_area: None,
			alert_area: None,
			detail_area: None,
			pending_query: None,
		}
	}

	/// Replace the text drawn around the form and overlays.
	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		let text = self.search_input.text().to_string();
		self.search_input = QueryInput::new(text, labels.placeholder.clone());
		self.search_input.apply_theme(&self.theme);
		self.ui = labels;
		self
	}

	/// Start with the given colour scheme.
	#[must_use]
	pub fn with_theme(mut self, kind: ThemeKind) -> Self {
		self.set_theme(kind);
		self
	}

	/// Build cover links against `covers_url` instead of Open Library's.
	#[must_use]
	pub fn with_covers_url(mut self, covers_url: impl Into<String>) -> Self {
		self.covers_url = covers_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Pre-fill the query field and search for it as soon as the UI starts.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input = QueryInput::new(query.clone(), self.ui.placeholder.clone());
		self.search_input.apply_theme(&self.theme);
		self.pending_query = Some(query);
		self
	}

	/// The controller driving the searches.
	#[must_use]
	pub fn controller(&self) -> &SearchController {
		&self.search
	}

	/// Current contents of the query field.
	#[must_use]
	pub fn query_text(&self) -> &str {
		self.search_input.text()
	}

	/// Which part of the screen has focus.
	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Active colour scheme.
	#[must_use]
	pub fn theme_kind(&self) -> ThemeKind {
		self.theme_kind
	}

	/// Switch to `kind`, restyling the query field.
	pub fn set_theme(&mut self, kind: ThemeKind) {
		self.theme_kind = kind;
		self.theme = kind.theme();
		self.search_input.apply_theme(&self.theme);
	}

	pub(crate) fn toggle_theme(&mut self) {
		self.set_theme(self.theme_kind.toggled());
		debug!(theme = %self.theme_kind, "theme toggled");
	}

	/// Submit the query passed to [`App::with_initial_query`], once.
	pub(crate) fn start(&mut self) {
		if let Some(query) = self.pending_query.take() {
			self.submit_query_text(&query);
		}
	}

	/// Search for whatever is in the query field.
	pub(crate) fn submit_query(&mut self) {
		let query = self.search_input.text().to_string();
		self.submit_query_text(&query);
	}

	fn submit_query_text(&mut self, query: &str) {
		if let Submission::Issued(_) = self.search.submit(query) {
			self.grid.reset();
			self.focus = Focus::Query;
		}
	}

	/// Clear the field, results, selection, and any pending search.
	pub(crate) fn clear(&mut self) {
		self.search.clear();
		self.search_input.clear();
		self.grid.reset();
		self.focus = Focus::Query;
		self.pending_query = None;
	}

	/// Apply arrived search replies. Returns whether anything changed.
	pub(crate) fn pump_search(&mut self) -> bool {
		let changed = self.search.pump();
		if changed {
			self.sync_with_search();
		}
		changed
	}

	/// Bring grid and focus in line with the controller's state.
	pub(crate) fn sync_with_search(&mut self) {
		let len = self.search.results().len();
		self.grid.ensure_selection(len);
		if len == 0 {
			self.focus = Focus::Query;
		}
	}

	/// Focus the grid, if it has any cards.
	pub(crate) fn focus_results(&mut self) {
		let len = self.search.results().len();
		if len > 0 {
			self.grid.ensure_selection(len);
			self.focus = Focus::Results;
		}
	}

	/// Open the detail overlay for the card at `index`.
	pub(crate) fn open_detail(&mut self, index: usize) -> bool {
		let len = self.search.results().len();
		if !self.search.select_item(index) {
			return false;
		}
		self.grid.select(index, len);
		self.focus = Focus::Results;
		true
	}

	pub(crate) fn outcome(&self, accepted: bool) -> BrowseOutcome {
		let chosen = self
			.search
			.selected_index()
			.zip(self.search.selection())
			.filter(|_| accepted);
		BrowseOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			selection: chosen.map(|(_, book)| book.clone()),
			selection_key: chosen.map(|(index, book)| book.list_key(index)),
		}
	}
}
