use booksy_core::{Catalog, CatalogError, ResultKey, SearchController, SearchResult};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};

use super::{App, Focus};
use crate::style::ThemeKind;

/// Answers every query with a fixed list, or nothing for "nothing".
struct ShelfCatalog;

impl Catalog for ShelfCatalog {
	fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
		if query == "nothing" {
			return Ok(Vec::new());
		}
		Ok(vec![
			SearchResult {
				key: Some("/works/OL1W".into()),
				title: "Dune".into(),
				authors: Some(vec!["Frank Herbert".into()]),
				first_publish_year: Some(1965),
				cover_id: Some(42),
				subjects: Some(vec!["Science fiction".into(), "Deserts".into()]),
			},
			SearchResult::titled("Dune Messiah"),
		])
	}
}

struct DownCatalog;

impl Catalog for DownCatalog {
	fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
		Err(CatalogError::Status(503))
	}
}

fn app() -> App<'static> {
	App::new(SearchController::with_catalog(ShelfCatalog))
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent {
		code,
		modifiers: KeyModifiers::NONE,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent {
		modifiers: KeyModifiers::CONTROL,
		..key(KeyCode::Char(ch))
	}
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch))).expect("key");
	}
}

fn settle(app: &mut App<'_>) {
	app.search.settle();
	app.sync_with_search();
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 36)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

fn search(app: &mut App<'_>, query: &str) {
	type_text(app, query);
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	settle(app);
}

#[test]
fn idle_screen_shows_header_and_hint() {
	let mut app = app();
	let screen = render(&mut app);
	assert!(screen.contains("Booksy-Book Finder"));
	assert!(screen.contains("Search it. Learn.it Evolve.it"));
	assert!(screen.contains("Enter book title..."));
	assert!(screen.contains("Try searching for a book above."));
}

#[test]
fn loading_is_shown_until_the_reply_is_applied() {
	let mut app = app();
	type_text(&mut app, "dune");
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert!(app.controller().is_loading());
	assert!(render(&mut app).contains("Loading..."));

	settle(&mut app);
	let screen = render(&mut app);
	assert!(!screen.contains("Loading..."));
	assert!(screen.contains("2 results for \"dune\""));
	assert!(screen.contains("Frank Herbert"));
	assert!(screen.contains("Unknown Author"));
}

#[test]
fn blank_submit_changes_nothing() {
	let mut app = app();
	type_text(&mut app, "   ");
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert!(!app.controller().is_loading());
	assert!(render(&mut app).contains("Try searching for a book above."));
}

#[test]
fn failed_search_shows_the_error() {
	let mut app = App::new(SearchController::with_catalog(DownCatalog));
	search(&mut app, "dune");
	assert!(render(&mut app).contains("Network error"));
}

#[test]
fn empty_result_alert_is_dismissed_with_enter() {
	let mut app = app();
	search(&mut app, "nothing");
	let screen = render(&mut app);
	assert!(screen.contains("Book Not Found!"));
	assert!(screen.contains("Please check the spelling or try a different title."));
	assert!(screen.contains("Okay"));

	// Typing is swallowed by the alert.
	type_text(&mut app, "x");
	assert_eq!(app.query_text(), "nothing");

	app.handle_key(key(KeyCode::Enter)).expect("enter");
	let screen = render(&mut app);
	assert!(!screen.contains("Book Not Found!"));
	assert!(screen.contains("Try searching for a book above."));
}

#[test]
fn empty_result_alert_ignores_clicks_on_its_card() {
	let mut app = app();
	search(&mut app, "nothing");
	render(&mut app);
	let alert = app.alert_area.expect("alert drawn");

	app.handle_mouse(click(alert.card.x + 1, alert.card.y + 1));
	assert!(app.controller().is_empty_result());
	assert!(render(&mut app).contains("Book Not Found!"));

	app.handle_mouse(click(alert.button.x, alert.button.y));
	assert!(!app.controller().is_empty_result());
	assert!(!render(&mut app).contains("Book Not Found!"));
	assert_eq!(app.alert_area, None);
}

#[test]
fn empty_result_alert_is_dismissed_by_a_backdrop_click() {
	let mut app = app();
	search(&mut app, "nothing");
	render(&mut app);
	app.handle_mouse(click(0, 0));
	assert!(!app.controller().is_empty_result());
}

#[test]
fn keyboard_opens_and_closes_detail() {
	let mut app = app();
	search(&mut app, "dune");

	app.handle_key(key(KeyCode::Tab)).expect("tab");
	assert_eq!(app.focus(), Focus::Results);
	app.handle_key(key(KeyCode::Right)).expect("right");
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert_eq!(app.controller().selected_index(), Some(1));

	let screen = render(&mut app);
	assert!(screen.contains("Book details"));
	assert!(screen.contains("Dune Messiah"));
	assert!(screen.contains("Author: Unknown"));
	assert!(screen.contains("First Published: N/A"));
	assert!(screen.contains("No Cover Available"));

	app.handle_key(key(KeyCode::Esc)).expect("esc");
	assert!(app.controller().selection().is_none());
	assert!(!render(&mut app).contains("Book details"));
}

#[test]
fn clicking_a_card_opens_its_detail() {
	let mut app = app();
	search(&mut app, "dune");
	render(&mut app);

	let card = app.grid.card_area(0).expect("first card drawn");
	app.handle_mouse(click(card.x + 2, card.y + 1));
	assert_eq!(app.controller().selected_index(), Some(0));

	let screen = render(&mut app);
	assert!(screen.contains("Author: Frank Herbert"));
	assert!(screen.contains("First Published: 1965"));
	assert!(screen.contains("https://covers.openlibrary.org/b/id/42-L.jpg"));
	assert!(screen.contains("Subjects: Science fiction, Deserts"));

	// A click outside the overlay closes it.
	app.handle_mouse(click(0, 0));
	assert!(app.controller().selection().is_none());
}

#[test]
fn enter_in_detail_accepts_the_book() {
	let mut app = app();
	search(&mut app, "dune");
	app.handle_key(key(KeyCode::Down)).expect("down");
	app.handle_key(key(KeyCode::Enter)).expect("open");
	let outcome = app
		.handle_key(key(KeyCode::Enter))
		.expect("accept")
		.expect("outcome");

	assert!(outcome.accepted);
	assert_eq!(outcome.query, "dune");
	assert_eq!(outcome.selection_key, Some(ResultKey::Key("/works/OL1W".into())));
	assert_eq!(
		outcome.selection.map(|book| book.title),
		Some("Dune".to_string())
	);
}

#[test]
fn accepted_book_without_a_catalog_key_is_keyed_by_position() {
	let mut app = app();
	search(&mut app, "dune");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	app.handle_key(key(KeyCode::Right)).expect("right");
	app.handle_key(key(KeyCode::Enter)).expect("open");
	let outcome = app
		.handle_key(key(KeyCode::Enter))
		.expect("accept")
		.expect("outcome");

	assert_eq!(outcome.selection_key, Some(ResultKey::Index(1)));
}

#[test]
fn escape_from_the_query_quits_without_a_selection() {
	let mut app = app();
	type_text(&mut app, "emma");
	let outcome = app
		.handle_key(key(KeyCode::Esc))
		.expect("esc")
		.expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "emma");
	assert_eq!(outcome.selection, None);
	assert_eq!(outcome.selection_key, None);
}

#[test]
fn ctrl_l_resets_everything() {
	let mut app = app();
	search(&mut app, "dune");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	app.handle_key(key(KeyCode::Enter)).expect("open");

	app.handle_key(ctrl('l')).expect("clear");
	assert_eq!(app.query_text(), "");
	assert_eq!(app.focus(), Focus::Query);
	assert!(app.controller().results().is_empty());
	assert!(app.controller().selection().is_none());
	assert!(render(&mut app).contains("Try searching for a book above."));
}

#[test]
fn new_search_closes_the_open_detail() {
	let mut app = app();
	search(&mut app, "dune");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	app.handle_key(key(KeyCode::Enter)).expect("open");
	assert!(app.controller().selection().is_some());

	app.submit_query();
	assert!(app.controller().selection().is_none());
	assert!(app.controller().is_loading());
}

#[test]
fn ctrl_t_toggles_the_theme() {
	let mut app = app().with_theme(ThemeKind::Dark);
	assert!(render(&mut app).contains("Ctrl+T light mode"));
	app.handle_key(ctrl('t')).expect("toggle");
	assert_eq!(app.theme_kind(), ThemeKind::Light);
	assert!(render(&mut app).contains("Ctrl+T dark mode"));
}

#[test]
fn initial_query_is_searched_on_start() {
	let mut app = app().with_initial_query("dune");
	assert_eq!(app.query_text(), "dune");
	app.start();
	settle(&mut app);
	assert_eq!(app.controller().results().len(), 2);

	// Only once.
	app.start();
	assert!(!app.controller().is_loading());
}
