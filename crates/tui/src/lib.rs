//! Interactive terminal UI for `booksy`.
//!
//! [`App`] wraps a [`SearchController`](booksy_core::SearchController) with a
//! query input, a grid of result cards, and the detail and "not found"
//! overlays. [`run`] drives it with the crossterm event loop until the user
//! quits or picks a book.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, BrowseOutcome, Focus};
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::{Theme, ThemeKind};
