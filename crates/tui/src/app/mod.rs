//! Application state and behavior for the interactive book finder.
//!
//! The [`App`] type ties the search controller to the widgets. Supporting
//! modules split the implementation into input handling and rendering.

mod actions;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub use state::{App, BrowseOutcome, Focus};
