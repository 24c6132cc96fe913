//! Search coordination.
//!
//! [`SearchController`] owns the tagged [`SearchState`] and hands queries to a
//! background worker (see [`runtime`]). Every query carries a sequence number
//! so that only the newest reply can change what the user sees.

mod controller;
pub mod runtime;
mod state;

pub use controller::{SearchController, Submission};
pub use state::SearchState;

/// Trim a raw query, returning `None` when nothing is left to search for.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<&str> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then_some(trimmed)
}
