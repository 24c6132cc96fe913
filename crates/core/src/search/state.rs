use crate::catalog::SearchResult;

/// Where the most recent search stands. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
	/// Nothing has been searched yet, or the view was reset.
	#[default]
	Idle,
	/// A request is in flight.
	Loading,
	/// The catalog returned at least one entry.
	Success(Vec<SearchResult>),
	/// The catalog answered but matched nothing.
	Empty,
	/// The request failed; the message is shown inline.
	Error(String),
}

impl SearchState {
	/// Whether a request is in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// Whether the last search matched nothing.
	#[must_use]
	pub fn is_empty_result(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Results of a successful search; empty in every other state.
	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		match self {
			Self::Success(results) => results,
			_ => &[],
		}
	}

	/// Error message, present only in the error state.
	#[must_use]
	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Error(message) => Some(message),
			_ => None,
		}
	}

	/// Short lowercase name of the active variant, used in logs and output.
	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading => "loading",
			Self::Success(_) => "success",
			Self::Empty => "empty",
			Self::Error(_) => "error",
		}
	}
}
