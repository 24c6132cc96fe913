//! Catalog access and search state for `booksy`.
//!
//! [`catalog`] talks to the Open Library search API and models the entries it
//! returns. [`search`] wraps a background worker around a [`Catalog`] and
//! exposes [`SearchController`], the single owner of query text, search
//! state, and the currently selected result.

pub mod catalog;
pub mod search;

pub use catalog::{
	Catalog, CatalogEndpoints, CatalogError, CoverSize, DEFAULT_BASE_URL, DEFAULT_COVERS_URL,
	OpenLibrary, ResultKey, SEARCH_LIMIT, SearchResult,
};
pub use search::{SearchController, SearchState, Submission};
