//! Open Library catalog access.
//!
//! The [`Catalog`] trait is the seam between the search worker and the
//! network: production code uses [`OpenLibrary`], tests plug in stubs.

mod error;
mod model;
mod openlibrary;

pub use error::{CatalogError, FALLBACK_MESSAGE};
pub use model::{CoverSize, ResultKey, SUBJECT_DISPLAY_LIMIT, SearchResult, parse_search_response};
pub use openlibrary::{CatalogEndpoints, DEFAULT_BASE_URL, DEFAULT_COVERS_URL, OpenLibrary};

/// Maximum number of entries requested from the catalog per search.
pub const SEARCH_LIMIT: usize = 20;

/// A searchable book catalog.
pub trait Catalog: Send + Sync {
	/// Search the catalog by title, returning at most `limit` entries.
	///
	/// An empty vector means the catalog answered but found nothing.
	fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, CatalogError>;
}
