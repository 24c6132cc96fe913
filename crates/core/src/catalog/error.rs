use thiserror::Error;

/// Message shown when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failures that can end a single catalog request.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog answered with a non-success HTTP status.
	#[error("Network error")]
	Status(u16),
	/// The request could not be sent or the body could not be read.
	#[error("{0}")]
	Transport(#[source] reqwest::Error),
	/// The body was not the JSON document we expected.
	#[error("{0}")]
	Decode(#[from] serde_json::Error),
	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	/// The background search worker has stopped.
	#[error("search worker is not running")]
	Disconnected,
	/// Free-form failure reported by a custom [`Catalog`](super::Catalog).
	#[error("{0}")]
	Message(String),
}

impl CatalogError {
	/// Text suitable for the inline error line in the UI.
	#[must_use]
	pub fn user_message(&self) -> String {
		let message = self.to_string();
		if message.trim().is_empty() {
			FALLBACK_MESSAGE.to_string()
		} else {
			message
		}
	}
}
