use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

use super::CatalogError;

/// Number of subjects shown for a single entry.
pub const SUBJECT_DISPLAY_LIMIT: usize = 5;

/// One catalog entry as returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
	/// Catalog identifier such as `/works/OL45804W`.
	#[serde(default)]
	pub key: Option<String>,
	/// Title shown on cards and in the detail view.
	#[serde(default, deserialize_with = "nullable_string")]
	pub title: String,
	/// Author names in catalog order.
	#[serde(default, rename = "author_name")]
	pub authors: Option<Vec<String>>,
	/// Year the work was first published.
	#[serde(default)]
	pub first_publish_year: Option<i64>,
	/// Identifier of the cover image on the covers service.
	#[serde(default, rename = "cover_i")]
	pub cover_id: Option<i64>,
	/// Subject headings in catalog order.
	#[serde(default, rename = "subject")]
	pub subjects: Option<Vec<String>>,
}

/// Stable key for a result within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultKey {
	/// The catalog supplied an identifier.
	Key(String),
	/// No identifier; the entry's position in the list.
	Index(usize),
}

impl fmt::Display for ResultKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => f.write_str(key),
			Self::Index(index) => write!(f, "#{index}"),
		}
	}
}

/// Cover image size variants served by the covers service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
	/// Thumbnail used on grid cards.
	Medium,
	/// Full image used in the detail view.
	Large,
}

impl CoverSize {
	/// Size suffix used in cover URLs.
	#[must_use]
	pub fn suffix(self) -> &'static str {
		match self {
			Self::Medium => "M",
			Self::Large => "L",
		}
	}
}

impl SearchResult {
	/// Construct an entry with only a title, mostly useful in tests.
	#[must_use]
	pub fn titled(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}

	/// Key used to identify this entry at `index` in its result list.
	#[must_use]
	pub fn list_key(&self, index: usize) -> ResultKey {
		match self.key.as_deref() {
			Some(key) if !key.is_empty() => ResultKey::Key(key.to_string()),
			_ => ResultKey::Index(index),
		}
	}

	/// Authors joined with `", "`, or `None` when the catalog gave none.
	#[must_use]
	pub fn author_line(&self) -> Option<String> {
		self.authors.as_ref().map(|authors| authors.join(", "))
	}

	/// First publication year, or `"N/A"`.
	#[must_use]
	pub fn year_label(&self) -> Cow<'static, str> {
		match self.first_publish_year {
			Some(year) => Cow::Owned(year.to_string()),
			None => Cow::Borrowed("N/A"),
		}
	}

	/// The first few subjects joined with `", "`, or `None` when absent.
	#[must_use]
	pub fn subject_line(&self) -> Option<String> {
		self.subjects.as_ref().map(|subjects| {
			subjects
				.iter()
				.take(SUBJECT_DISPLAY_LIMIT)
				.map(String::as_str)
				.collect::<Vec<_>>()
				.join(", ")
		})
	}

	/// Cover image URL on `covers_base`, when the entry has a cover.
	#[must_use]
	pub fn cover_url(&self, covers_base: &str, size: CoverSize) -> Option<String> {
		let id = self.cover_id?;
		let base = covers_base.trim_end_matches('/');
		Some(format!("{base}/b/id/{id}-{}.jpg", size.suffix()))
	}
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default)]
	docs: Option<Vec<SearchResult>>,
}

/// Parse a search response body. A missing `docs` field yields no results.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, CatalogError> {
	let response: SearchResponse = serde_json::from_str(body)?;
	Ok(response.docs.unwrap_or_default())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
