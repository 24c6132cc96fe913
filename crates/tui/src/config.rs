/// Text rendered around the search form, results, and overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Application title shown in the header.
	pub title: String,
	/// Tagline shown beneath the title.
	pub tagline: String,
	/// Placeholder shown in the empty search input.
	pub placeholder: String,
	/// Hint shown before the first search.
	pub idle_hint: String,
	/// Text shown next to the spinner while a search runs.
	pub loading: String,
	/// Heading of the "no matches" alert.
	pub empty_title: String,
	/// Body of the "no matches" alert.
	pub empty_body: String,
	/// Label of the button that dismisses the alert.
	pub empty_button: String,
	/// Title of the detail overlay.
	pub detail_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Booksy-Book Finder".to_string(),
			tagline: "Search it. Learn.it Evolve.it".to_string(),
			placeholder: "Enter book title...".to_string(),
			idle_hint: "Try searching for a book above.".to_string(),
			loading: "Loading...".to_string(),
			empty_title: "Book Not Found!".to_string(),
			empty_body: "Please check the spelling or try a different title.".to_string(),
			empty_button: "Okay".to_string(),
			detail_title: "Book details".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the header title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
