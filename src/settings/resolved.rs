use std::time::Duration;

use booksy_core::CatalogEndpoints;
use booksy_tui::{ThemeKind, UiLabels};

/// Log filter used when neither `BOOKSY_LOG` nor a configured level is set.
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

/// Application-ready configuration derived from flags, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) endpoints: CatalogEndpoints,
	pub(crate) timeout: Option<Duration>,
	pub(crate) theme: ThemeKind,
	pub(crate) labels: UiLabels,
	pub(crate) initial_query: String,
	pub(crate) log_filter: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		for line in self.summary_lines() {
			println!("{line}");
		}
	}

	fn summary_lines(&self) -> Vec<String> {
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Search API: {}", self.endpoints.base_url),
			format!("  Covers: {}", self.endpoints.covers_url),
		];
		match self.timeout {
			Some(timeout) => lines.push(format!("  Timeout: {}s", timeout.as_secs())),
			None => lines.push("  Timeout: none".to_string()),
		}
		lines.push(format!("  Theme: {}", self.theme));
		lines.push(format!("  Title: {}", self.labels.title));
		if !self.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.initial_query));
		}
		lines.push(format!("  Log filter: {}", self.log_filter));
		lines
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			endpoints: CatalogEndpoints::default(),
			timeout: None,
			theme: ThemeKind::Dark,
			labels: UiLabels::default(),
			initial_query: "dune".into(),
			log_filter: DEFAULT_LOG_FILTER.into(),
		};

		let lines = config.summary_lines();
		assert!(lines.contains(&"  Search API: https://openlibrary.org".to_string()));
		assert!(lines.contains(&"  Timeout: none".to_string()));
		assert!(lines.contains(&"  Theme: dark".to_string()));
		assert!(lines.contains(&"  Initial query: dune".to_string()));
	}
}
