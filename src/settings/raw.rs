use std::time::Duration;

use booksy_core::{CatalogEndpoints, DEFAULT_BASE_URL, DEFAULT_COVERS_URL};
use booksy_tui::{ThemeKind, UiLabels};
use serde::Deserialize;

use super::error::SettingsError;
use super::resolved::{DEFAULT_LOG_FILTER, ResolvedConfig};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	base_url: Option<String>,
	covers_url: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	theme: Option<String>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.catalog.base_url = Some(url);
		}
		if let Some(url) = cli.covers_url.clone() {
			self.catalog.covers_url = Some(url);
		}
		if let Some(secs) = cli.timeout_secs {
			self.catalog.timeout_secs = Some(secs);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme {
			self.ui.theme = Some(theme.as_str().to_string());
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
		let endpoints = CatalogEndpoints {
			base_url: resolve_url("catalog.base_url", self.catalog.base_url, DEFAULT_BASE_URL)?,
			covers_url: resolve_url(
				"catalog.covers_url",
				self.catalog.covers_url,
				DEFAULT_COVERS_URL,
			)?,
		};

		let timeout = match self.catalog.timeout_secs {
			Some(0) => return Err(SettingsError::ZeroTimeout),
			Some(secs) => Some(Duration::from_secs(secs)),
			None => None,
		};

		let theme = match self.ui.theme {
			Some(name) => {
				ThemeKind::from_name(&name).ok_or_else(|| SettingsError::UnknownTheme(name))?
			}
			None => ThemeKind::default(),
		};

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title.filter(|title| !title.trim().is_empty()) {
			labels = labels.with_title(title);
		}

		let log_filter = self
			.logging
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

		Ok(ResolvedConfig {
			endpoints,
			timeout,
			theme,
			labels,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			log_filter,
		})
	}
}

/// Trim trailing slashes and require an http(s) scheme.
fn resolve_url(
	key: &'static str,
	value: Option<String>,
	default: &str,
) -> Result<String, SettingsError> {
	let Some(value) = value else {
		return Ok(default.to_string());
	};
	let trimmed = value.trim().trim_end_matches('/');
	if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
		Ok(trimmed.to_string())
	} else {
		Err(SettingsError::InvalidUrl { key, value })
	}
}
