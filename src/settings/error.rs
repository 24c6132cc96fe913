use thiserror::Error;

/// A configuration value that failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SettingsError {
	#[error("{key} must be an http(s) URL, got '{value}'")]
	InvalidUrl { key: &'static str, value: String },
	#[error("unknown theme '{0}' (expected light or dark)")]
	UnknownTheme(String),
	#[error("catalog.timeout_secs must be greater than zero")]
	ZeroTimeout,
}
