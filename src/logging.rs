//! Tracing setup.
//!
//! Events go to `<data dir>/booksy.log` so they never draw over the terminal
//! UI. Batch runs additionally echo them to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

const LOG_ENV: &str = "BOOKSY_LOG";
const LOG_FILE: &str = "booksy.log";

/// Install the global subscriber. `BOOKSY_LOG` wins over `default_filter`.
///
/// Returns the log file path, or `None` when the data directory could not be
/// prepared and only stderr (if requested) receives events.
pub(crate) fn initialize(default_filter: &str, to_stderr: bool) -> Result<Option<PathBuf>> {
	let filter = build_filter(default_filter)?;

	let (log_path, file_layer) = match open_log_file() {
		Some((path, file)) => {
			let layer = fmt::layer()
				.with_ansi(false)
				.with_target(true)
				.with_writer(Mutex::new(file));
			(Some(path), Some(layer))
		}
		None => (None, None),
	};
	let stderr_layer = to_stderr.then(|| fmt::layer().with_target(false).with_writer(io::stderr));

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.with(stderr_layer)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(log_path)
}

fn build_filter(default_filter: &str) -> Result<EnvFilter> {
	match EnvFilter::try_from_env(LOG_ENV) {
		Ok(filter) => Ok(filter),
		Err(_) => EnvFilter::builder()
			.parse(default_filter)
			.with_context(|| format!("invalid log filter '{default_filter}'")),
	}
}

fn open_log_file() -> Option<(PathBuf, fs::File)> {
	let dir = app_dirs::get_data_dir().ok()?;
	fs::create_dir_all(&dir).ok()?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.ok()?;
	Some((path, file))
}
