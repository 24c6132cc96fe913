mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use tracing::{debug, info};
use workflow::BookWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	let log_path = logging::initialize(&resolved.log_filter, cli.batch)?;
	info!(version = env!("CARGO_PKG_VERSION"), batch = cli.batch, "booksy starting");
	if let Some(path) = &log_path {
		debug!(path = %path.display(), "logging to file");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = BookWorkflow::from_config(resolved)?;
	if cli.batch {
		workflow.run_batch(cli.output)
	} else {
		workflow.run_interactive(cli.output)
	}
}
