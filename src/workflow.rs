use anyhow::{Context, Result, bail};
use booksy_core::{OpenLibrary, SearchController, SearchState, Submission};
use booksy_tui::App;
use tracing::info;

use crate::cli::{OutputFormat, print_batch, print_outcome};
use crate::settings::ResolvedConfig;

/// Coordinates building and running a search session.
pub(crate) struct BookWorkflow {
	config: ResolvedConfig,
	catalog: OpenLibrary,
}

impl BookWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = OpenLibrary::new(config.endpoints.clone(), config.timeout)
			.context("failed to build the catalog client")?;
		Ok(Self { config, catalog })
	}

	/// Run the terminal UI and print how it ended.
	pub(crate) fn run_interactive(self, format: OutputFormat) -> Result<()> {
		let covers_url = self.config.endpoints.covers_url.clone();
		let app = AppFactory::build(self.config, self.catalog);
		let outcome = booksy_tui::run(app)?;
		print_outcome(format, &outcome, &covers_url)
	}

	/// Search once for the configured query and print the settled state.
	pub(crate) fn run_batch(self, format: OutputFormat) -> Result<()> {
		let mut controller = SearchController::with_catalog(self.catalog);
		if let Submission::Rejected = controller.submit(&self.config.initial_query) {
			bail!("batch mode needs a non-empty query (--query or ui.initial_query)");
		}
		controller.settle();
		info!(state = controller.state().label(), "batch search settled");

		print_batch(
			format,
			controller.query(),
			controller.state(),
			&self.config.endpoints.covers_url,
		)?;
		if let SearchState::Error(message) = controller.state() {
			bail!("search failed: {message}");
		}
		Ok(())
	}
}

/// Translates resolved configuration into a configured [`App`].
struct AppFactory;

impl AppFactory {
	fn build(config: ResolvedConfig, catalog: OpenLibrary) -> App<'static> {
		let ResolvedConfig {
			endpoints,
			theme,
			labels,
			initial_query,
			..
		} = config;

		let app = App::new(SearchController::with_catalog(catalog))
			.with_labels(labels)
			.with_theme(theme)
			.with_covers_url(endpoints.covers_url);
		if initial_query.trim().is_empty() {
			app
		} else {
			app.with_initial_query(initial_query)
		}
	}
}
