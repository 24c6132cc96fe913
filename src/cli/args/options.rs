use clap::ValueEnum;

/// Output formats supported by the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Colour schemes selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	/// Name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Light => "light",
			ThemeArg::Dark => "dark",
		}
	}
}
