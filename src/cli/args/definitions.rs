use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `booksy` binary.
#[derive(Parser, Debug)]
#[command(
	name = "booksy",
	version,
	long_version = long_version(),
	about = "Search the Open Library catalog from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BOOKSY_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for this title on start (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_enum,
		value_name = "THEME",
		help = "Colour scheme (default: light)"
	)]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Header title (default: Booksy-Book Finder)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Search API host (default: https://openlibrary.org)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "covers-url",
		value_name = "URL",
		help = "Covers service host (default: https://covers.openlibrary.org)"
	)]
	pub(crate) covers_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECONDS",
		help = "Give up on a search after this many seconds (default: never)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long,
		help = "Run the query once without the interface and print the results (default: disabled)"
	)]
	pub(crate) batch: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter used when BOOKSY_LOG is unset (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}
