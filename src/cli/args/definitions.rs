use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FocusClickArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `chipin` binary.
#[derive(Parser, Debug)]
#[command(
	name = "chipin",
	version,
	long_version = long_version(),
	about = "Pick entries from a list and collect them as chips",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CHIPIN_CONFIG",
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
		long,
		value_name = "FILE",
		help = "TOML or JSON file listing the candidates (default: config or built-in sample)"
	)]
	pub(crate) candidates: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Start with this text in the field (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown in the empty field (default: \"Type here...\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "list-title",
		value_name = "TEXT",
		help = "Title of the suggestion list (default: \"Suggestions\")"
	)]
	pub(crate) list_title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "legacy-ids",
		help = "Number chips by collection length instead of a counter (default: disabled)"
	)]
	pub(crate) legacy_ids: bool,
	#[arg(
		long = "focus-click",
		value_enum,
		help = "What clicking into the field does to the list (default: show-all)"
	)]
	pub(crate) focus_click: Option<FocusClickArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Tracing filter for the log file (default: $CHIPIN_LOG or chipin=info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
