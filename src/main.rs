mod cli;
mod settings;

use anyhow::Result;
use chipin::{App, ChipInput, logging};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in chipin::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize(cli.log_level.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	run_chip_input(cli.output, resolved)
}

/// Run the interactive chip input and print the outcome in the chosen format.
fn run_chip_input(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let chip_input = ChipInput::new(settings.source, settings.options);
	let mut app = App::new(chip_input)
		.with_labels(settings.labels)
		.with_theme(settings.theme)
		.with_query(&settings.initial_query);
	let outcome = app.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
