use chipin::logging::{self, LOG_ENV};
use chipin::{app_dirs, tui::theme};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

fn describe(path: anyhow::Result<std::path::PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Version banner listing where chipin reads and writes its files.
fn version_details(config_file: &str, log_file: &str) -> String {
	format!(
		"chipin {version}\n\
		 config file: {config_file} (override dir with CHIPIN_CONFIG_DIR)\n\
		 log file: {log_file} (filter with {LOG_ENV})\n\
		 themes: {themes}\n",
		version = env!("CARGO_PKG_VERSION"),
		themes = theme::names().join(", "),
	)
}

/// Produce the `--version` banner. Leaked once so clap can hold a `&'static str`.
pub(super) fn long_version() -> &'static str {
	let config_file = describe(app_dirs::get_config_dir().map(|dir| dir.join("config.toml")));
	let log_file = describe(logging::log_path());
	Box::leak(version_details(&config_file, &log_file).into_boxed_str())
}

/// Help colours following the default `slate` theme's cyan prompt.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightCyan.on_default())
		.placeholder(AnsiColor::Magenta.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
