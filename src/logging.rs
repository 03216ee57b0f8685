//! Tracing setup.
//!
//! The UI owns the terminal, so log lines go to a file in the cache
//! directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable consulted for the filter directive.
pub const LOG_ENV: &str = "CHIPIN_LOG";
const LOG_FILE: &str = "chipin.log";
const DEFAULT_FILTER: &str = "chipin=info";

/// Build the filter from `override_level`, then [`LOG_ENV`], then the default.
///
/// Fails when the chosen directive does not parse.
pub fn env_filter(override_level: Option<&str>) -> Result<EnvFilter> {
	let directive = override_level
		.map(str::to_owned)
		.or_else(|| std::env::var(LOG_ENV).ok())
		.unwrap_or_else(|| DEFAULT_FILTER.to_owned());
	EnvFilter::try_new(&directive)
		.with_context(|| format!("invalid log filter directive `{directive}`"))
}

/// Path of the log file inside the cache directory.
pub fn log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE))
}

fn open_log(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the file path in use. Callers treat errors as non-fatal.
pub fn initialize(level: Option<&str>) -> Result<PathBuf> {
	let filter = env_filter(level)?;
	let path = log_path()?;
	let file = open_log(&path)?;
	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_writer(Mutex::new(file)),
		)
		.try_init()
		.context("a global tracing subscriber is already installed")?;
	Ok(path)
}
