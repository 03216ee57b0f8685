use std::fmt;
use std::path::PathBuf;

use chipin::{Candidate, CandidateSource, ChipInputOptions, Theme, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the candidate list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
	/// The built-in sample people.
	Sample,
	/// `[[candidates]]` tables in a configuration file.
	Config,
	/// A file passed with `--candidates`.
	File(PathBuf),
}

impl fmt::Display for CandidateOrigin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Sample => f.write_str("built-in sample"),
			Self::Config => f.write_str("configuration"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// UI values with defaults filled in but not yet validated.
pub(in crate::settings) struct UiResolution {
	pub(in crate::settings) labels: UiLabels,
	pub(in crate::settings) initial_query: String,
	pub(in crate::settings) theme_name: Option<String>,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: CandidateSource,
	pub origin: CandidateOrigin,
	pub options: ChipInputOptions,
	pub labels: UiLabels,
	pub initial_query: String,
	pub theme: Theme,
	pub theme_name: Option<String>,
}

impl ResolvedConfig {
	/// Validate the merged values and build the final configuration.
	pub(super) fn validated(
		ui: UiResolution,
		options: ChipInputOptions,
		candidates: Vec<Candidate>,
		origin: CandidateOrigin,
		sources: &ConfigSources,
	) -> Result<Self, ConfigError> {
		let theme = validation::resolve_theme(ui.theme_name.as_deref(), sources)?;
		let source = validation::build_source(candidates, sources)?;

		Ok(Self {
			source,
			origin,
			options,
			labels: ui.labels,
			initial_query: ui.initial_query,
			theme,
			theme_name: ui.theme_name,
		})
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
