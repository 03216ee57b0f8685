use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use chipin::{Candidate, CandidateSource, ChipInputOptions};
use serde::Deserialize;

use super::candidates::read_candidates_file;
use super::resolved::{CandidateOrigin, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod behavior;
mod ui;

use behavior::BehaviorSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) ui: UiSection,
	pub(super) behavior: BehaviorSection,
	pub(super) candidates: Option<Vec<Candidate>>,
	#[serde(skip)]
	candidates_file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	///
	/// Fails when `--candidates` names a file that cannot be read.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) -> Result<()> {
		self.ui.apply_cli_overrides(cli);
		self.behavior.apply_cli_overrides(cli);
		if let Some(path) = &cli.candidates {
			self.candidates = Some(read_candidates_file(path)?);
			self.candidates_file = Some(path.clone());
		}
		Ok(())
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CHIPIN__UI__THEME",
				"--theme",
				"ui.theme",
			),
			candidates: match (&self.candidates_file, &self.candidates) {
				(Some(_), _) => Some(SettingSource::CliFlag("--candidates")),
				(None, Some(_)) => Some(SettingSource::ConfigKey("candidates")),
				(None, None) => None,
			},
		};

		let origin = match (self.candidates_file, &self.candidates) {
			(Some(path), _) => CandidateOrigin::File(path),
			(None, Some(_)) => CandidateOrigin::Config,
			(None, None) => CandidateOrigin::Sample,
		};

		let options = ChipInputOptions {
			id_policy: self.behavior.id_policy.unwrap_or_default(),
			focus_click: self.behavior.focus_click.unwrap_or_default(),
		};
		let ui = self.ui.finalize();

		let config = ResolvedConfig::validated(
			ui,
			options,
			self.candidates.unwrap_or_else(|| CandidateSource::sample().entries().to_vec()),
			origin,
			&sources,
		)
		.map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
