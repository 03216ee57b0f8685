use chipin::tui::theme;
use chipin::{Candidate, CandidateSource, Theme};

use super::{ConfigError, ConfigSources};

pub(super) fn resolve_theme(name: Option<&str>, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	let Some(name) = name else {
		return Ok(theme::default_theme());
	};

	theme::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {}", theme::names().join(", ")),
		)
	})
}

pub(super) fn build_source(
	candidates: Vec<Candidate>,
	sources: &ConfigSources,
) -> Result<CandidateSource, ConfigError> {
	let count = candidates.len();
	CandidateSource::new(candidates).map_err(|err| {
		ConfigError::invalid(
			"candidates",
			format!("{count} entries"),
			sources.source_for_candidates(),
			err.to_string(),
		)
	})
}
