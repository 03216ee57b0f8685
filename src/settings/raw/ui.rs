use chipin::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::UiResolution;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct UiSection {
	pub(in crate::settings) placeholder: Option<String>,
	pub(in crate::settings) initial_query: Option<String>,
	pub(in crate::settings) theme: Option<String>,
	pub(in crate::settings) list_title: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.list_title.clone() {
			self.list_title = Some(title);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(placeholder) = self.placeholder {
			labels = labels.with_placeholder(placeholder);
		}
		if let Some(title) = self.list_title.filter(|title| !title.trim().is_empty()) {
			labels = labels.with_list_title(title);
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme_name: self.theme,
		}
	}
}
