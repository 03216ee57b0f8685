use chipin::{ChipIdPolicy, FocusClickPolicy};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Interaction switches prior to defaulting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct BehaviorSection {
	pub(in crate::settings) id_policy: Option<ChipIdPolicy>,
	pub(in crate::settings) focus_click: Option<FocusClickPolicy>,
}

impl BehaviorSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.legacy_ids {
			self.id_policy = Some(ChipIdPolicy::LengthBased);
		}
		if let Some(policy) = cli.focus_click {
			self.focus_click = Some(policy.into());
		}
	}
}
