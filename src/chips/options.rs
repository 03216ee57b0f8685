use serde::{Deserialize, Serialize};

use super::ChipIdPolicy;

/// What a pointer click into the text field does to the suggestion list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusClickPolicy {
	/// Show the whole source, ignoring the query and the chips already taken.
	#[default]
	ShowAll,
	/// Re-run the normal filter for the current query and chips.
	Refilter,
}

impl FocusClickPolicy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ShowAll => "show-all",
			Self::Refilter => "refilter",
		}
	}
}

/// Behavioural switches for a [`ChipInput`](super::ChipInput).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChipInputOptions {
	pub id_policy: ChipIdPolicy,
	pub focus_click: FocusClickPolicy,
}

impl ChipInputOptions {
	/// Options reproducing the legacy widget: length-derived ids and the
	/// show-everything focus click.
	#[must_use]
	pub fn legacy() -> Self {
		Self {
			id_policy: ChipIdPolicy::LengthBased,
			focus_click: FocusClickPolicy::ShowAll,
		}
	}
}
