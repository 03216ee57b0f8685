//! Colour schemes for the chip input.

mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
