//! Core state container for the terminal front-end.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::chips::ChipInput;
use crate::tui::components::RemoveTarget;
use crate::tui::config::UiLabels;
use crate::tui::input::{QueryInput, single_line};
use crate::tui::outcome::ChipOutcome;
use crate::tui::theme::Theme;

/// Screen regions recorded during the last draw, used for pointer hit tests.
#[derive(Debug, Default, Clone)]
pub(crate) struct HitAreas {
	pub prompt: Option<Rect>,
	pub list: Option<Rect>,
	pub remove_targets: Vec<RemoveTarget>,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the [`ChipInput`] model together with the text field
/// widget that edits its query.
pub struct App<'a> {
	/// Interaction model: chips, query, highlight and suggestions.
	pub chip_input: ChipInput,
	/// Text field mirroring the model's query.
	pub query_input: QueryInput<'a>,
	/// Current colour scheme.
	pub theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) table_state: TableState,
	pub(crate) hits: HitAreas,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(chip_input: ChipInput) -> Self {
		let query_input = QueryInput::new(chip_input.query());
		Self {
			chip_input,
			query_input,
			theme: Theme::default(),
			labels: UiLabels::default(),
			table_state: TableState::default(),
			hits: HitAreas::default(),
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Start with `query` typed into the field. Line breaks become spaces.
	#[must_use]
	pub fn with_query(mut self, query: &str) -> Self {
		self.chip_input.set_query(single_line(query).into_owned());
		self.sync_query_field();
		self
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.labels
	}

	/// Snapshot the session result.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> ChipOutcome {
		ChipOutcome {
			accepted,
			query: self.chip_input.query().to_string(),
			chips: self.chip_input.chips().as_slice().to_vec(),
		}
	}

	/// Push the text field's contents into the model after an edit.
	pub(crate) fn apply_field_edit(&mut self) {
		let text = self.query_input.text().to_string();
		self.chip_input.set_query(text);
	}

	/// Make the text field show the model's query, e.g. after a selection
	/// cleared it.
	pub(crate) fn sync_query_field(&mut self) {
		if self.query_input.text() != self.chip_input.query() {
			self.query_input.set_text(self.chip_input.query());
		}
	}
}
