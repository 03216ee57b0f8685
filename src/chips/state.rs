//! The chip input state machine.
//!
//! [`ChipInput`] owns the query, the keyboard highlight, the filtered
//! suggestions and the chips collected so far. Every mutating operation ends
//! by explicitly recomputing the suggestion list, so there is no implicit
//! ordering between effects.

use tracing::debug;

use super::{
	Candidate, CandidateSource, Chip, ChipCollection, ChipInputOptions, FocusClickPolicy,
	Highlight, recompute_filter,
};

/// Query text, highlight and the suggestions derived from them.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputState {
	query: String,
	highlight: Highlight,
	filtered: Vec<Candidate>,
}

/// Interaction state for a single chip input.
#[derive(Debug, Clone)]
pub struct ChipInput {
	source: CandidateSource,
	options: ChipInputOptions,
	chips: ChipCollection,
	input: InputState,
	focused: bool,
}

impl ChipInput {
	#[must_use]
	pub fn new(source: CandidateSource, options: ChipInputOptions) -> Self {
		let chips = ChipCollection::new(options.id_policy);
		let filtered = recompute_filter("", &chips, &source);
		Self {
			source,
			options,
			chips,
			input: InputState {
				filtered,
				..InputState::default()
			},
			focused: true,
		}
	}

	/// Replace the query text. Returns `false` when the text did not change.
	pub fn set_query(&mut self, query: impl Into<String>) -> bool {
		let query = query.into();
		if query == self.input.query {
			return false;
		}
		self.input.query = query;
		self.input.highlight.reset();
		self.refilter();
		debug!(
			query = %self.input.query,
			matches = self.input.filtered.len(),
			"query changed"
		);
		true
	}

	/// Turn `candidate` into a chip, clear the query and refocus the field.
	pub fn select(&mut self, candidate: &Candidate) -> &Chip {
		self.focused = true;
		self.input.query.clear();
		self.input.highlight.reset();

		let id = self.chips.push_from(candidate).id;
		debug!(chip = id, label = %candidate.label, "chip added");
		self.refilter();
		let last = self.chips.len() - 1;
		&self.chips.as_slice()[last]
	}

	/// Select the highlighted suggestion. Does nothing without a highlight.
	pub fn confirm(&mut self) -> Option<Chip> {
		let candidate = self.highlighted()?.clone();
		Some(self.select(&candidate).clone())
	}

	/// Select the suggestion at `index` in the filtered list.
	pub fn select_at(&mut self, index: usize) -> Option<Chip> {
		let candidate = self.input.filtered.get(index)?.clone();
		Some(self.select(&candidate).clone())
	}

	/// Remove the chip(s) carrying `id`. Returns whether anything was removed.
	pub fn remove_chip(&mut self, id: u64) -> bool {
		let removed = self.chips.remove_id(id);
		if removed == 0 {
			return false;
		}
		debug!(chip = id, removed, "chip removed");
		self.refilter();
		self.input.highlight.clamp(self.input.filtered.len());
		true
	}

	/// Backspace with an empty query removes the most recent chip.
	///
	/// Returns `false`, leaving chips untouched, when the query still has text
	/// for the field to delete or when there are no chips.
	pub fn backspace_on_empty(&mut self) -> bool {
		if !self.input.query.is_empty() {
			return false;
		}
		match self.chips.last() {
			Some(last) => {
				let id = last.id;
				self.remove_chip(id)
			}
			None => false,
		}
	}

	pub fn highlight_next(&mut self) -> bool {
		self.input.highlight.move_down(self.input.filtered.len())
	}

	pub fn highlight_previous(&mut self) -> bool {
		self.input.highlight.move_up()
	}

	/// Pointer click into the text field.
	pub fn focus_click(&mut self) {
		self.focused = true;
		self.input.filtered = match self.options.focus_click {
			FocusClickPolicy::ShowAll => self.source.entries().to_vec(),
			FocusClickPolicy::Refilter => {
				recompute_filter(&self.input.query, &self.chips, &self.source)
			}
		};
		self.input.highlight.clamp(self.input.filtered.len());
		debug!(
			policy = self.options.focus_click.as_str(),
			matches = self.input.filtered.len(),
			"focus click"
		);
	}

	pub fn focus(&mut self) {
		self.focused = true;
	}

	pub fn blur(&mut self) {
		self.focused = false;
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.input.query
	}

	#[must_use]
	pub fn highlight(&self) -> Option<usize> {
		self.input.highlight.index()
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<&Candidate> {
		self.input.filtered.get(self.input.highlight.index()?)
	}

	#[must_use]
	pub fn filtered(&self) -> &[Candidate] {
		&self.input.filtered
	}

	#[must_use]
	pub fn chips(&self) -> &ChipCollection {
		&self.chips
	}

	#[must_use]
	pub fn source(&self) -> &CandidateSource {
		&self.source
	}

	#[must_use]
	pub fn options(&self) -> ChipInputOptions {
		self.options
	}

	fn refilter(&mut self) {
		self.input.filtered = recompute_filter(&self.input.query, &self.chips, &self.source);
	}
}

impl Default for ChipInput {
	fn default() -> Self {
		Self::new(CandidateSource::sample(), ChipInputOptions::default())
	}
}
