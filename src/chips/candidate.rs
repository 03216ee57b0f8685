//! Selectable entries and the immutable list they are drawn from.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selectable entry offered by the autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
	pub id: u64,
	pub label: String,
	#[serde(rename = "image", alias = "image_ref")]
	pub image_ref: String,
}

impl Candidate {
	#[must_use]
	pub fn new(id: u64, label: impl Into<String>, image_ref: impl Into<String>) -> Self {
		Self {
			id,
			label: label.into(),
			image_ref: image_ref.into(),
		}
	}

	/// Case-insensitive substring test against the label.
	///
	/// `needle` must already be lowercased.
	pub(crate) fn label_contains(&self, needle: &str) -> bool {
		needle.is_empty() || self.label.to_lowercase().contains(needle)
	}
}

/// Problems detected while assembling a [`CandidateSource`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
	#[error("candidate id {0} appears more than once")]
	DuplicateId(u64),
	#[error("candidate {0} has an empty label")]
	EmptyLabel(u64),
}

/// The fixed list of candidates a chip input searches.
///
/// Cloning is cheap; the entries are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSource {
	entries: Arc<[Candidate]>,
}

impl CandidateSource {
	/// Validate and wrap a list of candidates, preserving their order.
	pub fn new(entries: Vec<Candidate>) -> Result<Self, SourceError> {
		let mut seen = HashSet::with_capacity(entries.len());
		for candidate in &entries {
			if candidate.label.trim().is_empty() {
				return Err(SourceError::EmptyLabel(candidate.id));
			}
			if !seen.insert(candidate.id) {
				return Err(SourceError::DuplicateId(candidate.id));
			}
		}
		Ok(Self {
			entries: entries.into(),
		})
	}

	/// The five people the widget ships with when nothing else is configured.
	#[must_use]
	pub fn sample() -> Self {
		const IMAGE: &str = "/images/download.png";
		let entries = vec![
			Candidate::new(1, "Nick Giannopoulos", IMAGE),
			Candidate::new(2, "John Doe", IMAGE),
			Candidate::new(3, "Jane Doe", IMAGE),
			Candidate::new(4, "Alice", IMAGE),
			Candidate::new(5, "Bob", IMAGE),
		];
		Self {
			entries: entries.into(),
		}
	}

	#[must_use]
	pub fn entries(&self) -> &[Candidate] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
		self.entries.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for CandidateSource {
	fn default() -> Self {
		Self::sample()
	}
}

impl<'a> IntoIterator for &'a CandidateSource {
	type Item = &'a Candidate;
	type IntoIter = std::slice::Iter<'a, Candidate>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
