//! Selected tokens and the ordered collection that holds them.

use serde::{Deserialize, Serialize};

use super::Candidate;

/// A selected, removable token derived from a [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
	pub id: u64,
	pub label: String,
	#[serde(rename = "image")]
	pub image_ref: String,
}

/// How a freshly selected chip gets its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChipIdPolicy {
	/// Monotonic counter starting at 1. Ids are never reused.
	#[default]
	Sequential,
	/// `len + 1` at the time of selection. Ids can collide once an earlier
	/// chip has been removed.
	LengthBased,
}

impl ChipIdPolicy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sequential => "sequential",
			Self::LengthBased => "length-based",
		}
	}
}

/// Chips in selection order.
#[derive(Debug, Clone, Default)]
pub struct ChipCollection {
	chips: Vec<Chip>,
	policy: ChipIdPolicy,
	next_id: u64,
}

impl ChipCollection {
	#[must_use]
	pub fn new(policy: ChipIdPolicy) -> Self {
		Self {
			chips: Vec::new(),
			policy,
			next_id: 1,
		}
	}

	/// Append a chip copied from `candidate` and return it.
	pub fn push_from(&mut self, candidate: &Candidate) -> &Chip {
		let id = self.allocate_id();
		self.chips.push(Chip {
			id,
			label: candidate.label.clone(),
			image_ref: candidate.image_ref.clone(),
		});
		&self.chips[self.chips.len() - 1]
	}

	/// Drop every chip carrying `id`, returning how many were removed.
	pub fn remove_id(&mut self, id: u64) -> usize {
		let before = self.chips.len();
		self.chips.retain(|chip| chip.id != id);
		before - self.chips.len()
	}

	#[must_use]
	pub fn last(&self) -> Option<&Chip> {
		self.chips.last()
	}

	#[must_use]
	pub fn contains_label(&self, label: &str) -> bool {
		self.chips.iter().any(|chip| chip.label == label)
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Chip] {
		&self.chips
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Chip> {
		self.chips.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.chips.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.chips.is_empty()
	}

	#[must_use]
	pub fn policy(&self) -> ChipIdPolicy {
		self.policy
	}

	fn allocate_id(&mut self) -> u64 {
		match self.policy {
			ChipIdPolicy::Sequential => {
				let id = self.next_id.max(1);
				self.next_id = id + 1;
				id
			}
			ChipIdPolicy::LengthBased => self.chips.len() as u64 + 1,
		}
	}
}

impl<'a> IntoIterator for &'a ChipCollection {
	type Item = &'a Chip;
	type IntoIter = std::slice::Iter<'a, Chip>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn candidate(id: u64, label: &str) -> Candidate {
		Candidate::new(id, label, format!("/img/{id}.png"))
	}

	#[test]
	fn sequential_ids_survive_removal() {
		let mut chips = ChipCollection::new(ChipIdPolicy::Sequential);
		chips.push_from(&candidate(10, "Alice"));
		chips.push_from(&candidate(11, "Bob"));
		assert_eq!(chips.remove_id(1), 1);

		let id = chips.push_from(&candidate(12, "Carol")).id;
		assert_eq!(id, 3);
		let ids: Vec<_> = chips.iter().map(|c| c.id).collect();
		assert_eq!(ids, [2, 3]);
	}

	#[test]
	fn length_based_ids_can_collide() {
		let mut chips = ChipCollection::new(ChipIdPolicy::LengthBased);
		chips.push_from(&candidate(10, "Alice"));
		chips.push_from(&candidate(11, "Bob"));
		chips.remove_id(1);

		let id = chips.push_from(&candidate(12, "Carol")).id;
		assert_eq!(id, 2, "legacy policy reuses len + 1");
		assert_eq!(chips.iter().filter(|c| c.id == 2).count(), 2);

		// Removal by id takes out every chip sharing it.
		assert_eq!(chips.remove_id(2), 2);
		assert!(chips.is_empty());
	}

	#[test]
	fn chips_copy_label_and_image() {
		let mut chips = ChipCollection::default();
		let chip = chips.push_from(&candidate(4, "Alice")).clone();
		assert_eq!(chip.label, "Alice");
		assert_eq!(chip.image_ref, "/img/4.png");
		assert_eq!(chip.id, 1, "chip ids are independent of candidate ids");
	}

	#[test]
	fn removing_unknown_id_is_a_no_op() {
		let mut chips = ChipCollection::default();
		chips.push_from(&candidate(1, "Alice"));
		assert_eq!(chips.remove_id(42), 0);
		assert_eq!(chips.len(), 1);
	}
}
