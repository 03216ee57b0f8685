use super::{Candidate, CandidateSource, ChipCollection};

/// Compute the suggestion list for `query` given the chips already taken.
///
/// Keeps every candidate whose label contains `query` (case-insensitive) and
/// whose label is not already a chip. An empty query matches everything.
/// Source order is preserved.
#[must_use]
pub fn recompute_filter(
	query: &str,
	chips: &ChipCollection,
	source: &CandidateSource,
) -> Vec<Candidate> {
	let needle = query.to_lowercase();
	source
		.iter()
		.filter(|candidate| candidate.label_contains(&needle))
		.filter(|candidate| !chips.contains_label(&candidate.label))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels(candidates: &[Candidate]) -> Vec<&str> {
		candidates.iter().map(|c| c.label.as_str()).collect()
	}

	#[test]
	fn empty_query_returns_everything_not_taken() {
		let source = CandidateSource::sample();
		let mut chips = ChipCollection::default();
		assert_eq!(recompute_filter("", &chips, &source).len(), 5);

		chips.push_from(&source.entries()[3]);
		assert_eq!(
			labels(&recompute_filter("", &chips, &source)),
			["Nick Giannopoulos", "John Doe", "Jane Doe", "Bob"]
		);
	}

	#[test]
	fn matching_ignores_case() {
		let source = CandidateSource::sample();
		let chips = ChipCollection::default();
		assert_eq!(
			labels(&recompute_filter("DOE", &chips, &source)),
			["John Doe", "Jane Doe"]
		);
		assert_eq!(labels(&recompute_filter("jo", &chips, &source)), ["John Doe"]);
	}

	#[test]
	fn no_match_yields_empty_list() {
		let source = CandidateSource::sample();
		let chips = ChipCollection::default();
		assert!(recompute_filter("zzz", &chips, &source).is_empty());
	}

	#[test]
	fn results_satisfy_both_constraints_for_every_prefix() {
		let source = CandidateSource::sample();
		let mut chips = ChipCollection::default();
		chips.push_from(&source.entries()[1]);
		chips.push_from(&source.entries()[4]);

		for query in ["", "o", "Do", "a", "NICK", "e ", "b"] {
			let lowered = query.to_lowercase();
			for candidate in recompute_filter(query, &chips, &source) {
				assert!(candidate.label.to_lowercase().contains(&lowered));
				assert!(!chips.contains_label(&candidate.label));
			}
		}
	}
}
