//! Interaction model for the chip input, independent of any terminal.
//!
//! A [`CandidateSource`] provides the searchable entries, a [`ChipCollection`]
//! holds what the user picked, and [`ChipInput`] ties them together with the
//! query and keyboard highlight. Suggestions are always derived through
//! [`recompute_filter`].

mod candidate;
mod chip;
mod filter;
mod highlight;
mod options;
mod state;

pub use candidate::{Candidate, CandidateSource, SourceError};
pub use chip::{Chip, ChipCollection, ChipIdPolicy};
pub use filter::recompute_filter;
pub use highlight::Highlight;
pub use options::{ChipInputOptions, FocusClickPolicy};
pub use state::ChipInput;
