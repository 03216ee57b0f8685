//! Core crate exports for embedding and running the `chipin` chip input.
//!
//! The [`chips`] module holds the terminal-independent interaction model, and
//! [`tui`] renders it with ratatui. The root re-exports the types embedders
//! reach for most.

pub mod app_dirs;
pub mod chips;
pub mod logging;
pub mod tui;

pub use chips::{
	Candidate, CandidateSource, Chip, ChipCollection, ChipIdPolicy, ChipInput, ChipInputOptions,
	FocusClickPolicy, SourceError, recompute_filter,
};
pub use tui::{App, ChipOutcome, Theme, UiLabels};
