//! Widgets composing the chip input screen.

pub mod candidates;
pub mod chips;
mod prompt;

pub use candidates::{CandidateList, render_candidates};
pub use chips::{RemoveTarget, render_chips};
pub use prompt::{PromptContext, render_prompt};
