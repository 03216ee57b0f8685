use serde::Serialize;

use crate::chips::Chip;

/// What the user ended the session with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipOutcome {
	/// `false` when the session was aborted with Ctrl+C.
	pub accepted: bool,
	/// Text left in the field when the session ended.
	pub query: String,
	/// Chips in selection order.
	pub chips: Vec<Chip>,
}
