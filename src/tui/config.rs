/// Text rendered around the chip input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Dimmed text shown in the empty text field.
	pub placeholder: String,
	/// Title of the suggestion list.
	pub list_title: String,
	/// Message shown when no suggestion matches.
	pub empty_message: String,
	/// Key help rendered on the bottom row.
	pub hint: String,
}

impl UiLabels {
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_list_title(mut self, title: impl Into<String>) -> Self {
		self.list_title = title.into();
		self
	}
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Type here...".to_string(),
			list_title: "Suggestions".to_string(),
			empty_message: "No matches".to_string(),
			hint: "↑/↓ move  Enter add  Backspace remove last  Tab focus  Esc done".to_string(),
		}
	}
}
