//! Single-line text field backed by `tui-textarea`.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Replace line breaks with spaces so `text` fits the one-row field.
#[must_use]
pub fn single_line(text: &str) -> Cow<'_, str> {
	if text.contains(['\n', '\r']) {
		Cow::Owned(text.replace("\r\n", " ").replace(['\n', '\r'], " "))
	} else {
		Cow::Borrowed(text)
	}
}

/// The query field of the chip input.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = TextArea::new(vec![single_line(&initial).into_owned()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the field. Returns whether the text changed.
	///
	/// Keys that would split the line are swallowed so the field stays on one
	/// row.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
		if newline {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the contents, keeping the field's styling.
	///
	/// Line breaks become spaces.
	pub fn set_text(&mut self, text: &str) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(single_line(text));
	}

	/// Hide the cursor while the field is unfocused.
	pub fn set_cursor_visible(&mut self, visible: bool) {
		let style = if visible {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('j'))));
		assert!(input.input(key(KeyCode::Char('o'))));
		assert_eq!(input.text(), "jo");
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = QueryInput::new("bob");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "bob");
	}

	#[test]
	fn backspace_on_empty_field_is_not_a_change() {
		let mut input = QueryInput::default();
		assert!(!input.input(key(KeyCode::Backspace)));
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = QueryInput::new("alice");
		input.set_text("bo");
		assert_eq!(input.text(), "bo");
		input.set_text("");
		assert_eq!(input.text(), "");
	}

	#[test]
	fn line_breaks_stay_on_one_row() {
		let mut input = QueryInput::new("a\r\nb");
		assert_eq!(input.text(), "a b");

		input.set_text("jo\nx\ry");
		assert_eq!(input.text(), "jo x y");
		assert!(input.input(key(KeyCode::Char('h'))));
		assert_eq!(input.text(), "jo x yh");
	}

	#[test]
	fn single_line_borrows_plain_text() {
		assert!(matches!(single_line("plain"), Cow::Borrowed("plain")));
		assert_eq!(single_line("\nlead"), " lead");
	}
}
