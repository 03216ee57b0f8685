use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::App;
use crate::tui::components::candidates::row_at;
use crate::tui::outcome::ChipOutcome;

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
	area.is_some_and(|area| area.contains(Position::new(column, row)))
}

impl App<'_> {
	/// Process a keyboard event and return a result if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ChipOutcome>> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Esc => return Ok(Some(self.outcome(true))),
			KeyCode::Tab if self.chip_input.is_focused() => self.chip_input.blur(),
			KeyCode::Tab => self.chip_input.focus(),
			_ if !self.chip_input.is_focused() => {}
			KeyCode::Enter => {
				if self.chip_input.confirm().is_some() {
					self.sync_query_field();
				}
			}
			KeyCode::Up => {
				self.chip_input.highlight_previous();
			}
			KeyCode::Down => {
				self.chip_input.highlight_next();
			}
			KeyCode::Backspace if self.chip_input.query().is_empty() => {
				self.chip_input.backspace_on_empty();
			}
			_ => {
				if self.query_input.input(key) {
					self.apply_field_edit();
				}
			}
		}
		Ok(None)
	}

	/// Process a pointer event against the areas recorded by the last draw.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
			return;
		};
		let (column, row) = (mouse.column, mouse.row);

		if let Some(target) = self
			.hits
			.remove_targets
			.iter()
			.find(|target| target.area.contains(Position::new(column, row)))
		{
			let id = target.chip_id;
			self.chip_input.remove_chip(id);
			return;
		}

		if let Some(list) = self.hits.list
			&& contains(self.hits.list, column, row)
		{
			let len = self.chip_input.filtered().len();
			if let Some(index) = row_at(list, &self.table_state, len, column, row) {
				debug!(index, "candidate clicked");
				self.chip_input.select_at(index);
				self.sync_query_field();
			}
			return;
		}

		if contains(self.hits.prompt, column, row) {
			self.chip_input.focus_click();
			return;
		}

		self.chip_input.blur();
	}
}
