use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::text::{Line, Span};

use super::App;
use crate::tui::components::{
	CandidateList, PromptContext, render_candidates, render_chips, render_prompt,
};

impl App<'_> {
	/// Draw the whole chip input and record the areas pointer events hit.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		self.hits.remove_targets =
			render_chips(frame, layout[0], self.chip_input.chips().as_slice(), &self.theme);

		let focused = self.chip_input.is_focused();
		self.query_input.set_cursor_visible(focused);
		render_prompt(
			frame,
			layout[1],
			PromptContext {
				input: &self.query_input,
				placeholder: &self.labels.placeholder,
				focused,
				theme: &self.theme,
			},
		);
		self.hits.prompt = Some(layout[1]);

		self.table_state.select(self.chip_input.highlight());
		render_candidates(
			frame,
			layout[2],
			&mut self.table_state,
			CandidateList {
				candidates: self.chip_input.filtered(),
				title: &self.labels.list_title,
				empty_message: &self.labels.empty_message,
			},
			&self.theme,
		);
		self.hits.list = Some(layout[2]);

		let hint = Line::from(Span::styled(
			self.labels.hint.as_str(),
			self.theme.empty_style(),
		));
		frame.render_widget(hint, layout[3]);
	}
}
