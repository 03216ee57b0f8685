//! Terminal setup and the event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::info;

use super::App;
use super::outcome::ChipOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App<'_> {
	/// Take over the terminal and process events until the user exits.
	pub fn run(&mut self) -> Result<ChipOutcome> {
		let mut terminal = ratatui::init();
		let setup = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| execute!(stdout(), EnableMouseCapture).map_err(Into::into));

		let options = self.chip_input.options();
		info!(
			candidates = self.chip_input.source().len(),
			id_policy = options.id_policy.as_str(),
			focus_click = options.focus_click.as_str(),
			"chip input started"
		);
		let result = setup.and_then(|()| self.event_loop(&mut terminal));

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		if let Ok(outcome) = &result {
			info!(
				accepted = outcome.accepted,
				chips = outcome.chips.len(),
				"chip input finished"
			);
		}
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<ChipOutcome> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						return Ok(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => {}
			}
		}
	}
}
