use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the text field.
pub struct PromptContext<'a, 'b> {
	pub input: &'a QueryInput<'b>,
	pub placeholder: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Draw the bordered text field and return the area the text occupies.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_, '_>) -> Rect {
	let PromptContext {
		input,
		placeholder,
		focused,
		theme,
	} = ctx;

	let border_style = if focused {
		theme.focus_border_style()
	} else {
		theme.blur_border_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return inner;
	}

	let symbol_width = (PROMPT_SYMBOL.len() as u16).min(inner.width);
	frame.buffer_mut().set_line(
		inner.x,
		inner.y,
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt_style())),
		symbol_width,
	);

	let text_area = Rect {
		x: inner.x + symbol_width,
		width: inner.width - symbol_width,
		height: 1,
		..inner
	};
	input.render_textarea(frame, text_area);
	if input.text().is_empty() {
		render_placeholder(frame, text_area, placeholder, theme);
	}
	inner
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || text.is_empty() {
		return;
	}
	// Column 0 holds the cursor.
	let available_width = area.width as usize - 1;
	let display_text: String = text.chars().take(available_width).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width - 1,
	);
}
