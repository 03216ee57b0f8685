//! Suggestion list rendered as a bordered two-column table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::chips::Candidate;
use crate::tui::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Borrowed view of everything the list needs to draw itself.
pub struct CandidateList<'a> {
	pub candidates: &'a [Candidate],
	pub title: &'a str,
	pub empty_message: &'a str,
}

/// Render the suggestion list into `area`, driving `table_state` for the
/// highlight and scroll offset.
pub fn render_candidates(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	list: CandidateList<'_>,
	theme: &Theme,
) {
	let border_style = Style::default().fg(theme.header_fg());
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style)
		.title(format!(" {} ({}) ", list.title, list.candidates.len()));

	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let header = Row::new([Cell::from("Name"), Cell::from("Image")])
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);
	let rows = list.candidates.iter().map(|candidate| {
		Row::new([
			Cell::from(candidate.label.as_str()),
			Cell::from(Span::styled(
				candidate.image_ref.as_str(),
				theme.empty_style(),
			)),
		])
	});
	let widths = [Constraint::Fill(2), Constraint::Fill(1)];
	let table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);

	if list.candidates.is_empty() && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(Span::styled(list.empty_message, theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

/// Map a screen row to an index into the rendered list.
///
/// `area` is the outer (bordered) area the list was drawn into.
#[must_use]
pub fn row_at(
	area: Rect,
	table_state: &TableState,
	len: usize,
	column: u16,
	row: u16,
) -> Option<usize> {
	let inner_x = area.x.saturating_add(1);
	let inner_width = area.width.saturating_sub(2);
	let inner_height = area.height.saturating_sub(2);
	if inner_width == 0 || inner_height <= TABLE_HEADER_ROWS {
		return None;
	}
	if column < inner_x || column >= inner_x.saturating_add(inner_width) {
		return None;
	}

	let body_start_y = area.y.saturating_add(1 + TABLE_HEADER_ROWS);
	let body_end_y = area.y.saturating_add(1 + inner_height);
	if row < body_start_y || row >= body_end_y {
		return None;
	}

	let index = table_state
		.offset()
		.saturating_add(row.saturating_sub(body_start_y) as usize);
	(index < len).then_some(index)
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height < TABLE_HEADER_ROWS || area.width <= 2 {
		return;
	}
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let middle = "─".repeat(area.width as usize - 2);
	let spans = vec![
		Span::raw(" "),
		Span::styled(middle, Style::default().fg(theme.header_fg())),
		Span::raw(" "),
	];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}
