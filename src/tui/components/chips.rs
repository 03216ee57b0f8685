//! Chip row rendering and the hit areas of each chip's remove control.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::chips::Chip;
use crate::tui::theme::Theme;

/// Glyph standing in for a chip's image.
pub const IMAGE_MARKER: &str = "◉";
/// The clickable remove control drawn at the end of each chip.
pub const REMOVE_MARKER: &str = "×";

const CHIP_GAP: u16 = 1;

/// Screen cell that removes the chip `chip_id` when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveTarget {
	pub chip_id: u64,
	pub area: Rect,
}

/// Draw `chips` left to right on the first row of `area`.
///
/// Chips that do not fit are summarised as `+N`. Returns the remove targets
/// of the chips that were drawn.
pub fn render_chips(
	frame: &mut Frame,
	area: Rect,
	chips: &[Chip],
	theme: &Theme,
) -> Vec<RemoveTarget> {
	let mut targets = Vec::with_capacity(chips.len());
	if area.width == 0 || area.height == 0 {
		return targets;
	}

	let mut spans = Vec::new();
	let mut x = area.x;
	let right = area.right();

	for (drawn, chip) in chips.iter().enumerate() {
		let body = format!(" {IMAGE_MARKER} {} ", chip.label);
		let remove = format!("{REMOVE_MARKER} ");
		let width = (body.width() + remove.width()) as u16;
		let hidden = chips.len() - drawn;
		let overflow = format!("+{hidden}");
		// Leave room for the overflow marker unless this is the last chip.
		let reserve = if hidden > 1 {
			overflow.width() as u16 + CHIP_GAP
		} else {
			0
		};
		if x.saturating_add(width).saturating_add(reserve) > right {
			spans.push(Span::styled(overflow, theme.empty_style()));
			break;
		}

		let remove_x = x + body.width() as u16;
		targets.push(RemoveTarget {
			chip_id: chip.id,
			area: Rect::new(remove_x, area.y, REMOVE_MARKER.width() as u16, 1),
		});
		spans.push(Span::styled(body, theme.chip_style()));
		spans.push(Span::styled(remove, theme.chip_remove_style()));
		spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
		x = x.saturating_add(width + CHIP_GAP);
	}

	frame.render_widget(Line::from(spans), area);
	targets
}
