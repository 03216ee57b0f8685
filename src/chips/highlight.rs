//! Keyboard highlight over the suggestion list.

/// Position of the keyboard highlight, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight(Option<usize>);

impl Highlight {
	pub const NONE: Self = Self(None);

	#[must_use]
	pub fn at(index: usize) -> Self {
		Self(Some(index))
	}

	#[must_use]
	pub fn index(self) -> Option<usize> {
		self.0
	}

	pub fn reset(&mut self) {
		self.0 = None;
	}

	/// Move down one row. Returns whether the highlight changed.
	pub fn move_down(&mut self, len: usize) -> bool {
		let next = match self.0 {
			None if len > 0 => 0,
			Some(current) if current + 1 < len => current + 1,
			_ => return false,
		};
		self.0 = Some(next);
		true
	}

	/// Move up one row. Never leaves the list; `None` stays `None`.
	pub fn move_up(&mut self) -> bool {
		match self.0 {
			Some(current) if current > 0 => {
				self.0 = Some(current - 1);
				true
			}
			_ => false,
		}
	}

	/// Pull the highlight back inside a list that may have shrunk.
	pub fn clamp(&mut self, len: usize) {
		if let Some(current) = self.0 {
			self.0 = if len == 0 {
				None
			} else {
				Some(current.min(len - 1))
			};
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn down_enters_the_list_then_stops_at_the_end() {
		let mut highlight = Highlight::NONE;
		assert!(highlight.move_down(2));
		assert_eq!(highlight.index(), Some(0));
		assert!(highlight.move_down(2));
		assert!(!highlight.move_down(2));
		assert_eq!(highlight.index(), Some(1));
	}

	#[test]
	fn down_on_empty_list_does_nothing() {
		let mut highlight = Highlight::NONE;
		assert!(!highlight.move_down(0));
		assert_eq!(highlight, Highlight::NONE);
	}

	#[test]
	fn up_never_returns_to_none() {
		let mut highlight = Highlight::at(1);
		assert!(highlight.move_up());
		assert!(!highlight.move_up());
		assert_eq!(highlight.index(), Some(0));

		let mut none = Highlight::NONE;
		assert!(!none.move_up());
		assert_eq!(none.index(), None);
	}

	#[test]
	fn clamp_follows_a_shrinking_list() {
		let mut highlight = Highlight::at(4);
		highlight.clamp(2);
		assert_eq!(highlight.index(), Some(1));
		highlight.clamp(0);
		assert_eq!(highlight.index(), None);
	}

	#[test]
	fn arrow_sequences_stay_in_range() {
		let len = 3;
		let mut highlight = Highlight::NONE;
		for step in "DDUDDDDUUUUDUD".chars() {
			match step {
				'D' => highlight.move_down(len),
				_ => highlight.move_up(),
			};
			if let Some(index) = highlight.index() {
				assert!(index < len);
			}
		}
	}
}
