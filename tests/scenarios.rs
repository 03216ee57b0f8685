use chipin::{App, Candidate, CandidateSource, ChipInput, ChipInputOptions, recompute_filter};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const QUERIES: &[&str] = &["", "j", "jo", "DOE", "o", "e ", "zz", "nick g"];

fn press(app: &mut App, code: KeyCode) {
	let outcome = app
		.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled");
	assert!(outcome.is_none(), "{code:?} should not end the session");
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn labels(candidates: &[Candidate]) -> Vec<&str> {
	candidates.iter().map(|c| c.label.as_str()).collect()
}

#[test]
fn typing_selecting_and_backspacing_through_the_keyboard() {
	let mut app = App::new(ChipInput::default());

	type_text(&mut app, "jo");
	assert_eq!(labels(app.chip_input.filtered()), ["John Doe"]);
	assert_eq!(app.chip_input.filtered()[0].id, 2);

	press(&mut app, KeyCode::Down);
	assert_eq!(app.chip_input.highlight(), Some(0));

	press(&mut app, KeyCode::Enter);
	let chips = app.chip_input.chips().as_slice();
	assert_eq!(chips.len(), 1);
	assert_eq!(chips[0].id, 1);
	assert_eq!(chips[0].label, "John Doe");
	assert_eq!(chips[0].image_ref, "/images/download.png");
	assert_eq!(app.chip_input.query(), "");
	assert_eq!(app.query_input.text(), "");

	type_text(&mut app, "j");
	assert_eq!(labels(app.chip_input.filtered()), ["Jane Doe"]);

	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.chip_input.query(), "");
	assert_eq!(app.chip_input.chips().len(), 1);

	press(&mut app, KeyCode::Backspace);
	assert!(app.chip_input.chips().is_empty());
}

#[test]
fn escape_reports_the_collected_chips() {
	let mut app = App::new(ChipInput::default()).with_query("ali");
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);

	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
		.expect("key handled")
		.expect("escape finishes");
	assert!(outcome.accepted);
	assert_eq!(outcome.chips.len(), 1);
	assert_eq!(outcome.chips[0].label, "Alice");
}

#[test]
fn focus_click_reopens_the_whole_source() {
	let mut input = ChipInput::default();
	input.set_query("jo");
	input.highlight_next();
	input.confirm().expect("John Doe selected");
	input.set_query("jo");
	assert!(input.filtered().is_empty());

	input.focus_click();
	assert_eq!(input.filtered(), CandidateSource::sample().entries());
	assert_eq!(input.query(), "jo");
}

#[test]
fn filtered_entries_match_the_query_and_skip_chips() {
	let source = CandidateSource::sample();
	for chosen in [Vec::new(), vec![1], vec![1, 3], vec![0, 1, 2, 3, 4]] {
		let mut input = ChipInput::new(source.clone(), ChipInputOptions::default());
		for index in chosen {
			input.select(&source.entries()[index]);
		}
		for query in QUERIES {
			let filtered = recompute_filter(query, input.chips(), &source);
			for candidate in &filtered {
				assert!(
					candidate
						.label
						.to_lowercase()
						.contains(&query.to_lowercase()),
					"{} does not contain {query:?}",
					candidate.label
				);
				assert!(!input.chips().contains_label(&candidate.label));
			}
		}
	}
}

#[test]
fn selection_clears_the_query_and_adds_one_matching_chip() {
	let source = CandidateSource::sample();
	for candidate in source.iter() {
		let mut input = ChipInput::new(source.clone(), ChipInputOptions::default());
		input.set_query(&candidate.label[..1]);
		let before = input.chips().len();

		let chip = input.select(candidate).clone();

		assert_eq!(input.query(), "");
		assert_eq!(input.chips().len(), before + 1);
		assert_eq!(chip.label, candidate.label);
		assert_eq!(chip.image_ref, candidate.image_ref);
	}
}

#[test]
fn backspace_only_removes_on_an_empty_query() {
	let mut input = ChipInput::default();
	assert!(!input.backspace_on_empty());

	let source = CandidateSource::sample();
	input.select(&source.entries()[0]);
	input.select(&source.entries()[4]);
	input.set_query("a");
	assert!(!input.backspace_on_empty());
	assert_eq!(input.chips().len(), 2);

	input.set_query("");
	assert!(input.backspace_on_empty());
	assert_eq!(labels_of_chips(&input), ["Nick Giannopoulos"]);
}

fn labels_of_chips(input: &ChipInput) -> Vec<&str> {
	input.chips().iter().map(|c| c.label.as_str()).collect()
}

#[test]
fn highlight_stays_within_the_filtered_list() {
	for query in QUERIES {
		let mut input = ChipInput::default();
		input.set_query(*query);
		let len = input.filtered().len();
		for step in 0..(len + 3) {
			input.highlight_next();
			if let Some(index) = input.highlight() {
				assert!(index < len, "down step {step} left the list for {query:?}");
			}
		}
		for _ in 0..(len + 3) {
			input.highlight_previous();
			if let Some(index) = input.highlight() {
				assert!(index < len);
			}
		}
		if len == 0 {
			assert_eq!(input.highlight(), None);
		}
	}
}
