use anyhow::Result;
use chipin::ChipOutcome;
use serde_json::json;

/// Print one chip label per line.
pub(crate) fn print_plain(outcome: &ChipOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	if outcome.chips.is_empty() {
		println!("No chips selected");
		return;
	}
	for chip in &outcome.chips {
		println!("{}", chip.label);
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ChipOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"chips": outcome.chips,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &ChipOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use chipin::Chip;

	use super::*;

	#[test]
	fn json_lists_chips_with_image_field() {
		let outcome = ChipOutcome {
			accepted: true,
			query: String::new(),
			chips: vec![Chip {
				id: 1,
				label: "John Doe".into(),
				image_ref: "/images/download.png".into(),
			}],
		};

		let json = format_outcome_json(&outcome).expect("json");
		insta::assert_snapshot!(json, @r#"
		{
		  "accepted": true,
		  "chips": [
		    {
		      "id": 1,
		      "image": "/images/download.png",
		      "label": "John Doe"
		    }
		  ],
		  "query": ""
		}
		"#);
	}
}
