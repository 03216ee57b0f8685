//! Reading candidate lists from standalone files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chipin::Candidate;
use serde::Deserialize;

#[derive(Deserialize)]
struct CandidateTable {
	candidates: Vec<Candidate>,
}

/// JSON files may hold a bare array or a `{ "candidates": [...] }` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCandidates {
	List(Vec<Candidate>),
	Table(CandidateTable),
}

/// Read candidates from a `.json` file, or from TOML `[[candidates]]` tables
/// for any other extension.
pub(super) fn read_candidates_file(path: &Path) -> Result<Vec<Candidate>> {
	let contents = fs::read_to_string(path)
		.with_context(|| format!("failed to read candidates from {}", path.display()))?;

	let is_json = path
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
	if is_json {
		let parsed: JsonCandidates = serde_json::from_str(&contents)
			.with_context(|| format!("invalid JSON candidates in {}", path.display()))?;
		return Ok(match parsed {
			JsonCandidates::List(list) => list,
			JsonCandidates::Table(table) => table.candidates,
		});
	}

	let table: CandidateTable = toml::from_str(&contents)
		.with_context(|| format!("invalid TOML candidates in {}", path.display()))?;
	Ok(table.candidates)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
		let path = dir.path().join(name);
		fs::write(&path, contents).expect("write");
		path
	}

	#[test]
	fn json_array_is_accepted() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write(
			&dir,
			"people.json",
			r#"[{"id": 1, "label": "Ada", "image": "/ada.png"}]"#,
		);
		let candidates = read_candidates_file(&path).expect("read");
		assert_eq!(candidates, [Candidate::new(1, "Ada", "/ada.png")]);
	}

	#[test]
	fn json_object_is_accepted() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write(
			&dir,
			"people.JSON",
			r#"{"candidates": [{"id": 2, "label": "Grace", "image": ""}]}"#,
		);
		let candidates = read_candidates_file(&path).expect("read");
		assert_eq!(candidates[0].label, "Grace");
	}

	#[test]
	fn toml_tables_are_accepted() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write(
			&dir,
			"people.toml",
			"[[candidates]]\nid = 3\nlabel = \"Linus\"\nimage = \"/l.png\"\n",
		);
		let candidates = read_candidates_file(&path).expect("read");
		assert_eq!(candidates, [Candidate::new(3, "Linus", "/l.png")]);
	}

	#[test]
	fn malformed_file_names_the_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write(&dir, "broken.json", "{");
		let err = read_candidates_file(&path).unwrap_err();
		assert!(format!("{err:#}").contains("broken.json"));
	}
}
