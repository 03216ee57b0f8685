use std::fs;

use chipin::{ChipIdPolicy, FocusClickPolicy};
use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::resolved::CandidateOrigin;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"chipin",
		"--theme",
		"solarized",
		"--query",
		"jo",
		"--placeholder",
		"Add people",
		"--list-title",
		"People",
		"--legacy-ids",
		"--focus-click",
		"refilter",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("light".into());
	config.behavior.id_policy = Some(ChipIdPolicy::Sequential);
	config.apply_cli_overrides(&cli).expect("overrides apply");

	assert_eq!(config.ui.theme.as_deref(), Some("solarized"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("jo"));
	assert_eq!(config.ui.placeholder.as_deref(), Some("Add people"));
	assert_eq!(config.ui.list_title.as_deref(), Some("People"));
	assert_eq!(config.behavior.id_policy, Some(ChipIdPolicy::LengthBased));
	assert_eq!(config.behavior.focus_click, Some(FocusClickPolicy::Refilter));
}

#[test]
fn defaults_resolve_to_the_sample_source() {
	let cli = CliArgs::parse_from(["chipin"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(resolved.source.len(), 5);
	assert_eq!(resolved.origin, CandidateOrigin::Sample);
	assert_eq!(resolved.options.id_policy, ChipIdPolicy::Sequential);
	assert_eq!(resolved.options.focus_click, FocusClickPolicy::ShowAll);
	assert_eq!(resolved.labels.placeholder, "Type here...");
	assert!(resolved.initial_query.is_empty());
}

#[test]
fn candidates_file_overrides_configured_list() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("people.json");
	fs::write(&path, r#"[{"id": 1, "label": "Ada", "image": ""}]"#).expect("write");

	let cli = CliArgs::parse_from(["chipin", "--candidates", path.to_str().unwrap()]);
	let mut config = RawConfig {
		candidates: Some(Vec::new()),
		..RawConfig::default()
	};
	config.apply_cli_overrides(&cli).expect("overrides apply");
	let resolved = config.resolve(&cli).expect("resolves");

	assert_eq!(resolved.source.len(), 1);
	assert_eq!(resolved.origin, CandidateOrigin::File(path));
}

#[test]
fn duplicate_configured_ids_are_rejected() {
	let cli = CliArgs::parse_from(["chipin"]);
	let config = RawConfig {
		candidates: Some(vec![
			chipin::Candidate::new(1, "Ada", ""),
			chipin::Candidate::new(1, "Grace", ""),
		]),
		..RawConfig::default()
	};

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("candidates"), "message was {message}");
	assert!(message.contains("more than once"), "message was {message}");
}
