use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!(
		"  Candidates: {} ({})",
		config.source.len(),
		config.origin
	);
	println!("  Chip ids: {}", config.options.id_policy.as_str());
	println!("  Focus click: {}", config.options.focus_click.as_str());
	println!(
		"  UI theme: {}",
		config
			.theme_name
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Placeholder: {}", config.labels.placeholder);
	println!("  List title: {}", config.labels.list_title);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
}
