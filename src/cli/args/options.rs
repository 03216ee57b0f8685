use chipin::FocusClickPolicy;
use clap::ValueEnum;

/// Focus-click behaviours accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FocusClickArg {
	ShowAll,
	Refilter,
}

impl From<FocusClickArg> for FocusClickPolicy {
	fn from(value: FocusClickArg) -> Self {
		match value {
			FocusClickArg::ShowAll => FocusClickPolicy::ShowAll,
			FocusClickArg::Refilter => FocusClickPolicy::Refilter,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
