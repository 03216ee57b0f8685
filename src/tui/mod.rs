//! Terminal front-end for the chip input.
//!
//! The submodules here expose the widgets, the text field wrapper and the
//! [`App`] that wires them to the [`chips`](crate::chips) model.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod theme;

pub use app::App;
pub use config::UiLabels;
pub use input::QueryInput;
pub use outcome::ChipOutcome;
pub use theme::{Theme, default_theme};
