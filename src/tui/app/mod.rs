//! Application state and behavior for the interactive chip input.
//!
//! The [`App`] type pairs the [`ChipInput`](crate::chips::ChipInput) model
//! with the terminal widgets. Supporting modules split the implementation
//! into input handling and rendering.

mod actions;
mod render;
mod state;

pub use state::App;
