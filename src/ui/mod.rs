//! UI Module
//!
//! Text layout of the available options and the terminal presentation.

pub mod components;
pub mod grid;
pub mod renderer;
pub mod terminal;

// Re-exports
pub use components::MessageType;
pub use grid::format_state;
pub use renderer::{Renderer, UiState};
