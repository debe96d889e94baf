//! Input Module
//!
//! Turns key presses into navigation over the binding tree.

pub mod handler;
pub mod keymap;
pub mod navigation;

// Re-exports
pub use handler::{InputHandler, Outcome};
pub use keymap::{token_for_key, InputToken};
pub use navigation::{NavigationState, Phase, Transition};
