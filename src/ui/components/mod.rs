//! UI Components
//!
//! Widgets drawn around the options grid.

pub mod statusline;

// Re-exports
pub use statusline::{HelpBar, MessageType, StatusLine};
