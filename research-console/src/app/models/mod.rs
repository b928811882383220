//! Data models for the application
//!
//! View routing and the navigation state that selects which report content
//! is visible.

mod navigation;
mod view;

// Re-export all public types
pub use navigation::*;
pub use view::*;
