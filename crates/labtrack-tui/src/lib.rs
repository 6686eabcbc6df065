//! labtrack-tui - Terminal UI for the lab test tracker
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! [`Engine`](labtrack_app::Engine) from labtrack-app and adds terminal
//! rendering, event polling, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
