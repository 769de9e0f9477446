//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability
//! and potential reuse in other UI implementations.

pub mod types;
pub mod menu;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::{MenuInput, MenuModel, MenuNode, SelectionState};
pub use menu::{activate, dispatch, move_down, move_up, render, Dispatch, MenuSurface};
pub use app::App;
