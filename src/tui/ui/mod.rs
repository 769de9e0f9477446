//! UI rendering module
//!
//! Draws the menu nodes held by [`App`] onto a ratatui frame. The nodes
//! themselves are produced by [`crate::tui::menu::render`].

mod main_menu;
mod helpers;

use ratatui::Frame;
use crate::tui::app::App;

pub use main_menu::render_main_menu;
pub use helpers::{key_label, key_list};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    render_main_menu(f, app);
}
