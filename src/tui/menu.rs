//! Menu state transitions and surface rendering
//!
//! Everything here is free of terminal I/O: transitions take the current state
//! and return the next one, and `render` writes into any [`MenuSurface`].

use crate::tui::types::{MenuInput, MenuModel, MenuNode, SelectionState};

/// A display surface that holds one node per label
pub trait MenuSurface {
    /// Remove every node
    fn clear(&mut self);
    /// Append a node after the existing ones
    fn push(&mut self, node: MenuNode);
}

impl MenuSurface for Vec<MenuNode> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push(&mut self, node: MenuNode) {
        Vec::push(self, node);
    }
}

/// Clear `surface` and write one node per label, highlighting `cursor`
pub fn render<S: MenuSurface + ?Sized>(model: &MenuModel, cursor: Option<usize>, surface: &mut S) {
    surface.clear();
    for (i, label) in model.items().iter().enumerate() {
        surface.push(MenuNode {
            label: label.clone(),
            highlighted: Some(i) == cursor,
        });
    }
    tracing::debug!(items = model.len(), ?cursor, "Rendered menu");
}

/// Move the cursor up one item, stopping at the first
pub fn move_up(cursor: usize, len: usize) -> usize {
    if len > 0 && cursor > 0 {
        cursor - 1
    } else {
        cursor
    }
}

/// Move the cursor down one item, stopping at the last
pub fn move_down(cursor: usize, len: usize) -> usize {
    if len > 0 && cursor < len - 1 {
        cursor + 1
    } else {
        cursor
    }
}

/// Return the label under `cursor`
///
/// Yields `None` for an empty model.
pub fn activate(model: &MenuModel, cursor: Option<usize>) -> Option<&str> {
    let label = cursor.and_then(|c| model.get(c))?;
    tracing::info!("Selected: {}", label);
    Some(label)
}

/// Result of feeding one input through [`dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Selection after the input
    pub state: SelectionState,
    /// Label confirmed by an activate input
    pub activated: Option<String>,
    /// Whether the surface must be redrawn
    pub redraw: bool,
    /// Whether the input asked to leave the menu
    pub quit: bool,
}

/// Apply one input to `state`
pub fn dispatch(state: SelectionState, model: &MenuModel, input: MenuInput) -> Dispatch {
    let mut out = Dispatch {
        state,
        activated: None,
        redraw: false,
        quit: false,
    };

    match input {
        MenuInput::Up => {
            out.state.cursor = state.cursor.map(|c| move_up(c, model.len()));
            out.redraw = true;
        }
        MenuInput::Down => {
            out.state.cursor = state.cursor.map(|c| move_down(c, model.len()));
            out.redraw = true;
        }
        MenuInput::Activate => {
            out.activated = activate(model, state.cursor).map(str::to_string);
        }
        MenuInput::Quit => {
            out.quit = true;
        }
    }

    if out.state != state {
        tracing::debug!(from = ?state.cursor, to = ?out.state.cursor, "Cursor moved");
    }

    out
}
