//! Core types for the menu model and selection

/// Ordered, immutable list of menu labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    items: Vec<String>,
}

impl MenuModel {
    /// Create a model from labels; insertion order is display order
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// All labels in display order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Label at `index`, if any
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the model has no labels
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Selection cursor
///
/// `cursor` is `Some` exactly when the model it was created for is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Index of the highlighted label
    pub cursor: Option<usize>,
}

impl SelectionState {
    /// Initial selection for `model`: first item, or none for an empty model
    pub fn new(model: &MenuModel) -> Self {
        Self {
            cursor: if model.is_empty() { None } else { Some(0) },
        }
    }
}

/// Logical menu input, decoupled from any physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Confirm the current selection
    Activate,
    /// Leave the menu
    Quit,
}

/// One visual node written to a display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Label text
    pub label: String,
    /// Whether this node is the highlighted one
    pub highlighted: bool,
}
