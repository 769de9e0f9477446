//! Main TUI application state and logic

use crate::config::{ResolvedKeys, Settings};
use crate::tui::menu::{self, Dispatch};
use crate::tui::types::{MenuInput, MenuModel, MenuNode, SelectionState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Application state
pub struct App {
    /// Title drawn on the menu block
    pub title: String,
    /// Menu labels, fixed at construction
    model: MenuModel,
    /// Current selection, always in range for `model`
    selection: SelectionState,
    /// Nodes written by the last render
    nodes: Vec<MenuNode>,
    /// Label confirmed by the last activation
    pub last_activated: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Key codes bound to each input
    keys: ResolvedKeys,
}

impl App {
    /// Create new application from settings
    pub fn new_with_settings(settings: &Settings) -> crate::Result<Self> {
        let keys = settings.keys.resolve()?;
        Ok(Self::with_keys(
            settings.title.clone(),
            MenuModel::new(settings.items.iter().cloned()),
            keys,
        ))
    }

    /// Create new application with default settings
    pub fn new() -> Self {
        let settings = Settings::default();
        Self::with_keys(
            settings.title,
            MenuModel::new(settings.items),
            ResolvedKeys::default(),
        )
    }

    /// Create application over an explicit model with default key bindings
    pub fn with_model(model: MenuModel) -> Self {
        Self::with_keys("Main Menu".to_string(), model, ResolvedKeys::default())
    }

    fn with_keys(title: String, model: MenuModel, keys: ResolvedKeys) -> Self {
        let selection = SelectionState::new(&model);
        let mut app = Self {
            title,
            model,
            selection,
            nodes: Vec::new(),
            last_activated: None,
            should_quit: false,
            keys,
        };
        app.render();
        app
    }

    /// Rewrite `nodes` from the current model and selection
    fn render(&mut self) {
        menu::render(&self.model, self.selection.cursor, &mut self.nodes);
    }

    /// Menu labels
    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    /// Current selection
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Nodes written by the last render
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Key codes bound to each input
    pub fn keys(&self) -> &ResolvedKeys {
        &self.keys
    }

    /// Currently selected label
    pub fn selected_label(&self) -> Option<&str> {
        self.selection.cursor.and_then(|c| self.model.get(c))
    }

    /// Map a key to its bound input, if any
    pub fn input_for(&self, code: KeyCode) -> Option<MenuInput> {
        if self.keys.up.contains(&code) {
            Some(MenuInput::Up)
        } else if self.keys.down.contains(&code) {
            Some(MenuInput::Down)
        } else if self.keys.activate.contains(&code) {
            Some(MenuInput::Activate)
        } else if self.keys.quit.contains(&code) {
            Some(MenuInput::Quit)
        } else {
            None
        }
    }

    /// Apply a logical input, returning the activated label if any
    pub fn handle_input(&mut self, input: MenuInput) -> Option<String> {
        let Dispatch {
            state,
            activated,
            redraw,
            quit,
        } = menu::dispatch(self.selection, &self.model, input);

        self.selection = state;
        if redraw {
            self.render();
        }
        if quit {
            self.should_quit = true;
        }
        if activated.is_some() {
            self.last_activated = activated.clone();
        }
        activated
    }

    /// Handle a key press; unbound keys are ignored
    pub fn handle_key(&mut self, code: KeyCode) -> Option<String> {
        match self.input_for(code) {
            Some(input) => self.handle_input(input),
            None => {
                tracing::trace!(?code, "Ignoring unbound key");
                None
            }
        }
    }

    /// Handle a terminal key event; only presses are dispatched
    pub fn handle_event(&mut self, event: KeyEvent) -> Option<String> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        self.handle_key(event.code)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
