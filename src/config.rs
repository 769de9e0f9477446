//! Menu settings and key bindings

use crate::{Error, Result};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

/// Labels shown when no settings file provides its own
pub const DEFAULT_ITEMS: [&str; 6] = [
    "☁️ Remote Systems",
    "🏣 Local System",
    "🔑 SSH Key Management",
    "⚙️ Settings",
    "❓ Help Manual",
    "⏹️ Exit",
];

/// Menu settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
/// Any field missing from the file falls back to its default.
///
/// # Example
/// ```rust,no_run
/// use sshdeck::config::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let settings = Settings::load("sshdeck.json").expect("Failed to load");
///
/// println!("Menu has {} items", settings.items.len());
/// println!("Logging to {}", settings.log_path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title drawn on the menu block
    pub title: String,
    /// Menu labels in display order
    pub items: Vec<String>,
    /// Key names bound to each menu input
    pub keys: KeyBindings,
    /// Log file path
    pub log_path: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;

        // Reject bad key names at load time rather than on first key press
        settings.keys.resolve()?;

        if settings.items.is_empty() {
            tracing::warn!("Settings at {} define no menu items", path.display());
        }

        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Config(format!("Failed to create settings directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Main Menu".to_string(),
            items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
            keys: KeyBindings::default(),
            log_path: "sshdeck.log".to_string(),
        }
    }
}

/// Key names bound to each menu input, as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Keys that move the selection up
    pub up: Vec<String>,
    /// Keys that move the selection down
    pub down: Vec<String>,
    /// Keys that activate the current selection
    pub activate: Vec<String>,
    /// Keys that leave the menu
    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec!["Up".to_string(), "k".to_string()],
            down: vec!["Down".to_string(), "j".to_string()],
            activate: vec!["Enter".to_string()],
            quit: vec!["q".to_string(), "Esc".to_string()],
        }
    }
}

impl KeyBindings {
    /// Resolve every key name into a terminal key code
    pub fn resolve(&self) -> Result<ResolvedKeys> {
        Ok(ResolvedKeys {
            up: parse_keys(&self.up)?,
            down: parse_keys(&self.down)?,
            activate: parse_keys(&self.activate)?,
            quit: parse_keys(&self.quit)?,
        })
    }
}

/// Key bindings resolved into terminal key codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeys {
    /// Move-up keys
    pub up: Vec<KeyCode>,
    /// Move-down keys
    pub down: Vec<KeyCode>,
    /// Activate keys
    pub activate: Vec<KeyCode>,
    /// Quit keys
    pub quit: Vec<KeyCode>,
}

impl Default for ResolvedKeys {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::Up, KeyCode::Char('k')],
            down: vec![KeyCode::Down, KeyCode::Char('j')],
            activate: vec![KeyCode::Enter],
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        }
    }
}

fn parse_keys(names: &[String]) -> Result<Vec<KeyCode>> {
    names.iter().map(|name| parse_key(name)).collect()
}

/// Parse a key name such as `"Up"`, `"Enter"` or `"k"`
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let code = match name {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Tab" => KeyCode::Tab,
        "Space" => KeyCode::Char(' '),
        "Backspace" => KeyCode::Backspace,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(Error::Config(format!("Unknown key name: {:?}", other))),
            }
        }
    };
    Ok(code)
}
