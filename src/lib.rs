//! SSHDeck - a keyboard-driven terminal launcher menu
//!
//! This library provides the menu model, selection logic and terminal
//! rendering behind the `sshdeck-tui` binary. The state transitions are pure
//! functions so they can be exercised without a live terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod tui;

/// Result type alias for SSHDeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SSHDeck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging to stdout
///
/// Suitable when the menu logic is embedded without taking over the terminal.
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))
}

/// Initialize logging to a file
///
/// The TUI owns the alternate screen, so log lines go to `path` instead of stdout.
pub fn init_logging<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;

    Ok(())
}
