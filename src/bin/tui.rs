//! SSHDeck TUI (Terminal User Interface)
//!
//! A terminal launcher menu. Usage: `sshdeck-tui [settings.json]`

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use sshdeck::config::Settings;
use sshdeck::tui::{App, ui::ui};
use std::io;

const DEFAULT_SETTINGS_PATH: &str = "sshdeck.json";

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());

    let settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path))?;

    if let Err(e) = sshdeck::init_logging(&settings.log_path) {
        eprintln!("Warning: Logging disabled: {}", e);
    }
    tracing::info!("Starting with {} menu items", settings.items.len());

    // Create app state before touching the terminal so bad bindings fail cleanly
    let mut app = App::new_with_settings(&settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        return Err(err).context("Event loop failed");
    }

    if let Some(label) = &app.last_activated {
        println!("Selected: {}", label);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    // One key event is handled to completion before the next is read
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_event(key);
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
