//! Helper functions for UI rendering

use crossterm::event::KeyCode;

/// Short display name for a key
pub fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other),
    }
}

/// Join key names with `/`, e.g. `↑/k`
pub fn key_list(codes: &[KeyCode]) -> String {
    if codes.is_empty() {
        return "-".to_string();
    }
    codes.iter().map(key_label).collect::<Vec<_>>().join("/")
}
