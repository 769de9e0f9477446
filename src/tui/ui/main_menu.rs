//! Main menu screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use super::helpers::key_list;

/// Renders the screen

pub fn render_main_menu(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // Menu
            Constraint::Length(3), // Last selection
            Constraint::Length(3), // Help text
        ])
        .split(size);

    // Menu items, one list row per rendered node
    let menu_items: Vec<ListItem> = app
        .nodes()
        .iter()
        .map(|node| {
            let content = if node.highlighted {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        node.label.as_str(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(node.label.as_str(), Style::default().fg(Color::White)),
                ])
            };
            ListItem::new(content)
        })
        .collect();

    let menu = List::new(menu_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.title.as_str())
            .style(Style::default()),
    );
    f.render_widget(menu, chunks[0]);

    // Last activation
    let status = match &app.last_activated {
        Some(label) => Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(label.as_str(), Style::default().fg(Color::Green)),
        ]),
        None if app.model().is_empty() => {
            Line::from(Span::styled("No menu items configured", Style::default().fg(Color::Red)))
        }
        None => Line::from(Span::styled("Nothing selected yet", Style::default().fg(Color::DarkGray))),
    };
    let status_widget = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_widget, chunks[1]);

    // Help text
    let keys = app.keys();
    let help_text = Line::from(vec![
        Span::styled("Navigation: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} / {}", key_list(&keys.up), key_list(&keys.down)), Style::default().fg(Color::Cyan)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Select: ", Style::default().fg(Color::DarkGray)),
        Span::styled(key_list(&keys.activate), Style::default().fg(Color::Cyan)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Quit: ", Style::default().fg(Color::DarkGray)),
        Span::styled(key_list(&keys.quit), Style::default().fg(Color::Red)),
    ]);
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
