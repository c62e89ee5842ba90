//! UI rendering module for Skyglance
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod help_overlay;
pub mod icons;
pub mod search_modal;
pub mod weather_view;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Renders the whole screen for the current application state
///
/// Without a snapshot the screen shows either the error (if the last fetch
/// failed) or a loading message. Overlays draw on top.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.background)),
        frame.area(),
    );

    match (&app.weather, &app.error) {
        (Some(weather), _) => weather_view::render(frame, app, weather),
        (None, Some(error)) => render_message(frame, error, theme.colors.accent.red),
        (None, None) => render_message(frame, "Loading weather...", theme.colors.accent.aqua),
    }

    if app.search.visible {
        search_modal::render(frame, &app.search, &theme);
    }
    if app.show_help {
        help_overlay::render(frame, &theme);
    }
}

/// Renders a single centered message (loading or error)
fn render_message(frame: &mut Frame, message: &str, color: Color) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(text, chunks[1]);
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
