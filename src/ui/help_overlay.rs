//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::theme::Theme;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame, theme: &Theme) {
    let colors = theme.colors;
    let overlay_area = centered_rect(46, 18, frame.area());

    frame.render_widget(Clear, overlay_area);

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(colors.accent.aqua)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Forecast", heading)),
        help_line("s, /", "Search cities", theme),
        help_line("r", "Refresh forecast", theme),
        help_line("t", "Toggle dark/light theme", theme),
        help_line("j/k, ↓/↑", "Scroll daily forecast", theme),
        help_line("q, Esc", "Quit", theme),
        Line::from(""),
        Line::from(Span::styled("Search", heading)),
        help_line("Enter", "Search, or pick highlighted city", theme),
        help_line("↑/↓", "Move selection", theme),
        help_line("Esc", "Close search", theme),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(colors.secondary),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent.aqua))
        .style(Style::default().bg(colors.card).fg(colors.primary));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<10}", key),
            Style::default().fg(theme.colors.accent.orange),
        ),
        Span::raw(description.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_overlay_renders() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render(frame, &Theme::default());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();

        assert!(content.contains("Help"), "Should render help title");
        assert!(content.contains("Search cities"), "Should list search key");
        assert!(content.contains("Toggle dark/light theme"));
    }
}
