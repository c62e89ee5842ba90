//! City search modal
//!
//! A centered box with the query input and either the candidate list or a
//! status message. Search problems are reported here and never reach the
//! main view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::{SearchState, SearchStatus};
use crate::theme::Theme;

const MODAL_WIDTH: u16 = 52;
const MODAL_HEIGHT: u16 = 16;

/// Renders the search modal on top of the current view
pub fn render(frame: &mut Frame, search: &SearchState, theme: &Theme) {
    let colors = theme.colors;
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Search Cities ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent.aqua))
        .style(Style::default().bg(colors.card).fg(colors.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Results
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(build_input_line(search, theme)), chunks[0]);

    let body = match search.status.message() {
        Some(message) => {
            let color = match search.status {
                SearchStatus::Failed => colors.accent.red,
                _ => colors.secondary,
            };
            Paragraph::new(Line::from(Span::styled(message, Style::default().fg(color))))
                .alignment(Alignment::Center)
        }
        None if search.results.is_empty() => Paragraph::new(Line::from(Span::styled(
            "No cities found.",
            Style::default().fg(colors.secondary),
        )))
        .alignment(Alignment::Center),
        None => Paragraph::new(build_result_lines(search, theme)),
    };
    frame.render_widget(body, chunks[2]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter search/select  ↑↓ move  Esc close",
            Style::default().fg(colors.secondary),
        ))),
        chunks[3],
    );
}

fn build_input_line(search: &SearchState, theme: &Theme) -> Line<'static> {
    let colors = theme.colors;
    let query = if search.query.is_empty() {
        Span::styled("Search city...", Style::default().fg(colors.secondary))
    } else {
        Span::styled(search.query.clone(), Style::default().fg(colors.primary))
    };

    Line::from(vec![
        Span::styled("> ", Style::default().fg(colors.accent.aqua)),
        query,
        Span::styled("▏", Style::default().fg(colors.accent.aqua)),
    ])
}

fn build_result_lines(search: &SearchState, theme: &Theme) -> Vec<Line<'static>> {
    let colors = theme.colors;
    search
        .results
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let selected = i == search.selected;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(colors.accent.aqua)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.primary)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(colors.accent.aqua)),
                Span::styled(location.name.clone(), name_style),
            ];
            if let Some(country) = location.country.as_deref().filter(|c| !c.is_empty()) {
                spans.push(Span::styled(
                    format!("  {}", country),
                    Style::default().fg(colors.secondary),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Location;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(search: &SearchState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, search, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn visible_search() -> SearchState {
        SearchState::opened()
    }

    #[test]
    fn test_modal_lists_default_cities() {
        let content = render_to_string(&visible_search());

        assert!(content.contains("Search Cities"));
        assert!(content.contains("Search city..."));
        assert!(content.contains("Kraków"));
        assert!(content.contains("Poznań"));
        assert!(content.contains("▶ Kraków"));
    }

    #[test]
    fn test_modal_shows_failure_message() {
        let mut search = visible_search();
        search.query = "Berlin".to_string();
        search.status = SearchStatus::Failed;

        let content = render_to_string(&search);
        assert!(content.contains("Search failed. Please try again."));
        assert!(!content.contains("Kraków"));
    }

    #[test]
    fn test_modal_shows_empty_message() {
        let mut search = visible_search();
        search.results.clear();
        search.status = SearchStatus::NoResults;

        let content = render_to_string(&search);
        assert!(content.contains("No cities found."));
    }

    #[test]
    fn test_result_lines_mark_selection_and_country() {
        let mut search = visible_search();
        search.results = vec![
            Location {
                name: "Berlin".to_string(),
                latitude: 52.52,
                longitude: 13.41,
                country: Some("Germany".to_string()),
            },
            Location {
                name: "Berlin".to_string(),
                latitude: 39.79,
                longitude: -74.93,
                country: None,
            },
        ];
        search.selected = 1;

        let lines = build_result_lines(&search, &Theme::default());
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "  Berlin  Germany");
        assert_eq!(text[1], "▶ Berlin");
    }
}
