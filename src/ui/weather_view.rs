//! Main forecast screen
//!
//! Renders the current conditions, the hourly strip with its temperature
//! sparkline, the multi-day list and the details grid for one city.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::glyph_or_placeholder;
use super::widgets::TemperatureSparkline;
use crate::app::App;
use crate::data::{CityWeather, DailyItem, HourlyItem};
use crate::theme::Theme;

/// Cells per entry in the hourly strip
const HOURLY_COLUMN_WIDTH: u16 = 7;

/// Renders the forecast for the app's current snapshot
pub fn render(frame: &mut Frame, app: &App, weather: &CityWeather) {
    let theme = app.theme();
    let colors = theme.colors;
    let area = frame.area();

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background))
        .title(Span::styled(
            format!(" {} ", app.location.name),
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(4), // Current conditions
            Constraint::Length(6), // Hourly strip
            Constraint::Min(4),    // Daily list
            Constraint::Length(6), // Details grid
            Constraint::Length(1), // Key hints
        ])
        .split(inner_area);

    let status = build_status_line(app.loading, app.last_updated.as_ref(), &theme);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    let current = build_current_lines(weather, app.icon.glyph(), &theme);
    frame.render_widget(Paragraph::new(current), chunks[1]);

    render_hourly(frame, chunks[2], &weather.hourly, &theme);

    let daily = Paragraph::new(build_daily_lines(&weather.daily, &theme))
        .block(section_block("Forecast", &theme))
        .scroll((app.daily_scroll, 0));
    frame.render_widget(daily, chunks[3]);

    let details =
        Paragraph::new(build_details_lines(weather, &theme)).block(section_block("Details", &theme));
    frame.render_widget(details, chunks[4]);

    frame.render_widget(Paragraph::new(build_hint_line(&theme)), chunks[5]);
}

fn section_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.colors.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.colors.accent.aqua),
        ))
}

fn render_hourly(frame: &mut Frame, area: Rect, hourly: &[HourlyItem], theme: &Theme) {
    let block = section_block("Hourly", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(build_hourly_lines(hourly, theme)), rows[0]);

    let temps: Vec<i32> = hourly.iter().map(|item| item.temp).collect();
    let sparkline = TemperatureSparkline::new(&temps)
        .column_width(HOURLY_COLUMN_WIDTH)
        .current_position(0)
        .style(Style::default().fg(theme.colors.accent.blue))
        .marker_style(Style::default().fg(theme.colors.accent.orange));
    frame.render_widget(sparkline, rows[1]);
}

fn build_status_line(
    loading: bool,
    last_updated: Option<&DateTime<Local>>,
    theme: &Theme,
) -> Line<'static> {
    let colors = theme.colors;
    let mut spans = Vec::new();

    if let Some(updated) = last_updated {
        spans.push(Span::styled(
            format!("Updated {}", updated.format("%H:%M")),
            Style::default().fg(colors.secondary),
        ));
    }
    if loading {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            "⟳ Refreshing...",
            Style::default().fg(colors.accent.aqua),
        ));
    }
    spans.push(Span::styled(
        format!("  [{} theme]", theme.name()),
        Style::default().fg(colors.secondary),
    ));

    Line::from(spans)
}

fn build_current_lines(weather: &CityWeather, glyph: &str, theme: &Theme) -> Vec<Line<'static>> {
    let colors = theme.colors;
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {}  ", glyph),
                Style::default().fg(colors.accent.aqua),
            ),
            Span::styled(
                format!("{}°C", weather.temp),
                Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", weather.condition),
            Style::default().fg(colors.primary),
        )),
        Line::from(Span::styled(
            format!("     H: {}°  L: {}°", weather.high, weather.low),
            Style::default().fg(colors.secondary),
        )),
    ]
}

/// Three rows: labels, icons, temperatures
fn build_hourly_lines(hourly: &[HourlyItem], theme: &Theme) -> Vec<Line<'static>> {
    let colors = theme.colors;
    let width = HOURLY_COLUMN_WIDTH as usize;

    let cell = |text: String, style: Style| Span::styled(format!("{:^width$}", text), style);

    let labels = hourly
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == 0 {
                Style::default()
                    .fg(colors.accent.aqua)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.secondary)
            };
            cell(item.time.clone(), style)
        })
        .collect::<Vec<_>>();
    let icons = hourly
        .iter()
        .map(|item| {
            cell(
                glyph_or_placeholder(&item.icon).to_string(),
                Style::default().fg(colors.primary),
            )
        })
        .collect::<Vec<_>>();
    let temps = hourly
        .iter()
        .map(|item| cell(format!("{}°", item.temp), Style::default().fg(colors.primary)))
        .collect::<Vec<_>>();

    vec![Line::from(labels), Line::from(icons), Line::from(temps)]
}

fn build_daily_lines(daily: &[DailyItem], theme: &Theme) -> Vec<Line<'static>> {
    let colors = theme.colors;
    daily
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<7}", item.day),
                    Style::default().fg(colors.primary),
                ),
                Span::styled(
                    format!("{:<4}", glyph_or_placeholder(&item.icon)),
                    Style::default().fg(colors.primary),
                ),
                Span::styled(
                    format!("{:>4}°", item.low),
                    Style::default().fg(colors.accent.blue),
                ),
                Span::styled(" / ", Style::default().fg(colors.secondary)),
                Span::styled(
                    format!("{}°", item.high),
                    Style::default().fg(colors.accent.orange),
                ),
            ])
        })
        .collect()
}

fn build_details_lines(weather: &CityWeather, theme: &Theme) -> Vec<Line<'static>> {
    let colors = theme.colors;
    let pairs = [
        [
            ("UV Index", format!("{} {}", weather.uv_index, weather.uv_label)),
            ("Feels Like", format!("{}°", weather.feels_like)),
        ],
        [
            ("Humidity", format!("{}%", weather.humidity)),
            ("Wind", weather.wind.clone()),
        ],
        [
            ("Visibility", weather.visibility.clone()),
            ("Pressure", weather.pressure.clone()),
        ],
        [
            ("Sunrise", weather.sunrise.clone()),
            ("Sunset", weather.sunset.clone()),
        ],
    ];

    pairs
        .into_iter()
        .map(|row| {
            let spans = row
                .into_iter()
                .flat_map(|(label, value)| {
                    [
                        Span::styled(
                            format!(" {:<12}", label),
                            Style::default().fg(colors.secondary),
                        ),
                        Span::styled(
                            format!("{:<16}", value),
                            Style::default().fg(colors.primary),
                        ),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

fn build_hint_line(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        " s search  r refresh  t theme  j/k scroll  ? help  q quit",
        Style::default().fg(theme.colors.secondary),
    ))
}
