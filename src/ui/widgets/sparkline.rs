//! Temperature sparkline widget for the hourly strip

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Block characters for different temperature levels (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A sparkline of temperatures, one block per column
///
/// Heights are scaled between the lowest and highest value shown, so a flat
/// series draws as a flat line.
pub struct TemperatureSparkline<'a> {
    temps: &'a [i32],
    /// Cells per entry; the block sits in the middle of its column
    column_width: u16,
    /// Highlighted entry (the current hour)
    current_position: Option<usize>,
    style: Style,
    marker_style: Style,
}

impl<'a> TemperatureSparkline<'a> {
    pub fn new(temps: &'a [i32]) -> Self {
        Self {
            temps,
            column_width: 1,
            current_position: None,
            style: Style::default().fg(Color::Cyan),
            marker_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn column_width(mut self, width: u16) -> Self {
        self.column_width = width.max(1);
        self
    }

    pub fn current_position(mut self, pos: usize) -> Self {
        self.current_position = Some(pos);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn marker_style(mut self, style: Style) -> Self {
        self.marker_style = style;
        self
    }

    fn temp_to_block(&self, temp: i32) -> char {
        let min = self.temps.iter().copied().min().unwrap_or(temp);
        let max = self.temps.iter().copied().max().unwrap_or(temp);
        if max <= min {
            return BLOCKS[3];
        }
        let normalized = ((temp - min) as f64 / (max - min) as f64).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for TemperatureSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = (area.width / self.column_width) as usize;

        for (i, temp) in self.temps.iter().take(columns).enumerate() {
            let block = self.temp_to_block(*temp);
            let x = area.x + i as u16 * self.column_width + self.column_width / 2;
            let y = area.y;

            let style = if self.current_position == Some(i) {
                self.marker_style
            } else {
                self.style
            };

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}
