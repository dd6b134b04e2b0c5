//! Single-factor chart panel.
//!
//! ```text
//! ┌ Throughput ─────────────────────────┐
//! │ 1.9KB/s       ██████                │
//! │               ██████                │
//! │ 976B/s ██████ ██████                │
//! │        ██████ ██████                │
//! │  0B/s   1KB    2KB                  │
//! └──────────────── RS ─────────────────┘
//! ```
//!
//! Bars are drawn with ratatui's `BarChart`; the value axis is a separate
//! column on the left, aligned to the bar area.

// Terminal geometry is small; byte rates are shown as whole bar heights
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::chart::{PlanarChart, Tick};
use crate::units::format_byte_rate;

const MAX_BAR_WIDTH: u16 = 16;
const BAR_GAP: u16 = 1;
/// Value-axis ticks shown next to the bars
const VALUE_INTERVALS: usize = 4;

pub struct PlanarView<'a> {
    chart: &'a PlanarChart,
    value_ticks: Vec<Tick>,
    max_value: f64,
    theme: Theme,
}

impl<'a> PlanarView<'a> {
    pub fn new(chart: &'a PlanarChart, value_ticks: Vec<Tick>, theme: Theme) -> Self {
        let max_value = chart.bars.iter().map(|b| b.height).fold(0.0, f64::max);
        Self { chart, value_ticks, max_value, theme }
    }

    /// Number of ticks the caller should compute for the value axis.
    pub const fn value_intervals() -> usize {
        VALUE_INTERVALS
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let axis_width = self.value_ticks.iter().map(|t| t.label.len()).max().unwrap_or(0) as u16 + 1;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(axis_width), Constraint::Min(0)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Throughput")
            .title_bottom(Line::from(self.chart.x_axis.label.clone()).centered())
            .border_style(self.theme.border_style());

        let inner_width = cols[1].width.saturating_sub(2);
        let bar_width = bar_width_for(inner_width, self.chart.bars.len());

        let bars: Vec<Bar> = self
            .chart
            .bars
            .iter()
            .map(|bar| {
                let color = self.theme.variance_color(bar.variance);
                let label = tick_label_at(&self.chart.x_axis.ticks, bar.x + bar.width / 2.0);
                Bar::default()
                    .value(bar.height as u64)
                    .label(Line::from(label))
                    .text_value(format_byte_rate(bar.height))
                    .style(Style::new().fg(color))
                    .value_style(Style::new().fg(self.theme.background).bg(color))
            })
            .collect();

        let widget = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .max((self.max_value as u64).max(1))
            .label_style(self.theme.dim_style());
        f.render_widget(widget, cols[1]);

        // top border row, then the bar rows, then the label row
        let bar_rows = cols[1].height.saturating_sub(3);
        let axis = Paragraph::new(value_axis_lines(&self.value_ticks, self.max_value, bar_rows))
            .style(self.theme.dim_style());
        f.render_widget(axis, cols[0]);
    }
}

/// Widest bar that still fits `count` bars (with gaps) into `inner_width`.
fn bar_width_for(inner_width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    ((inner_width + BAR_GAP) / count).saturating_sub(BAR_GAP).clamp(1, MAX_BAR_WIDTH)
}

/// Label of the tick at `position`, empty if there is none.
fn tick_label_at(ticks: &[Tick], position: f64) -> String {
    ticks
        .iter()
        .find(|t| (t.position - position).abs() < 1e-9)
        .map(|t| t.label.clone())
        .unwrap_or_default()
}

/// Value-axis column: a blank row for the chart border, then `rows` rows with
/// each tick label on the row its value reaches.
fn value_axis_lines(ticks: &[Tick], max_value: f64, rows: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""); usize::from(rows) + 1];
    if rows == 0 {
        return lines;
    }
    let last_row = f64::from(rows - 1);
    for tick in ticks {
        let fraction = if max_value > 0.0 { tick.position / max_value } else { 0.0 };
        let row = ((1.0 - fraction) * last_row).round() as usize;
        lines[row + 1] = Line::from(tick.label.clone()).right_aligned();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(position: f64, label: &str) -> Tick {
        Tick { position, label: label.to_string() }
    }

    #[test]
    fn test_bar_width_fills_area() {
        assert_eq!(bar_width_for(40, 4), 9);
        assert_eq!(bar_width_for(200, 2), MAX_BAR_WIDTH);
        assert_eq!(bar_width_for(5, 10), 1);
    }

    #[test]
    fn test_tick_label_lookup() {
        let ticks = vec![tick(1.0, "1KB"), tick(2.0, "2KB")];
        assert_eq!(tick_label_at(&ticks, 0.75 + 0.25), "1KB");
        assert_eq!(tick_label_at(&ticks, 3.0), "");
    }

    #[test]
    fn test_value_axis_places_extremes() {
        let ticks = vec![tick(0.0, "0B/s"), tick(50.0, "50B/s"), tick(100.0, "100B/s")];
        let lines = value_axis_lines(&ticks, 100.0, 5);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].to_string(), "100B/s");
        assert_eq!(lines[3].to_string(), "50B/s");
        assert_eq!(lines[5].to_string(), "0B/s");
    }
}
