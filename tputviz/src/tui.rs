//! # Terminal User Interface (TUI)
//!
//! Draws a laid out [`ChartSpec`] in the terminal using `ratatui`.
//!
//! ## Panels
//!
//! - **Header** - chart title (access pattern and metric)
//! - **Chart** - `planar` bar chart for one factor, `spatial` projection for two
//! - **Legend** - variance buckets and their colors
//! - **Status bar** - key bindings
//!
//! ## Keys
//!
//! - `q` / `Esc` - quit
//! - `l` - toggle the legend
//! - `?` - help overlay
//!
//! Colors come from the [`Theme`] passed to [`ChartApp::new`].

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, IsTerminal};
use std::time::Duration;

pub mod layout;
mod legend;
mod planar;
mod spatial;
pub mod theme;

use layout::compute_layout;
use legend::LegendPanel;
use planar::PlanarView;
use spatial::SpatialView;

pub use theme::Theme;

use crate::chart::{ChartBody, ChartSpec};
use crate::domain::TuiError;

/// Value-axis intervals of the two-factor projection
const SPATIAL_VALUE_INTERVALS: usize = 4;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Show `chart` until the user quits.
///
/// # Errors
/// See [`ChartApp::run`].
pub fn run(chart: ChartSpec, theme: Theme) -> Result<(), TuiError> {
    ChartApp::new(chart, theme).run()
}

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    /// Chart with its side panels
    Chart,
    /// Help overlay with keyboard shortcuts
    Help,
}

/// TUI application showing a single chart until the user quits.
pub struct ChartApp {
    chart: ChartSpec,
    theme: Theme,
    view_mode: ViewMode,
    show_legend: bool,
    should_quit: bool,
}

impl ChartApp {
    #[must_use]
    pub fn new(chart: ChartSpec, theme: Theme) -> Self {
        Self { chart, theme, view_mode: ViewMode::Chart, show_legend: true, should_quit: false }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.view_mode {
            ViewMode::Chart => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('l' | 'L') => self.show_legend = !self.show_legend,
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                _ => {}
            },
            ViewMode::Help => {
                // Any key closes help
                self.view_mode = ViewMode::Chart;
            }
        }
    }

    /// Draw one frame. Does not touch the terminal beyond `f`.
    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(Block::default().style(Style::new().bg(self.theme.background)), area);

        let areas = compute_layout(area.width, area.height).split(area, self.show_legend);

        if let Some(header) = areas.header {
            self.render_header(f, header);
        }

        match &self.chart.body {
            ChartBody::Planar(chart) => {
                let ticks = self.chart.value_ticks(PlanarView::value_intervals());
                PlanarView::new(chart, ticks, self.theme).render(f, areas.chart);
            }
            ChartBody::Spatial(chart) => {
                let ticks = self.chart.value_ticks(SPATIAL_VALUE_INTERVALS);
                SpatialView::new(chart, ticks, self.theme).render(f, areas.chart);
            }
        }

        if let Some(legend) = areas.legend {
            LegendPanel::new(&self.chart.legend, self.theme).render(f, legend);
        }
        if let Some(status) = areas.status {
            self.render_status_bar(f, status);
        }
        if self.view_mode == ViewMode::Help {
            render_help_overlay(f, area, self.theme);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .chart
            .title
            .lines()
            .map(|line| Line::from(Span::styled(line.to_owned(), self.theme.heading())))
            .collect();
        let header = Paragraph::new(lines).block(
            Block::default().borders(Borders::ALL).border_style(self.theme.border_style()),
        );
        f.render_widget(header, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let key = self.theme.key_style();
        let dim = self.theme.dim_style();
        let status_line = Line::from(vec![
            Span::styled("Q", key),
            Span::styled(":Quit ", dim),
            Span::styled("L", key),
            Span::styled(":Legend ", dim),
            Span::styled("?", key),
            Span::styled(":Help ", dim),
            Span::styled(format!("[{} bars]", self.chart.bar_count()), dim),
        ]);
        let status = Paragraph::new(vec![status_line]).block(
            Block::default().borders(Borders::ALL).border_style(self.theme.border_style()),
        );
        f.render_widget(status, area);
    }

    /// Run the TUI event loop
    ///
    /// # Errors
    /// Returns an error if stdout is not a terminal, or if terminal setup or
    /// rendering fails. The terminal is restored either way.
    pub fn run(mut self) -> Result<(), TuiError> {
        if !io::stdout().is_terminal() {
            return Err(TuiError::Terminal(
                "stdout is not a terminal (use --headless --export FILE)".to_string(),
            ));
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let outcome = self.event_loop(&mut terminal);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        outcome
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), TuiError> {
        debug!("Entering chart view with {} bars", self.chart.bar_count());
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Render the help overlay explaining the chart and keyboard shortcuts
fn render_help_overlay(f: &mut Frame, area: Rect, theme: Theme) {
    let popup_area = centered_popup(area, 70, 16);
    let heading = theme.heading();
    let dim = theme.dim_style();
    let key = theme.key_style();

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", heading)),
        Line::from(Span::styled("  Mean throughput for every measured factor level.", dim)),
        Line::from(Span::styled("  Bar color shows how noisy the measurement was:", dim)),
        Line::from(Span::styled("  the larger std is relative to mean, the less to trust it.", dim)),
        Line::from(""),
        Line::from(Span::styled("  Charts", heading)),
        Line::from(vec![
            Span::styled("  1 factor  ", key.add_modifier(Modifier::BOLD)),
            Span::styled("one bar per level, sorted by level", dim),
        ]),
        Line::from(vec![
            Span::styled("  2 factors ", key.add_modifier(Modifier::BOLD)),
            Span::styled("grid of bars, depth axis recedes to the right", dim),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Keys", heading)),
        Line::from(vec![
            Span::styled("  L", key),
            Span::styled(" Legend   ", dim),
            Span::styled("Q", key),
            Span::styled(" Quit", dim),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", dim)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(theme.background).fg(theme.text)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::format::parse_result;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn app(text: &str) -> ChartApp {
        let chart = build_chart(&parse_result(text.as_bytes()).unwrap()).unwrap();
        ChartApp::new(chart, Theme::hud())
    }

    fn render(app: &ChartApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    const PLANAR: &str = "1\n0\n2\n1\nRS\n1024\n1000\n50\nRS\n2048\n2000\n800\n";
    const SPATIAL: &str = "0\n1\n2\n2\nQD\n1\nRS\n512\n10\n0\nQD\n2\nRS\n512\n20\n0\n";

    #[test]
    fn test_planar_chart_renders_title_labels_and_legend() {
        let screen = render(&app(PLANAR), 100, 30);

        assert!(screen.contains("IsConsecutive: 1, IsRead: 0"));
        assert!(screen.contains("Metric: Throughput"));
        assert!(screen.contains("1KB"));
        assert!(screen.contains("2KB"));
        assert!(screen.contains("Variance"));
        assert!(screen.contains("std < 0.10 * mean"));
    }

    #[test]
    fn test_spatial_chart_renders_axis_names() {
        let screen = render(&app(SPATIAL), 100, 30);

        assert!(screen.contains("IsConsecutive: 0, IsRead: 1"));
        assert!(screen.contains("x: QD"));
        assert!(screen.contains("y: RS"));
        assert!(screen.contains("512B"));
    }

    #[test]
    fn test_small_terminal_drops_side_panels() {
        let screen = render(&app(PLANAR), 50, 10);
        assert!(!screen.contains("Variance"));
        assert!(!screen.contains("IsConsecutive"));
    }

    #[test]
    fn test_keys_toggle_legend_and_quit() {
        let mut app = app(PLANAR);
        app.handle_key(KeyCode::Char('l'));
        assert!(!render(&app, 120, 40).contains("Variance"));

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app(PLANAR);
        app.handle_key(KeyCode::Char('?'));
        assert!(render(&app, 120, 40).contains("Press any key to close"));

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert!(!render(&app, 120, 40).contains("Press any key to close"));
    }
}
