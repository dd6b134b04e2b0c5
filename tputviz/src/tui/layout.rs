//! Responsive layout for the chart view.
//!
//! Adapts the layout based on terminal dimensions to ensure usability
//! at various sizes, from minimal (40x10) to full-screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// Width breakpoints
const WIDTH_NO_LEGEND: u16 = 70; // Below this: chart takes the full width
const WIDTH_NARROW: u16 = 110; // Below this: tighter legend column

// Height breakpoints
const HEIGHT_MINIMAL: u16 = 14; // Below this: chart only, no header or status bar

const LEGEND_WIDTH: u16 = 28;
const LEGEND_WIDTH_NARROW: u16 = 24;

/// Computed layout configuration based on terminal dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Whether to show the title header (top)
    pub show_header: bool,

    /// Whether the terminal has room for the legend column (right)
    pub legend_fits: bool,

    /// Whether to show the key bindings bar (bottom)
    pub show_status_bar: bool,

    /// Legend column width in cells
    pub legend_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { show_header: true, legend_fits: true, show_status_bar: true, legend_width: LEGEND_WIDTH }
    }
}

/// Screen areas of the chart view; hidden panels have no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Option<Rect>,
    pub chart: Rect,
    pub legend: Option<Rect>,
    pub status: Option<Rect>,
}

impl LayoutConfig {
    /// Split `area` into panels, hiding the legend when `show_legend` is off.
    #[must_use]
    pub fn split(&self, area: Rect, show_legend: bool) -> Areas {
        let header_height = if self.show_header { 4 } else { 0 };
        let status_height = if self.show_status_bar { 3 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(status_height),
            ])
            .split(area);

        let (chart, legend) = if self.legend_fits && show_legend {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(self.legend_width)])
                .split(rows[1]);
            (cols[0], Some(cols[1]))
        } else {
            (rows[1], None)
        };

        Areas {
            header: self.show_header.then_some(rows[0]),
            chart,
            legend,
            status: self.show_status_bar.then_some(rows[2]),
        }
    }
}

/// Compute layout configuration based on terminal dimensions.
///
/// # Breakpoints
///
/// | Terminal Size | Behavior |
/// |---------------|----------|
/// | Width < 70    | No legend column |
/// | Width 70-110  | Narrow legend column |
/// | Width > 110   | Full legend column |
/// | Height < 14   | Chart only: no header, no status bar |
#[must_use]
pub fn compute_layout(width: u16, height: u16) -> LayoutConfig {
    let mut config = LayoutConfig::default();

    if width < WIDTH_NO_LEGEND {
        config.legend_fits = false;
    } else if width <= WIDTH_NARROW {
        config.legend_width = LEGEND_WIDTH_NARROW;
    }

    if height < HEIGHT_MINIMAL {
        config.show_header = false;
        config.show_status_bar = false;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let config = compute_layout(120, 40);
        assert!(config.show_header);
        assert!(config.legend_fits);
        assert!(config.show_status_bar);
        assert_eq!(config.legend_width, 28);
    }

    #[test]
    fn test_narrow_layout() {
        let config = compute_layout(80, 40);
        assert!(config.legend_fits);
        assert_eq!(config.legend_width, 24);
    }

    #[test]
    fn test_no_legend_on_small_width() {
        let config = compute_layout(50, 40);
        assert!(!config.legend_fits);
        let areas = config.split(Rect::new(0, 0, 50, 40), true);
        assert!(areas.legend.is_none());
        assert_eq!(areas.chart.width, 50);
    }

    #[test]
    fn test_minimal_height() {
        let config = compute_layout(120, 10);
        assert!(!config.show_header);
        assert!(!config.show_status_bar);
        let areas = config.split(Rect::new(0, 0, 120, 10), true);
        assert_eq!(areas.chart.height, 10);
    }

    #[test]
    fn test_split_full_layout() {
        let areas = compute_layout(120, 40).split(Rect::new(0, 0, 120, 40), true);
        assert_eq!(areas.header.map(|r| r.height), Some(4));
        assert_eq!(areas.status.map(|r| r.height), Some(3));
        assert_eq!(areas.legend.map(|r| r.width), Some(28));
        assert_eq!(areas.chart.height, 33);
    }

    #[test]
    fn test_legend_toggled_off() {
        let areas = compute_layout(120, 40).split(Rect::new(0, 0, 120, 40), false);
        assert!(areas.legend.is_none());
        assert_eq!(areas.chart.width, 120);
    }
}
