//! Legend panel - one swatch per variance bucket.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::chart::LegendEntry;

pub struct LegendPanel<'a> {
    entries: &'a [LegendEntry],
    theme: Theme,
}

impl<'a> LegendPanel<'a> {
    pub fn new(entries: &'a [LegendEntry], theme: Theme) -> Self {
        Self { entries, theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(" ██ ", Style::new().fg(self.theme.variance_color(entry.variance))),
                    Span::styled(entry.label, Style::new().fg(self.theme.text)),
                ])
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Variance")
                .border_style(self.theme.border_style()),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::variance_legend;

    #[test]
    fn test_legend_lines_follow_entries() {
        let entries = variance_legend();
        let lines = LegendPanel::new(&entries, Theme::hud()).lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].to_string().ends_with("std >= 0.5 * mean"));
        assert!(lines[3].to_string().ends_with("std < 0.10 * mean"));
    }
}
