//! TUI color theme
//!
//! The theme is a plain value handed to the renderer; nothing is activated
//! globally.

use ratatui::style::{Color, Modifier, Style};

use crate::classification::Variance;

// HUD color scheme (F-35 inspired)
pub const HUD_GREEN: Color = Color::Rgb(0, 255, 0);
pub const CRITICAL_RED: Color = Color::Rgb(255, 0, 0);
pub const CAUTION_AMBER: Color = Color::Rgb(255, 191, 0);
pub const INFO_DIM: Color = Color::Rgb(0, 180, 0);
pub const BACKGROUND: Color = Color::Rgb(0, 20, 0);
/// Stands in for black bars on the dark HUD background
pub const UNRELIABLE_GRAY: Color = Color::Rgb(120, 120, 120);

/// Colors used by every panel of the chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub black_bar: Color,
    pub red_bar: Color,
    pub yellow_bar: Color,
    pub green_bar: Color,
}

impl Theme {
    /// Green-on-dark HUD look (default)
    #[must_use]
    pub const fn hud() -> Self {
        Self {
            background: BACKGROUND,
            text: HUD_GREEN,
            dim: INFO_DIM,
            accent: CAUTION_AMBER,
            border: HUD_GREEN,
            black_bar: UNRELIABLE_GRAY,
            red_bar: CRITICAL_RED,
            yellow_bar: CAUTION_AMBER,
            green_bar: HUD_GREEN,
        }
    }

    /// Terminal default colors, for light backgrounds and limited palettes
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            dim: Color::DarkGray,
            accent: Color::Blue,
            border: Color::Reset,
            black_bar: Color::Black,
            red_bar: Color::Red,
            yellow_bar: Color::Yellow,
            green_bar: Color::Green,
        }
    }

    #[must_use]
    pub fn variance_color(&self, variance: Variance) -> Color {
        match variance {
            Variance::Black => self.black_bar,
            Variance::Red => self.red_bar,
            Variance::Yellow => self.yellow_bar,
            Variance::Green => self.green_bar,
        }
    }

    #[must_use]
    pub fn heading(&self) -> Style {
        Style::new().fg(self.text).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::new().fg(self.dim)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::hud()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variance_has_distinct_color() {
        for theme in [Theme::hud(), Theme::plain()] {
            let colors: Vec<Color> =
                Variance::ALL.iter().map(|&v| theme.variance_color(v)).collect();
            for (i, a) in colors.iter().enumerate() {
                assert!(colors[i + 1..].iter().all(|b| b != a));
            }
        }
    }
}
