//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::tui::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "tputviz",
    version,
    about = "Plot storage benchmark throughput results",
    after_help = "\
EXAMPLES:
    tputviz results.txt                          Chart a result file in the terminal
    tputviz                                      Ask for the result file interactively
    tputviz results.txt --headless --export c.json
                                                 Write the laid out chart as JSON"
)]
pub struct Args {
    /// Benchmark result file (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Export the laid out chart as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Run without TUI (requires --export)
    #[arg(long, requires = "export")]
    pub headless: bool,

    /// Color theme of the chart view
    #[arg(long, value_enum, default_value_t = ThemeArg::Hud)]
    pub theme: ThemeArg,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Green-on-dark HUD colors
    Hud,
    /// Terminal default colors
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Hud => Theme::hud(),
            ThemeArg::Plain => Theme::plain(),
        }
    }
}
