//! Chart export
//!
//! Writes the laid out chart as JSON, for plotting tools outside the terminal.
//! Only the chart specification is exported, not the measurements.

pub mod chart_json;

pub use chart_json::{ChartExporter, DEFAULT_VALUE_INTERVALS};
