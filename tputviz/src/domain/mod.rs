//! Domain model for tputviz
//!
//! This module contains the result data model and the error types shared by
//! the parser, the chart layout and the renderers.

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{BenchResult, FactorLevels, Measurement, Pattern, Throughput};

pub use errors::{ChartError, ExportError, ParseError, TuiError};
