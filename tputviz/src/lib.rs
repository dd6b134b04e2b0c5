//! # tputviz - Storage Benchmark Throughput Charts
//!
//! tputviz reads the line-oriented result file of a storage throughput
//! benchmark and draws mean throughput per measured factor level as a bar
//! chart, coloring each bar by how noisy its measurement was.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ result file  │──▶│    format    │──▶│    chart     │
//! │  (.txt)      │   │  (parser)    │   │  (layout)    │
//! └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                              │ ChartSpec
//!                            ┌─────────────────┴────────────────┐
//!                            ▼                                  ▼
//!                     ┌──────────────┐                   ┌──────────────┐
//!                     │     TUI      │                   │    Export    │
//!                     │  (terminal)  │                   │ (chart.json) │
//!                     └──────────────┘                   └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`format`]: reading and writing the result file format
//! - [`chart`]: bar placement for one factor (2D) or two factors (3D)
//! - [`classification`]: variance buckets from mean and standard deviation
//! - [`units`]: human-readable byte sizes and byte rates
//! - [`export`]: the laid out chart as JSON
//! - [`tui`]: terminal chart view
//! - [`cli`]: command-line arguments
//! - [`domain`]: result types and error enums
//!
//! ## Typical Usage
//!
//! ```bash
//! # Chart a result file
//! ./tputviz results.txt
//!
//! # Export the layout without opening the terminal view
//! ./tputviz results.txt --headless --export chart.json
//! ```

pub mod chart;
pub mod classification;
pub mod cli;
pub mod domain;
pub mod export;
pub mod format;
pub mod tui;
pub mod units;
