//! Line-oriented result file format
//!
//! - `reader`: parse a result file into a [`BenchResult`](crate::domain::BenchResult)
//! - `writer`: print a result in the same format

pub mod reader;
pub mod writer;

pub use reader::{parse_file, parse_result};
pub use writer::write_result;
