//! Result file writer
//!
//! Prints a [`BenchResult`] the way the benchmark harness does, so that
//! reading the output back yields the same result.

use std::io::{self, Write};

use crate::domain::BenchResult;

/// Write `result` in the line-oriented result format.
///
/// The factor count line is taken from the first measurement (0 when there
/// are none).
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] for a factor name containing `\n`
/// or ending in `\r`, which would not read back unchanged, and any error from
/// the underlying writer.
pub fn write_result<W: Write>(result: &BenchResult, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", u8::from(result.pattern.is_consecutive))?;
    writeln!(out, "{}", u8::from(result.pattern.is_read))?;
    writeln!(out, "{}", result.measurements.len())?;
    writeln!(out, "{}", result.factor_count().unwrap_or(0))?;
    for measurement in &result.measurements {
        for (factor, level) in measurement.factors.iter() {
            if factor.contains('\n') || factor.ends_with('\r') {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("factor name {factor:?} spans a line break"),
                ));
            }
            writeln!(out, "{factor}\n{level}")?;
        }
        writeln!(out, "{}\n{}", measurement.throughput.mean, measurement.throughput.std)?;
    }
    out.flush()
}
