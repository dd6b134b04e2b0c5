//! Result file reader
//!
//! The benchmark harness prints one field per line, with no header, comments
//! or blank lines:
//!
//! ```text
//! is_consecutive      0 or 1
//! is_read             0 or 1
//! measurement count   N
//! factor count        K
//! N times:
//!     K times:
//!         factor name
//!         factor level
//!     throughput mean
//!     throughput std
//! ```
//!
//! Anything after the last declared measurement is ignored.

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::domain::{BenchResult, FactorLevels, Measurement, ParseError, Pattern, Throughput};

/// Upper bound for pre-allocation from the declared measurement count.
const MAX_PREALLOCATED: usize = 4096;

/// Line cursor that remembers the 1-based number of the last line read.
struct LineReader<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0, buf: Vec::new() }
    }

    /// Next line with its terminator (`\n` or `\r\n`) removed.
    ///
    /// A line that is not valid UTF-8 is a format error of `field`.
    fn next_line(&mut self, field: &'static str) -> Result<&str, ParseError> {
        self.buf.clear();
        self.line += 1;
        let line = self.line;
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(ParseError::Truncated { line, field });
        }
        let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        std::str::from_utf8(bytes).map_err(|_| ParseError::Format {
            line,
            field,
            value: String::from_utf8_lossy(bytes).into_owned(),
        })
    }

    fn next_int<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let line = self.line + 1;
        let text = self.next_line(field)?;
        text.trim().parse().map_err(|_| ParseError::Format { line, field, value: text.to_owned() })
    }

    fn next_flag(&mut self, field: &'static str) -> Result<bool, ParseError> {
        let line = self.line + 1;
        match self.next_int::<u64>(field)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ParseError::Format { line, field, value: other.to_string() }),
        }
    }
}

/// Parse a result file from any buffered source.
///
/// # Errors
///
/// - [`ParseError::Format`] for a malformed integer or flag
/// - [`ParseError::Truncated`] when the input ends before the declared counts are met
/// - [`ParseError::InconsistentFactorCount`] when measurements disagree on factor count
/// - [`ParseError::Io`] when the source cannot be read
pub fn parse_result<R: BufRead>(reader: R) -> Result<BenchResult, ParseError> {
    let mut lines = LineReader::new(reader);

    let pattern = Pattern {
        is_consecutive: lines.next_flag("is_consecutive flag")?,
        is_read: lines.next_flag("is_read flag")?,
    };
    let measurement_count: usize = lines.next_int("measurement count")?;
    let factor_count: usize = lines.next_int("factor count")?;
    debug!("Declared {measurement_count} measurements with {factor_count} factors each");

    let mut measurements = Vec::with_capacity(measurement_count.min(MAX_PREALLOCATED));
    for _ in 0..measurement_count {
        measurements.push(parse_measurement(&mut lines, factor_count)?);
    }

    validate_factor_counts(&measurements)?;
    info!("Parsed {} measurements ({pattern})", measurements.len());

    Ok(BenchResult { pattern, measurements })
}

/// Open `path`, parse it and close it again, whatever the outcome.
///
/// # Errors
///
/// Same as [`parse_result`]; failing to open the file is reported as [`ParseError::Io`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<BenchResult, ParseError> {
    let path = path.as_ref();
    debug!("Reading result file {}", path.display());
    let file = File::open(path)?;
    parse_result(BufReader::new(file))
}

fn parse_measurement<R: BufRead>(
    lines: &mut LineReader<R>,
    factor_count: usize,
) -> Result<Measurement, ParseError> {
    let mut factors = FactorLevels::new();
    for _ in 0..factor_count {
        let name = lines.next_line("factor name")?.to_owned();
        let level = lines.next_int("factor level")?;
        factors.set(name, level);
    }
    let mean = lines.next_int("throughput mean")?;
    let std = lines.next_int("throughput std")?;
    let throughput = Throughput { mean, std };
    Ok(Measurement { factors, throughput })
}

/// Every measurement must carry as many distinct factors as the first one.
///
/// A factor name repeated inside one measurement collapses into a single
/// entry, which is how a count mismatch shows up for a well-formed file.
fn validate_factor_counts(measurements: &[Measurement]) -> Result<(), ParseError> {
    let Some(first) = measurements.first() else {
        return Ok(());
    };
    let expected = first.factors.len();
    match measurements.iter().position(|m| m.factors.len() != expected) {
        Some(measurement) => Err(ParseError::InconsistentFactorCount {
            measurement,
            expected,
            found: measurements[measurement].factors.len(),
        }),
        None => Ok(()),
    }
}
