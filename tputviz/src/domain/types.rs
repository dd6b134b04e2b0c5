//! Benchmark result model
//!
//! A [`BenchResult`] is built once by the parser and is read-only afterwards.
//! The chart layout re-derives its own ordering from factor levels, so the
//! measurement order kept here is only the order the harness printed.

use std::fmt;

/// Access pattern under test, shared by every measurement of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pattern {
    pub is_consecutive: bool,
    pub is_read: bool,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsConsecutive: {}, IsRead: {}",
            u8::from(self.is_consecutive),
            u8::from(self.is_read)
        )
    }
}

/// Mean and standard deviation of the data rate, in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Throughput {
    pub mean: u64,
    pub std: u64,
}

/// Factor name → level assignment of one measurement.
///
/// Iteration order is declaration order. The two-factor layout picks its x and
/// y axes from this order, so a hash map would not do here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactorLevels {
    entries: Vec<(String, u64)>,
}

impl FactorLevels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `level` to `factor`.
    ///
    /// A factor that is already present keeps its position and gets the new level.
    pub fn set(&mut self, factor: impl Into<String>, level: u64) {
        let factor = factor.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == factor) {
            entry.1 = level;
        } else {
            self.entries.push((factor, level));
        }
    }

    #[must_use]
    pub fn get(&self, factor: &str) -> Option<u64> {
        self.entries.iter().find(|(name, _)| name == factor).map(|&(_, level)| level)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Factor names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FactorLevels {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut levels = Self::new();
        for (factor, level) in iter {
            levels.set(factor, level);
        }
        levels
    }
}

/// One point of the factor space and the throughput measured there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Measurement {
    pub factors: FactorLevels,
    pub throughput: Throughput,
}

/// Parsed result file: the run's access pattern plus all its measurements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BenchResult {
    pub pattern: Pattern,
    pub measurements: Vec<Measurement>,
}

impl BenchResult {
    /// Factor count of the first measurement, which decides the chart mode.
    #[must_use]
    pub fn factor_count(&self) -> Option<usize> {
        self.measurements.first().map(|m| m.factors.len())
    }
}
