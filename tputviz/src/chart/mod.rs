//! Chart layout
//!
//! Turns a [`BenchResult`] into a [`ChartSpec`]: bar positions, sizes, colors
//! and axis labels. The factor count of the first measurement picks the mode:
//!
//! - 1 factor → [`planar`]: one bar per measurement along the x axis
//! - 2 factors → [`spatial`]: a grid of bars over both factors' levels
//!
//! Layout is a pure transform; it does not log beyond `debug` and never
//! touches the terminal.

// Levels and byte rates are u64 values placed on float axes
#![allow(clippy::cast_precision_loss)]

pub mod planar;
pub mod spatial;
pub mod spec;

use log::debug;

use crate::domain::{BenchResult, ChartError};
use crate::units::format_bytes;

pub use spec::{
    Axis, Bar2d, Bar3d, ChartBody, ChartSpec, LegendEntry, PlanarChart, SpatialChart, Tick,
};

/// Half of a bar's footprint along a factor axis, before imbalance compensation
pub const BAR_HALF_WIDTH: f64 = 0.25;

/// Factor whose levels are byte counts and get unit-formatted tick labels
pub const BYTE_SIZED_FACTOR: &str = "RS";

/// Lay out `result` as a one- or two-factor bar chart.
///
/// # Errors
///
/// - [`ChartError::NoMeasurements`] for an empty result
/// - [`ChartError::UnsupportedFactorCount`] unless the first measurement has 1 or 2 factors
/// - [`ChartError::MissingFactor`] when a measurement lacks a charted factor
pub fn build_chart(result: &BenchResult) -> Result<ChartSpec, ChartError> {
    let factor_count = result.factor_count().ok_or(ChartError::NoMeasurements)?;
    let body = match factor_count {
        1 => ChartBody::Planar(planar::layout(&result.measurements)?),
        2 => ChartBody::Spatial(spatial::layout(&result.measurements)?),
        n => return Err(ChartError::UnsupportedFactorCount(n)),
    };

    let spec = ChartSpec {
        title: format!("{}\nMetric: {}", result.pattern, spec::METRIC_NAME),
        legend: spec::variance_legend(),
        body,
    };
    debug!("Laid out {} bars for {factor_count} factor(s)", spec.bar_count());
    Ok(spec)
}

/// Tick label for one level of `factor`.
#[must_use]
pub fn level_label(factor: &str, level: u64) -> String {
    if factor == BYTE_SIZED_FACTOR {
        format_bytes(level as f64)
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FactorLevels, Measurement, Pattern, Throughput};

    fn result_with_factors(factors: &[&[(&str, u64)]]) -> BenchResult {
        BenchResult {
            pattern: Pattern { is_consecutive: true, is_read: false },
            measurements: factors
                .iter()
                .map(|levels| Measurement {
                    factors: levels.iter().copied().collect::<FactorLevels>(),
                    throughput: Throughput { mean: 100, std: 1 },
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_factor_selects_planar_mode() {
        let chart = build_chart(&result_with_factors(&[&[("QD", 1)]])).unwrap();
        assert!(matches!(chart.body, ChartBody::Planar(_)));
    }

    #[test]
    fn test_two_factors_select_spatial_mode() {
        let chart = build_chart(&result_with_factors(&[&[("QD", 1), ("RS", 512)]])).unwrap();
        assert!(matches!(chart.body, ChartBody::Spatial(_)));
    }

    #[test]
    fn test_three_factors_are_unsupported() {
        let result = result_with_factors(&[&[("QD", 1), ("RS", 512), ("DIO", 0)]]);
        assert_eq!(build_chart(&result), Err(ChartError::UnsupportedFactorCount(3)));
    }

    #[test]
    fn test_zero_factors_are_unsupported() {
        let result = result_with_factors(&[&[]]);
        assert_eq!(build_chart(&result), Err(ChartError::UnsupportedFactorCount(0)));
    }

    #[test]
    fn test_empty_result_has_nothing_to_plot() {
        assert_eq!(build_chart(&BenchResult::default()), Err(ChartError::NoMeasurements));
    }

    #[test]
    fn test_title_carries_pattern_flags() {
        let chart = build_chart(&result_with_factors(&[&[("QD", 1)]])).unwrap();
        assert_eq!(chart.title, "IsConsecutive: 1, IsRead: 0\nMetric: Throughput");
        assert_eq!(chart.legend.len(), 4);
    }

    #[test]
    fn test_level_label_formats_request_size_only() {
        assert_eq!(level_label("RS", 65536), "64KB");
        assert_eq!(level_label("QD", 65536), "65536");
    }
}
