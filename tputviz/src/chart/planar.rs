//! Single-factor layout.
//!
//! Measurements are ordered by their level (stable, so equal levels keep file
//! order) and bar `i` is centered on tick `i`, counting from 1. Labels and
//! bars follow the same order.

// Byte rates are u64 values placed on a float axis
#![allow(clippy::cast_precision_loss)]

use crate::classification::classify;
use crate::domain::{ChartError, Measurement};

use super::spec::{Axis, Bar2d, PlanarChart, Tick};
use super::{level_label, BAR_HALF_WIDTH};

/// Lay out measurements that all vary a single factor.
///
/// The factor is the one declared by the first measurement.
///
/// # Errors
///
/// [`ChartError::MissingFactor`] when a measurement has no level for that factor,
/// [`ChartError::NoMeasurements`] when `measurements` is empty.
pub fn layout(measurements: &[Measurement]) -> Result<PlanarChart, ChartError> {
    let factor = measurements
        .first()
        .and_then(|m| m.factors.names().next())
        .ok_or(ChartError::NoMeasurements)?
        .to_owned();

    let mut ordered = measurements
        .iter()
        .enumerate()
        .map(|(index, m)| {
            m.factors
                .get(&factor)
                .map(|level| (level, m))
                .ok_or_else(|| ChartError::MissingFactor { measurement: index, factor: factor.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;
    ordered.sort_by_key(|&(level, _)| level);

    let mut ticks = Vec::with_capacity(ordered.len());
    let mut bars = Vec::with_capacity(ordered.len());
    for (tick, (level, m)) in (1_u32..).zip(ordered) {
        let position = f64::from(tick);
        let mean = m.throughput.mean as f64;
        ticks.push(Tick { position, label: level_label(&factor, level) });
        bars.push(Bar2d {
            x: position - BAR_HALF_WIDTH,
            width: 2.0 * BAR_HALF_WIDTH,
            height: mean,
            variance: classify(mean, m.throughput.std as f64),
        });
    }

    Ok(PlanarChart { x_axis: Axis { label: factor, ticks }, bars })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Variance;
    use crate::domain::{FactorLevels, Throughput};

    fn measurement(factor: &str, level: u64, mean: u64, std: u64) -> Measurement {
        let mut factors = FactorLevels::new();
        factors.set(factor, level);
        Measurement { factors, throughput: Throughput { mean, std } }
    }

    #[test]
    fn test_one_bar_per_measurement() {
        let measurements: Vec<Measurement> =
            [1, 2, 4, 8].into_iter().map(|qd| measurement("QD", qd, 100 * qd, 1)).collect();
        let chart = layout(&measurements).unwrap();

        assert_eq!(chart.bars.len(), 4);
        let ticks: Vec<f64> = chart.x_axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(ticks, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(chart.bars.iter().all(|b| (b.width - 0.5).abs() < f64::EPSILON));
        assert_eq!(chart.bars[0].x, 0.75);
        assert_eq!(chart.x_axis.label, "QD");
    }

    #[test]
    fn test_bars_follow_sorted_labels() {
        let measurements = vec![
            measurement("QD", 8, 800, 1),
            measurement("QD", 1, 100, 1),
            measurement("QD", 4, 400, 1),
        ];
        let chart = layout(&measurements).unwrap();

        let labels: Vec<&str> = chart.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        let heights: Vec<f64> = chart.bars.iter().map(|b| b.height).collect();
        assert_eq!(labels, vec!["1", "4", "8"]);
        assert_eq!(heights, vec![100.0, 400.0, 800.0]);
    }

    #[test]
    fn test_request_size_labels_and_colors() {
        let measurements =
            vec![measurement("RS", 1024, 1000, 50), measurement("RS", 2048, 2000, 800)];
        let chart = layout(&measurements).unwrap();

        assert_eq!(chart.x_axis.ticks[0].label, "1KB");
        assert_eq!(chart.x_axis.ticks[1].label, "2KB");
        assert_eq!(chart.bars[0].variance, Variance::Green);
        assert_eq!(chart.bars[1].variance, Variance::Red);
    }

    #[test]
    fn test_missing_factor_is_reported() {
        let measurements = vec![measurement("QD", 1, 10, 0), measurement("RS", 512, 10, 0)];
        let err = layout(&measurements).unwrap_err();
        assert_eq!(err, ChartError::MissingFactor { measurement: 1, factor: "QD".into() });
    }
}
