//! Two-factor layout.
//!
//! Each factor's distinct levels become evenly spaced ticks (1, 2, ...) on its
//! own axis, in ascending order. A measurement's bar stands on the grid cell
//! of its two levels.
//!
//! # Imbalance compensation
//!
//! With 8 levels on x and 2 on y, a square footprint would make the bars look
//! four times too wide along y relative to the axis length. When one axis has
//! more than twice (integer ratio) as many levels as the other, the footprint
//! along the shorter axis is divided by that ratio.

// Levels and byte rates are u64 values placed on float axes
#![allow(clippy::cast_precision_loss)]

use std::collections::{BTreeMap, BTreeSet};

use crate::classification::classify;
use crate::domain::{ChartError, Measurement};

use super::spec::{Axis, Bar3d, SpatialChart, Tick};
use super::{level_label, BAR_HALF_WIDTH};

/// Integer level ratio above which the shorter axis' bars are narrowed
const IMBALANCE_RATIO: usize = 2;

/// Distinct levels of one factor, ascending, with their tick positions.
struct FactorAxis {
    name: String,
    ticks: BTreeMap<u64, f64>,
}

impl FactorAxis {
    fn from_levels(name: &str, levels: impl Iterator<Item = u64>) -> Self {
        let levels = levels.collect::<BTreeSet<_>>();
        let ticks = (1_u32..).zip(levels).map(|(tick, level)| (level, f64::from(tick))).collect();
        Self { name: name.to_owned(), ticks }
    }

    /// Tick position of `level`, counting from 1. `level` must be one the
    /// axis was built from.
    fn tick_of(&self, level: u64) -> f64 {
        self.ticks[&level]
    }

    fn into_axis(self) -> Axis {
        let ticks = self
            .ticks
            .iter()
            .map(|(&level, &position)| Tick { position, label: level_label(&self.name, level) })
            .collect();
        Axis { label: self.name, ticks }
    }
}

/// Bar half-widths `(x, y)` for the given distinct level counts.
///
/// An empty axis counts as one level.
fn half_widths(x_levels: usize, y_levels: usize) -> (f64, f64) {
    let (x_levels, y_levels) = (x_levels.max(1), y_levels.max(1));
    let x_to_y = x_levels / y_levels;
    let y_to_x = y_levels / x_levels;

    let mut half_x = BAR_HALF_WIDTH;
    let mut half_y = BAR_HALF_WIDTH;
    if x_to_y > IMBALANCE_RATIO {
        half_y /= x_to_y as f64;
    }
    if y_to_x > IMBALANCE_RATIO {
        half_x /= y_to_x as f64;
    }
    (half_x, half_y)
}

/// Lay out measurements that vary two factors.
///
/// The x factor is the first one declared by the first measurement, y the second.
/// Bars keep the measurements' order.
///
/// # Errors
///
/// [`ChartError::MissingFactor`] when a measurement lacks either factor,
/// [`ChartError::UnsupportedFactorCount`] when the first measurement has fewer than two.
pub fn layout(measurements: &[Measurement]) -> Result<SpatialChart, ChartError> {
    let first = measurements.first().ok_or(ChartError::NoMeasurements)?;
    let mut names = first.factors.names();
    let (Some(x_name), Some(y_name)) = (names.next(), names.next()) else {
        return Err(ChartError::UnsupportedFactorCount(first.factors.len()));
    };

    let levels = measurements
        .iter()
        .enumerate()
        .map(|(index, m)| {
            let level = |factor: &str| {
                m.factors.get(factor).ok_or_else(|| ChartError::MissingFactor {
                    measurement: index,
                    factor: factor.to_owned(),
                })
            };
            Ok::<_, ChartError>((level(x_name)?, level(y_name)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let x_axis = FactorAxis::from_levels(x_name, levels.iter().map(|&(x, _)| x));
    let y_axis = FactorAxis::from_levels(y_name, levels.iter().map(|&(_, y)| y));
    let (half_x, half_y) = half_widths(x_axis.ticks.len(), y_axis.ticks.len());

    let bars = measurements
        .iter()
        .zip(&levels)
        .map(|(m, &(x_level, y_level))| {
            let x = x_axis.tick_of(x_level);
            let y = y_axis.tick_of(y_level);
            let mean = m.throughput.mean as f64;
            Bar3d {
                x: x - half_x,
                y: y - half_y,
                z: 0.0,
                dx: 2.0 * half_x,
                dy: 2.0 * half_y,
                dz: mean,
                variance: classify(mean, m.throughput.std as f64),
            }
        })
        .collect();

    Ok(SpatialChart { x_axis: x_axis.into_axis(), y_axis: y_axis.into_axis(), bars })
}
