//! Chart specification handed to renderers.
//!
//! Everything here is already laid out: renderers only map these coordinates
//! onto their own surface and never look back at the measurements.

// Bar heights are u64 byte rates shown on a float axis
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

use crate::classification::Variance;
use crate::units::format_byte_rate;

/// Label of the value (height) axis
pub const METRIC_NAME: &str = "Throughput";

/// Axis tick: position in chart coordinates and its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Factor axis with its name and one tick per displayed level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub ticks: Vec<Tick>,
}

/// One bar of a single-factor chart. Drawn from `x` to `x + width`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar2d {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub variance: Variance,
}

/// One bar of a two-factor chart, anchored at its front-left-bottom corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub variance: Variance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanarChart {
    pub x_axis: Axis,
    pub bars: Vec<Bar2d>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialChart {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<Bar3d>,
}

/// Chart body, by number of factors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode")]
pub enum ChartBody {
    #[serde(rename = "2d")]
    Planar(PlanarChart),
    #[serde(rename = "3d")]
    Spatial(SpatialChart),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub variance: Variance,
    pub label: &'static str,
}

/// Fixed legend: one entry per variance bucket, noisiest first.
#[must_use]
pub fn variance_legend() -> Vec<LegendEntry> {
    Variance::ALL
        .into_iter()
        .map(|variance| LegendEntry { variance, label: variance.legend_label() })
        .collect()
}

/// Fully laid out chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub legend: Vec<LegendEntry>,
    pub body: ChartBody,
}

impl ChartSpec {
    /// Formatter for value-axis ticks and bar annotations.
    #[must_use]
    pub fn value_formatter(&self) -> fn(f64) -> String {
        format_byte_rate
    }

    /// Height of the tallest bar, 0 for an empty chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        match &self.body {
            ChartBody::Planar(chart) => chart.bars.iter().map(|b| b.height).fold(0.0, f64::max),
            ChartBody::Spatial(chart) => chart.bars.iter().map(|b| b.z + b.dz).fold(0.0, f64::max),
        }
    }

    /// `intervals + 1` evenly spaced value-axis ticks from 0 to [`Self::max_value`].
    ///
    /// A chart whose bars are all zero gets a single tick at 0.
    #[must_use]
    pub fn value_ticks(&self, intervals: usize) -> Vec<Tick> {
        let max = self.max_value();
        let format = self.value_formatter();
        if max <= 0.0 || intervals == 0 {
            return vec![Tick { position: 0.0, label: format(0.0) }];
        }
        (0..=intervals)
            .map(|i| {
                let position = max * i as f64 / intervals as f64;
                Tick { position, label: format(position) }
            })
            .collect()
    }

    /// Number of bars in the chart.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        match &self.body {
            ChartBody::Planar(chart) => chart.bars.len(),
            ChartBody::Spatial(chart) => chart.bars.len(),
        }
    }
}
