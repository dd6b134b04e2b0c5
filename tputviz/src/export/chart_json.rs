use serde::Serialize;
use std::io::Write;

use crate::chart::{ChartSpec, Tick};
use crate::domain::ExportError;

/// Default number of intervals on the exported value axis
pub const DEFAULT_VALUE_INTERVALS: usize = 5;

/// Exported chart: the laid out chart plus a pre-formatted value axis,
/// since a JSON consumer cannot call back into our formatter.
#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    #[serde(flatten)]
    chart: &'a ChartSpec,
    value_axis: ValueAxis,
}

#[derive(Debug, Serialize)]
struct ValueAxis {
    label: &'static str,
    ticks: Vec<Tick>,
}

/// JSON exporter for chart specifications
pub struct ChartExporter {
    value_intervals: usize,
}

impl ChartExporter {
    #[must_use]
    pub fn new() -> Self {
        Self { value_intervals: DEFAULT_VALUE_INTERVALS }
    }

    /// Split the exported value axis into `intervals` steps.
    #[must_use]
    pub fn with_value_intervals(mut self, intervals: usize) -> Self {
        self.value_intervals = intervals;
        self
    }

    /// Export the chart to any writer (file, stdout, buffer, etc.)
    ///
    /// # Example
    /// ```
    /// use tputviz::chart::build_chart;
    /// use tputviz::export::ChartExporter;
    /// use tputviz::format::parse_result;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let result = parse_result("0\n1\n1\n1\nQD\n8\n1000\n10\n".as_bytes())?;
    /// let chart = build_chart(&result)?;
    ///
    /// let mut buffer = Vec::new();
    /// ChartExporter::new().export(&chart, &mut buffer)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when serialization or the writer fails.
    pub fn export<W: Write>(&self, chart: &ChartSpec, mut writer: W) -> Result<(), ExportError> {
        let document = ChartDocument {
            chart,
            value_axis: ValueAxis {
                label: crate::chart::spec::METRIC_NAME,
                ticks: chart.value_ticks(self.value_intervals),
            },
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for ChartExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::format::parse_result;

    fn export(text: &str) -> serde_json::Value {
        let chart = build_chart(&parse_result(text.as_bytes()).unwrap()).unwrap();
        let mut buffer = Vec::new();
        ChartExporter::new().with_value_intervals(2).export(&chart, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_planar_export_structure() {
        let json = export("1\n0\n2\n1\nRS\n1024\n1000\n50\nRS\n2048\n2000\n800\n");

        assert_eq!(json["body"]["mode"], "2d");
        assert_eq!(json["body"]["x_axis"]["label"], "RS");
        assert_eq!(json["body"]["x_axis"]["ticks"][1]["label"], "2KB");
        assert_eq!(json["body"]["bars"][0]["variance"], "green");
        assert_eq!(json["body"]["bars"][1]["variance"], "red");
        assert_eq!(json["legend"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["value_axis"]["label"], "Throughput");
        assert_eq!(json["value_axis"]["ticks"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["value_axis"]["ticks"][2]["label"], "2.0KB/s");
    }

    #[test]
    fn test_spatial_export_structure() {
        let json = export("0\n0\n2\n2\nQD\n1\nRS\n512\n10\n0\nQD\n2\nRS\n512\n20\n0\n");

        assert_eq!(json["body"]["mode"], "3d");
        assert_eq!(json["body"]["y_axis"]["label"], "RS");
        assert_eq!(json["body"]["y_axis"]["ticks"][0]["label"], "512B");
        assert_eq!(json["body"]["bars"][1]["dz"], 20.0);
    }
}
