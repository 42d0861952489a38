use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, SeriesDefinition};
use crate::error::{ChartError, ChartResult};

pub const LINE_CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Axis titles and the unit suffix appended to y tick labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    #[serde(default)]
    pub y_axis_label: String,
    #[serde(default)]
    pub y_axis_unit: String,
}

/// Everything a line chart is constructed from.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineChartConfig {
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub series: Vec<SeriesDefinition>,
    #[serde(default)]
    pub labels: ChartLabels,
    /// Starting y-axis tick spacing before the tick-factor search adjusts it.
    #[serde(default = "default_y_axis_tick_factor")]
    pub y_axis_tick_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: LineChartConfig,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            series: Vec::new(),
            labels: ChartLabels::default(),
            y_axis_tick_factor: default_y_axis_tick_factor(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new(data: Vec<DataPoint>, series: Vec<SeriesDefinition>) -> Self {
        Self {
            data,
            series,
            ..Self::default()
        }
    }

    /// Sets the y-axis title and tick unit suffix.
    #[must_use]
    pub fn with_labels(
        mut self,
        y_axis_label: impl Into<String>,
        y_axis_unit: impl Into<String>,
    ) -> Self {
        self.labels = ChartLabels {
            y_axis_label: y_axis_label.into(),
            y_axis_unit: y_axis_unit.into(),
        };
        self
    }

    /// Sets the base y-axis tick factor.
    #[must_use]
    pub fn with_y_axis_tick_factor(mut self, factor: f64) -> Self {
        self.y_axis_tick_factor = factor;
        self
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LineChartConfigJsonContractV1 {
            schema_version: LINE_CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<LineChartConfig>(input) {
            return Ok(config);
        }
        let payload: LineChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json payload: {e}"))
        })?;
        if payload.schema_version != LINE_CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_y_axis_tick_factor() -> f64 {
    1.0
}
