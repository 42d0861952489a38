mod chart_config;
mod draw_options;
mod frame_builder;
mod line_chart;

pub use chart_config::{
    ChartLabels, LINE_CHART_CONFIG_JSON_SCHEMA_V1, LineChartConfig, LineChartConfigJsonContractV1,
};
pub use draw_options::{DrawOptions, Margin};
pub use line_chart::{DrawOutput, LineChart};
