use tracing::debug;

use crate::core::tick_factor::validate_base_factor;
use crate::core::{
    AxisPlan, DataPoint, LinearScale, PartitionedData, SeriesSet, compute_axis_plan, partition,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{FrameInputs, build_frame};
use super::{ChartLabels, DrawOptions, LineChartConfig};

/// Result of one draw pass, handed back so callers can place overlays with
/// the same scales the frame used.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutput {
    pub plan: AxisPlan,
    pub data: PartitionedData,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

/// One line chart instance.
///
/// Raw points, series definitions and labels are fixed at construction.
/// Partitioned data and the axis plan are derived again on every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    points: Vec<DataPoint>,
    series: SeriesSet,
    labels: ChartLabels,
    y_axis_tick_factor: f64,
}

impl LineChart {
    pub fn new(config: LineChartConfig) -> ChartResult<Self> {
        validate_base_factor(config.y_axis_tick_factor)?;
        if config.data.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        let series = SeriesSet::new(config.series)?;
        debug!(
            points = config.data.len(),
            series = series.len(),
            tick_factor = config.y_axis_tick_factor,
            "created line chart"
        );

        Ok(Self {
            points: config.data,
            series,
            labels: config.labels,
            y_axis_tick_factor: config.y_axis_tick_factor,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    #[must_use]
    pub fn y_axis_tick_factor(&self) -> f64 {
        self.y_axis_tick_factor
    }

    /// Points grouped per declared series, sorted by time.
    #[must_use]
    pub fn data_by_series(&self) -> PartitionedData {
        partition(&self.points, self.series.iter())
    }

    pub fn axis_plan(&self) -> ChartResult<AxisPlan> {
        compute_axis_plan(&self.points, self.y_axis_tick_factor)
    }

    /// Builds the frame for `options` without rendering it.
    pub fn build_frame(&self, options: DrawOptions) -> ChartResult<(RenderFrame, DrawOutput)> {
        let data = self.data_by_series();
        let plan = self.axis_plan()?;
        let built = build_frame(FrameInputs {
            plan,
            data: &data,
            series: &self.series,
            labels: &self.labels,
            options,
        })?;

        Ok((
            built.frame,
            DrawOutput {
                plan,
                data,
                x_scale: built.x_scale,
                y_scale: built.y_scale,
            },
        ))
    }

    /// Builds the frame and hands it to `renderer`.
    pub fn draw<R: Renderer>(
        &self,
        renderer: &mut R,
        options: DrawOptions,
    ) -> ChartResult<DrawOutput> {
        let (frame, output) = self.build_frame(options)?;
        renderer.render(&frame)?;
        Ok(output)
    }
}
