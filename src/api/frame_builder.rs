use tracing::{debug, trace};

use crate::core::{
    AxisDomain, AxisPlan, LinearScale, PartitionedData, SeriesSet, format_y_tick_label,
    layout_legend, time_axis_ticks, y_tick_values,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartLabels, DrawOptions};

const X_AXIS_CLASSES: &str = "axis axis__x";
const Y_AXIS_CLASSES: &str = "axis axis__y";
const AXIS_LABEL_CLASSES: &str = "axis-label";
const LEGEND_TEXT_CLASSES: &str = "gray-text";

const MONTH_LABEL_OFFSET_PX: f64 = 25.0;
const YEAR_LABEL_OFFSET_PX: f64 = 45.0;
const Y_TICK_LABEL_OFFSET_PX: f64 = 9.0;
const Y_AXIS_TITLE_POSITION: (f64, f64) = (-20.0, -60.0);
const LEGEND_SWATCH_LENGTH_PX: f64 = 10.0;
const LEGEND_SWATCH_WIDTH_PX: f64 = 10.0;
const LEGEND_TEXT_OFFSET: (f64, f64) = (20.0, 5.0);
const GRID_LINE_WIDTH_PX: f64 = 1.0;
/// Padding applied on each side of an x domain holding a single timestamp.
const FLAT_X_DOMAIN_PADDING: f64 = 86_400.0;

pub(super) struct BuiltFrame {
    pub frame: RenderFrame,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

pub(super) struct FrameInputs<'a> {
    pub plan: AxisPlan,
    pub data: &'a PartitionedData,
    pub series: &'a SeriesSet,
    pub labels: &'a ChartLabels,
    pub options: DrawOptions,
}

/// Lays out paths, axes and legend for one draw pass.
pub(super) fn build_frame(inputs: FrameInputs<'_>) -> ChartResult<BuiltFrame> {
    let FrameInputs {
        plan,
        data,
        series,
        labels,
        options,
    } = inputs;
    let (width, height) = options.plot_size()?;
    let (x_min, x_max) = x_scale_domain(plan.domain);
    let (y_min, y_max) = y_scale_domain(plan);
    let x_scale = LinearScale::new(x_min, x_max, 0.0, width)?;
    let y_scale = LinearScale::new(y_min, y_max, height, 0.0)?;

    let mut frame = RenderFrame::new(
        options.viewport(),
        (options.margin.left, options.margin.top),
    );

    let time_ticks = time_axis_ticks(
        plan.domain.x_min,
        plan.domain.x_max,
        options.time_axis_max_ticks,
    )?;
    for tick in time_ticks {
        let x = x_scale.domain_to_pixel(tick.x_seconds())?;
        for (text, offset) in [
            (tick.month_label, MONTH_LABEL_OFFSET_PX),
            (tick.year_label, YEAR_LABEL_OFFSET_PX),
        ] {
            frame.texts.push(
                TextPrimitive::new(text, x, height + offset, TextHAlign::Center)
                    .with_classes(X_AXIS_CLASSES),
            );
        }
    }

    let y_domain = AxisDomain {
        y_min,
        y_max,
        ..plan.domain
    };
    for value in y_tick_values(y_domain, plan.tick_plan) {
        let y = y_scale.domain_to_pixel(value)?;
        frame.lines.push(LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            GRID_LINE_WIDTH_PX,
            Y_AXIS_CLASSES,
        ));
        frame.texts.push(
            TextPrimitive::new(
                format_y_tick_label(value, plan.tick_plan, &labels.y_axis_unit),
                -Y_TICK_LABEL_OFFSET_PX,
                y,
                TextHAlign::Right,
            )
            .with_classes(Y_AXIS_CLASSES),
        );
    }

    for (key, points) in data.iter() {
        if points.is_empty() {
            trace!(%key, "skipping series without points");
            continue;
        }
        let mut mapped = Vec::with_capacity(points.len());
        for point in points {
            mapped.push((
                x_scale.domain_to_pixel(point.x)?,
                y_scale.domain_to_pixel(point.y)?.floor(),
            ));
        }
        let classes = series
            .get(key)
            .map(|definition| definition.classes.clone())
            .unwrap_or_default();
        frame.paths.push(PathPrimitive::new(mapped, classes));
    }

    if !labels.y_axis_label.is_empty() {
        let (x, y) = Y_AXIS_TITLE_POSITION;
        frame.texts.push(
            TextPrimitive::new(labels.y_axis_label.clone(), x, y, TextHAlign::Right)
                .rotated(-90.0)
                .with_classes(AXIS_LABEL_CLASSES),
        );
    }

    for entry in layout_legend(series.iter(), width) {
        let slot = entry.slot;
        frame.lines.push(LinePrimitive::new(
            slot.x,
            slot.y,
            slot.x + LEGEND_SWATCH_LENGTH_PX,
            slot.y,
            LEGEND_SWATCH_WIDTH_PX,
            entry.classes,
        ));
        if !entry.label.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    entry.label,
                    slot.x + LEGEND_TEXT_OFFSET.0,
                    slot.y + LEGEND_TEXT_OFFSET.1,
                    TextHAlign::Left,
                )
                .with_classes(LEGEND_TEXT_CLASSES),
            );
        }
    }

    debug!(
        paths = frame.paths.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built line chart frame"
    );

    Ok(BuiltFrame {
        frame,
        x_scale,
        y_scale,
    })
}

fn x_scale_domain(domain: AxisDomain) -> (f64, f64) {
    if domain.x_min == domain.x_max {
        (
            domain.x_min - FLAT_X_DOMAIN_PADDING,
            domain.x_max + FLAT_X_DOMAIN_PADDING,
        )
    } else {
        (domain.x_min, domain.x_max)
    }
}

/// A flat y domain is opened up by one tick so the baseline stays visible.
fn y_scale_domain(plan: AxisPlan) -> (f64, f64) {
    let domain = plan.domain;
    if domain.y_min == domain.y_max {
        (domain.y_min, domain.y_max + plan.tick_plan.factor)
    } else {
        (domain.y_min, domain.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::{FLAT_X_DOMAIN_PADDING, x_scale_domain, y_scale_domain};
    use crate::core::{AxisDomain, AxisPlan, TickPlan};

    fn plan(domain: AxisDomain) -> AxisPlan {
        AxisPlan {
            domain,
            tick_plan: TickPlan {
                factor: 0.01,
                multiplier: 0.01,
                fallback: true,
            },
        }
    }

    #[test]
    fn flat_domains_are_widened() {
        let domain = AxisDomain {
            x_min: 10.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 0.0,
        };

        assert_eq!(
            x_scale_domain(domain),
            (10.0 - FLAT_X_DOMAIN_PADDING, 10.0 + FLAT_X_DOMAIN_PADDING)
        );
        assert_eq!(y_scale_domain(plan(domain)), (0.0, 0.01));
    }
}
