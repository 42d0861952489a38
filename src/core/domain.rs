use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::tick_factor::validate_base_factor;
use crate::core::{DataPoint, TickPlan, find_tick_factor};
use crate::error::{ChartError, ChartResult};

/// Value ranges mapped onto the two chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisDomain {
    #[must_use]
    pub fn x_span(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Axis domain together with the y-axis tick spacing it was rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub domain: AxisDomain,
    pub tick_plan: TickPlan,
}

/// Derives the axis domain for `points`.
///
/// The y baseline never sits above zero, and the y top is rounded up to the
/// next multiple of the tick factor chosen for `[y_min, raw y_max]`.
pub fn derive_domain(
    points: &[DataPoint],
    base_factor: f64,
) -> ChartResult<(AxisDomain, TickPlan)> {
    validate_base_factor(base_factor)?;
    if points.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(
            "point coordinates must be finite".to_owned(),
        ));
    }

    let (x_min, x_max) = min_max(points.iter().map(|point| point.x));
    let (raw_y_min, raw_y_max) = min_max(points.iter().map(|point| point.y));

    let y_min = raw_y_min.min(0.0);
    let tick_plan = find_tick_factor(y_min, raw_y_max, base_factor)?;
    let y_max = round_up_to_factor(raw_y_max, tick_plan.factor);

    let domain = AxisDomain {
        x_min,
        x_max,
        y_min,
        y_max,
    };
    debug!(?domain, "derived axis domain");
    Ok((domain, tick_plan))
}

/// Computes the axis domain and tick plan handed to the renderer.
pub fn compute_axis_plan(points: &[DataPoint], base_tick_factor: f64) -> ChartResult<AxisPlan> {
    let (domain, tick_plan) = derive_domain(points, base_tick_factor)?;
    Ok(AxisPlan { domain, tick_plan })
}

/// Smallest multiple of `factor` that is `>= value`.
#[must_use]
pub fn round_up_to_factor(value: f64, factor: f64) -> f64 {
    let steps = (value / factor).ceil();
    let rounded = steps * factor;
    // The quotient can round down onto an integer while `steps * factor`
    // still sits below `value`.
    if rounded < value {
        (steps + 1.0) * factor
    } else {
        rounded
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold(
        (OrderedFloat(f64::INFINITY), OrderedFloat(f64::NEG_INFINITY)),
        |(min, max), value| (min.min(OrderedFloat(value)), max.max(OrderedFloat(value))),
    );
    (min.into_inner(), max.into_inner())
}
