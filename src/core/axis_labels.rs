use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    datetime_to_unix_seconds, snap_to_nano, unix_seconds_to_datetime,
};
use crate::core::{AxisDomain, TickPlan};
use crate::error::{ChartError, ChartResult};

/// Default upper bound on labelled ticks along the time axis.
pub const DEFAULT_TIME_AXIS_MAX_TICKS: usize = 10;
/// Upper bound on y grid lines emitted for one frame.
pub const MAX_Y_AXIS_TICKS: usize = 100;

const MONTH_LABEL_FORMAT: &str = "%b";
const YEAR_LABEL_FORMAT: &str = "%Y";

/// One labelled position on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    /// Unix seconds of the month start.
    pub x: i64,
    pub month_label: String,
    pub year_label: String,
}

/// Y values receiving a grid line: every multiple of the tick factor inside
/// the domain.
#[must_use]
pub fn y_tick_values(domain: AxisDomain, plan: TickPlan) -> Vec<f64> {
    let factor = plan.factor;
    if !factor.is_finite() || factor <= 0.0 || domain.y_max < domain.y_min {
        return Vec::new();
    }

    // Indices stay in f64: spans far beyond `i64` are valid input.
    let first = snap_to_nano(domain.y_min / factor).ceil();
    let last = snap_to_nano(domain.y_max / factor).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let stride = ((last - first + 1.0) / MAX_Y_AXIS_TICKS as f64).ceil().max(1.0);
    let count = (((last - first) / stride).floor() as usize + 1).min(MAX_Y_AXIS_TICKS);
    (0..count)
        .map(|step| (first + step as f64 * stride) * factor)
        .collect()
}

/// Formats a y tick in base-factor units followed by `unit`.
///
/// Plans that scaled the factor down keep one decimal, rounded toward
/// negative infinity; all others are rounded up to a whole number.
#[must_use]
pub fn format_y_tick_label(value: f64, plan: TickPlan, unit: &str) -> String {
    let scaled = snap_to_nano(value / plan.factor * plan.multiplier);
    let display = if plan.multiplier < 1.0 {
        (scaled * 10.0).floor() / 10.0
    } else {
        scaled.ceil()
    };
    // `+ 0.0` folds negative zero so it prints as "0".
    format!("{}{unit}", display + 0.0)
}

/// Month-start ticks inside `[x_min, x_max]`, thinned with a uniform month
/// stride so at most `max_ticks` remain.
pub fn time_axis_ticks(x_min: f64, x_max: f64, max_ticks: usize) -> ChartResult<Vec<TimeTick>> {
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(ChartError::InvalidData(
            "time axis bounds must be finite".to_owned(),
        ));
    }
    if max_ticks == 0 {
        return Ok(Vec::new());
    }
    let start = to_datetime(x_min.min(x_max))?;
    let end = to_datetime(x_min.max(x_max))?;

    let mut first = month_start(start)?;
    if first < start {
        first = add_months(first, 1)?;
    }
    if first > end {
        return Ok(Vec::new());
    }

    let months_between = (end.year() - first.year()) * 12 + end.month() as i32
        - first.month() as i32;
    let total = months_between as usize + 1;
    let stride = total.div_ceil(max_ticks) as u32;

    let mut ticks = Vec::with_capacity(total.min(max_ticks));
    let mut cursor = first;
    while cursor <= end {
        ticks.push(TimeTick {
            x: cursor.timestamp(),
            month_label: cursor.format(MONTH_LABEL_FORMAT).to_string(),
            year_label: cursor.format(YEAR_LABEL_FORMAT).to_string(),
        });
        cursor = match first.checked_add_months(Months::new(stride * ticks.len() as u32)) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(ticks)
}

impl TimeTick {
    /// Tick position as fractional unix seconds, the unit used by data points.
    #[must_use]
    pub fn x_seconds(&self) -> f64 {
        self.x as f64
    }
}

fn to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    unix_seconds_to_datetime(seconds).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {seconds} is outside the supported range"))
    })
}

fn month_start(time: DateTime<Utc>) -> ChartResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(time.year(), time.month(), 1, 0, 0, 0)
        .single()
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "no month start for {}",
                datetime_to_unix_seconds(time)
            ))
        })
}

fn add_months(time: DateTime<Utc>, months: u32) -> ChartResult<DateTime<Utc>> {
    time.checked_add_months(Months::new(months)).ok_or_else(|| {
        ChartError::InvalidData("time axis tick overflowed the supported range".to_owned())
    })
}
