use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// Fewest y-axis ticks a plan aims for.
pub const MIN_TICK_COUNT: f64 = 5.0;
/// Most y-axis ticks a plan aims for.
pub const MAX_TICK_COUNT: f64 = 9.0;

/// Scale-ups tried, in order, when the base factor yields too many ticks.
pub const TICK_MULTIPLIERS: [f64; 15] = [
    2.0, 4.0, 5.0, 10.0, 15.0, 20.0, 25.0, 50.0, 100.0, 200.0, 500.0, 1_000.0, 2_000.0, 5_000.0,
    10_000.0,
];
/// Scale-downs tried, in order, when the base factor yields too few ticks.
pub const TICK_DIVISORS: [f64; 7] = [0.5, 0.25, 0.2, 0.1, 0.05, 0.025, 0.01];

/// Chosen y-axis tick spacing.
///
/// `factor` is the spacing in data units. `multiplier` is the coefficient that
/// was applied to the base factor; labels use it to report values in base
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub factor: f64,
    pub multiplier: f64,
    /// Set when every candidate was tried without reaching 5..=9 ticks; the
    /// plan then holds the last candidate.
    #[serde(default)]
    pub fallback: bool,
}

impl TickPlan {
    #[must_use]
    pub fn unchanged(base_factor: f64) -> Self {
        Self {
            factor: base_factor,
            multiplier: 1.0,
            fallback: false,
        }
    }

    /// Number of tick intervals this plan yields over `[y_min, y_max]`.
    #[must_use]
    pub fn tick_count(self, y_min: f64, y_max: f64) -> f64 {
        tick_count(y_min, y_max, self.factor)
    }
}

pub(crate) fn validate_base_factor(base_factor: f64) -> ChartResult<()> {
    if !base_factor.is_finite() || base_factor <= 0.0 {
        return Err(ChartError::InvalidConfiguration(format!(
            "y-axis tick factor must be finite and > 0, got {base_factor}"
        )));
    }
    Ok(())
}

fn tick_count(y_min: f64, y_max: f64, factor: f64) -> f64 {
    ((y_max - y_min) / factor).ceil()
}

/// Picks a tick spacing giving between 5 and 9 ticks across `[y_min, y_max]`.
///
/// Starting from `base_factor`, the spacing is scaled up through
/// [`TICK_MULTIPLIERS`] when there are more than 9 ticks, or scaled down
/// through [`TICK_DIVISORS`] when there are fewer than 5, stopping at the
/// first candidate inside the bound. A count already inside the bound keeps
/// the base factor with multiplier 1.
pub fn find_tick_factor(y_min: f64, y_max: f64, base_factor: f64) -> ChartResult<TickPlan> {
    validate_base_factor(base_factor)?;
    if !y_min.is_finite() || !y_max.is_finite() {
        return Err(ChartError::InvalidData(
            "y-axis bounds must be finite".to_owned(),
        ));
    }
    if y_max < y_min {
        return Err(ChartError::InvalidData(format!(
            "y-axis max ({y_max}) must be >= min ({y_min})"
        )));
    }

    let count = tick_count(y_min, y_max, base_factor);
    let plan = if count > MAX_TICK_COUNT {
        search(y_min, y_max, base_factor, &TICK_MULTIPLIERS, |count| {
            count <= MAX_TICK_COUNT
        })
    } else if count < MIN_TICK_COUNT {
        search(y_min, y_max, base_factor, &TICK_DIVISORS, |count| {
            count >= MIN_TICK_COUNT
        })
    } else {
        TickPlan::unchanged(base_factor)
    };

    if plan.fallback {
        warn!(
            y_min,
            y_max,
            base_factor,
            factor = plan.factor,
            "tick factor search exhausted, using last candidate"
        );
    } else {
        debug!(
            y_min,
            y_max,
            factor = plan.factor,
            multiplier = plan.multiplier,
            "selected tick factor"
        );
    }

    Ok(plan)
}

fn search(
    y_min: f64,
    y_max: f64,
    base_factor: f64,
    candidates: &[f64],
    accept: impl Fn(f64) -> bool,
) -> TickPlan {
    let mut plan = TickPlan::unchanged(base_factor);
    for &coefficient in candidates {
        plan.multiplier = coefficient;
        plan.factor = base_factor * coefficient;
        if accept(tick_count(y_min, y_max, plan.factor)) {
            return plan;
        }
    }
    plan.fallback = true;
    plan
}

#[cfg(test)]
mod tests {
    use super::{TICK_DIVISORS, TICK_MULTIPLIERS, search};

    #[test]
    fn search_clamps_to_last_multiplier_when_exhausted() {
        let plan = search(0.0, 1e9, 1.0, &TICK_MULTIPLIERS, |count| count <= 9.0);
        assert!(plan.fallback);
        assert_eq!(plan.multiplier, 10_000.0);
        assert_eq!(plan.factor, 10_000.0);
    }

    #[test]
    fn search_clamps_to_last_divisor_when_exhausted() {
        let plan = search(0.0, 0.0, 1.0, &TICK_DIVISORS, |count| count >= 5.0);
        assert!(plan.fallback);
        assert_eq!(plan.multiplier, 0.01);
    }
}
