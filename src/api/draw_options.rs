use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TIME_AXIS_MAX_TICKS, Viewport};
use crate::error::{ChartError, ChartResult};

/// Space reserved around the plot for axes, labels and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

/// Per-draw layout options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    pub base_width: u32,
    pub base_height: u32,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_time_axis_max_ticks")]
    pub time_axis_max_ticks: usize,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            base_width: 200,
            base_height: 100,
            margin: Margin::default(),
            time_axis_max_ticks: default_time_axis_max_ticks(),
        }
    }
}

impl DrawOptions {
    #[must_use]
    pub fn new(base_width: u32, base_height: u32) -> Self {
        Self {
            base_width,
            base_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_time_axis_max_ticks(mut self, max_ticks: usize) -> Self {
        self.time_axis_max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.base_width, self.base_height)
    }

    /// Width and height left for the plot once margins are removed.
    pub fn plot_size(self) -> ChartResult<(f64, f64)> {
        let margin = self.margin.validate()?;
        let width = f64::from(self.base_width) - margin.left - margin.right;
        let height = f64::from(self.base_height) - margin.top - margin.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.base_width,
                height: self.base_height,
            });
        }
        Ok((width, height))
    }
}

fn default_time_axis_max_ticks() -> usize {
    DEFAULT_TIME_AXIS_MAX_TICKS
}
