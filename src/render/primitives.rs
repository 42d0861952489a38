use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

fn validate_point(x: f64, y: f64, what: &str) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Polyline through data points in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub points: Vec<(f64, f64)>,
    /// Style classes the backend resolves to stroke settings.
    pub classes: String,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, classes: impl Into<String>) -> Self {
        Self {
            points,
            classes: classes.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for &(x, y) in &self.points {
            validate_point(x, y, "path")?;
        }
        Ok(())
    }
}

/// Draw command for one straight segment in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub classes: String,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        classes: impl Into<String>,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            classes: classes.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_point(self.x1, self.y1, "line")?;
        validate_point(self.x2, self.y2, "line")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    /// Clockwise rotation around the plot origin, in degrees.
    pub rotation_deg: f64,
    pub classes: String,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, h_align: TextHAlign) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            h_align,
            rotation_deg: 0.0,
            classes: String::new(),
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_point(self.x, self.y, "text")?;
        if !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
