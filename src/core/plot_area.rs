use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{SparklineError, SparklineResult};

/// Surface padding in pixels around the plotted chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Drawable chart rectangle inside a padded surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the chart rectangle, failing fast when nothing is left to draw on.
    pub fn resolve(viewport: Viewport, padding: Padding) -> SparklineResult<Self> {
        let invalid = SparklineError::InvalidSurface {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid);
        }

        let width = f64::from(viewport.width) - padding.left - padding.right;
        let height = f64::from(viewport.height) - padding.top - padding.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid);
        }

        Ok(Self {
            viewport,
            left: padding.left,
            top: padding.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn invalid_surface(self) -> SparklineError {
        SparklineError::InvalidSurface {
            width: self.viewport.width,
            height: self.viewport.height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn mid_y(self) -> f64 {
        self.top + self.height * 0.5
    }
}
