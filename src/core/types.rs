use serde::{Deserialize, Serialize};

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One data item projected into device pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

impl ScaledPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One bar of the bar variant, spanning from its scaled value to the baseline.
///
/// `y` is the top edge in pixel space. Bars never reach below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    /// Builds the rectangle from a scaled value down to the baseline.
    ///
    /// Values below the floor collapse to a zero-height bar on the baseline.
    #[must_use]
    pub fn between(x: f64, width: f64, value_y: f64, baseline_y: f64) -> Self {
        Self {
            x,
            y: value_y.min(baseline_y),
            width,
            height: (baseline_y - value_y).max(0.0),
        }
    }
}
