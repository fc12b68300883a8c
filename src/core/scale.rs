use serde::{Deserialize, Serialize};

use crate::core::plot_area::PlotArea;
use crate::core::stats::Extent;
use crate::error::{SparklineError, SparklineResult};

/// Rule mapping a data range onto the vertical pixel span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ScalePolicy {
    /// Normalizes against zero and the observed maximum.
    #[default]
    FromZero,
    /// Normalizes against the observed minimum and maximum.
    FromMin,
    /// Normalizes against absolute data bounds independent of the series.
    ExplicitRange { lo: f64, hi: f64 },
}

impl ScalePolicy {
    /// Effective policy once a zero baseline is forced.
    ///
    /// The upper bound stays the explicit `hi` or the observed maximum, so the
    /// baseline never moves with the series minimum.
    #[must_use]
    pub fn with_zero_floor(self, extent: Extent) -> Self {
        match self {
            Self::FromZero | Self::FromMin => Self::ExplicitRange {
                lo: 0.0,
                hi: extent.max,
            },
            Self::ExplicitRange { hi, .. } => Self::ExplicitRange { lo: 0.0, hi },
        }
    }

    /// Data value mapped to the bottom of the chart and the normalization range.
    #[must_use]
    pub fn domain(self, extent: Extent) -> (f64, f64) {
        match self {
            Self::FromZero => (0.0, extent.max),
            Self::FromMin => (extent.min, extent.max),
            Self::ExplicitRange { lo, hi } => (lo, hi),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mapping {
    Linear { origin: f64, range: f64 },
    Flat,
}

/// Value-to-pixel mapping for one render pass.
///
/// Pixel y grows downward, so larger values map to smaller y. Values outside
/// the domain are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    top: f64,
    span_px: f64,
    mapping: Mapping,
}

impl VerticalScale {
    pub fn resolve(policy: ScalePolicy, area: PlotArea, extent: Extent) -> SparklineResult<Self> {
        let (lo, hi) = policy.domain(extent);
        let range = hi - lo;
        if !range.is_finite() || range <= 0.0 {
            return Err(SparklineError::DegenerateRange { lo, hi });
        }

        Ok(Self {
            top: area.top,
            span_px: area.height,
            mapping: Mapping::Linear { origin: lo, range },
        })
    }

    /// Scale that places every value at mid-height.
    #[must_use]
    pub fn flat(area: PlotArea) -> Self {
        Self {
            top: area.top,
            span_px: area.height,
            mapping: Mapping::Flat,
        }
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        matches!(self.mapping, Mapping::Flat)
    }

    #[must_use]
    pub fn scale_y(self, value: f64) -> f64 {
        match self.mapping {
            Mapping::Linear { origin, range } => {
                let normalized = (value - origin) / range;
                self.span_px - self.span_px * normalized + self.top
            }
            Mapping::Flat => self.top + self.span_px * 0.5,
        }
    }

    #[must_use]
    pub fn scale_heights(self, heights: &[f64]) -> Vec<f64> {
        heights.iter().map(|value| self.scale_y(*value)).collect()
    }

    /// Pixel y of the bottom edge of the chart.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.span_px
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalePolicy, VerticalScale};
    use crate::core::Viewport;
    use crate::core::plot_area::{Padding, PlotArea};
    use crate::core::stats::Extent;
    use crate::error::SparklineError;
    use approx::assert_abs_diff_eq;

    fn area() -> PlotArea {
        PlotArea::resolve(Viewport::new(100, 100), Padding::default()).expect("area")
    }

    #[test]
    fn from_zero_matches_worked_example() {
        let scale = VerticalScale::resolve(
            ScalePolicy::FromZero,
            area(),
            Extent { min: 1.0, max: 5.0 },
        )
        .expect("scale");
        assert_abs_diff_eq!(scale.scale_y(5.0), 10.0);
        assert_abs_diff_eq!(scale.scale_y(1.0), 74.0, epsilon = 1e-9);
        assert_abs_diff_eq!(scale.scale_y(0.0), 90.0);
    }

    #[test]
    fn from_min_spans_full_height() {
        let scale = VerticalScale::resolve(
            ScalePolicy::FromMin,
            area(),
            Extent { min: 2.0, max: 6.0 },
        )
        .expect("scale");
        assert_abs_diff_eq!(scale.scale_y(2.0), 90.0);
        assert_abs_diff_eq!(scale.scale_y(4.0), 50.0);
        assert_abs_diff_eq!(scale.scale_y(6.0), 10.0);
    }

    #[test]
    fn explicit_range_passes_overflow_through() {
        let scale = VerticalScale::resolve(
            ScalePolicy::ExplicitRange { lo: 0.0, hi: 10.0 },
            area(),
            Extent { min: 0.0, max: 20.0 },
        )
        .expect("scale");
        assert_abs_diff_eq!(scale.scale_y(20.0), -70.0);
        assert_abs_diff_eq!(scale.scale_y(-5.0), 130.0);
    }

    #[test]
    fn constant_series_is_degenerate_under_from_min() {
        let err = VerticalScale::resolve(
            ScalePolicy::FromMin,
            area(),
            Extent { min: 3.0, max: 3.0 },
        )
        .expect_err("degenerate");
        assert_eq!(err, SparklineError::DegenerateRange { lo: 3.0, hi: 3.0 });
    }

    #[test]
    fn flat_scale_maps_to_mid_height() {
        let scale = VerticalScale::flat(area());
        assert!(scale.is_flat());
        assert_abs_diff_eq!(scale.scale_y(-1e9), 50.0);
        assert_abs_diff_eq!(scale.scale_y(42.0), 50.0);
    }

    #[test]
    fn zero_floor_keeps_upper_bound() {
        let extent = Extent {
            min: -2.0,
            max: 5.0,
        };
        assert_eq!(
            ScalePolicy::FromMin.with_zero_floor(extent),
            ScalePolicy::ExplicitRange { lo: 0.0, hi: 5.0 }
        );
        assert_eq!(
            ScalePolicy::ExplicitRange { lo: -4.0, hi: 8.0 }.with_zero_floor(extent),
            ScalePolicy::ExplicitRange { lo: 0.0, hi: 8.0 }
        );
    }
}
