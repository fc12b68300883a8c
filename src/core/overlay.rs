use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::layout::MarkerSpan;
use crate::core::scale::VerticalScale;
use crate::core::stats::{order_statistic_sorted, sorted_ascending};
use crate::error::SparklineResult;

/// Shaded rectangle between the outermost markers of one overlay kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillBand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal marker positions, always ascending by pixel y.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayMarkers {
    pub positions: SmallVec<[f64; 4]>,
    pub band: Option<FillBand>,
}

impl OverlayMarkers {
    fn from_pixels(mut positions: SmallVec<[f64; 4]>, span: MarkerSpan, fill: bool) -> Self {
        positions.sort_by_key(|y| OrderedFloat(*y));
        let band = match (positions.first(), positions.last()) {
            (Some(first), Some(last)) if fill && positions.len() > 1 => Some(FillBand {
                x: span.start,
                y: *first,
                width: span.width(),
                height: last - first,
            }),
            _ => None,
        };
        Self { positions, band }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Markers at literal data values.
#[must_use]
pub fn value_line_markers(
    values: &[f64],
    scale: VerticalScale,
    span: MarkerSpan,
    fill: bool,
) -> OverlayMarkers {
    let positions = values.iter().map(|value| scale.scale_y(*value)).collect();
    OverlayMarkers::from_pixels(positions, span, fill)
}

/// Markers at the order statistics of `heights` for each rank fraction.
///
/// Scaling reverses value order in pixel space, so positions are re-sorted
/// after scaling.
pub fn percentile_markers(
    heights: &[f64],
    rank_fractions: &[f64],
    scale: VerticalScale,
    span: MarkerSpan,
    fill: bool,
) -> SparklineResult<OverlayMarkers> {
    if rank_fractions.is_empty() {
        return Ok(OverlayMarkers::default());
    }

    let sorted = sorted_ascending(heights);
    let mut positions = SmallVec::with_capacity(rank_fractions.len());
    for rank_fraction in rank_fractions {
        let value = order_statistic_sorted(&sorted, *rank_fraction)?;
        positions.push(scale.scale_y(value));
    }
    Ok(OverlayMarkers::from_pixels(positions, span, fill))
}
