use serde::{Deserialize, Serialize};

use crate::core::plot_area::PlotArea;
use crate::error::{SparklineError, SparklineResult};

/// Horizontal extent covered by marker lines and fill bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpan {
    pub start: f64,
    pub end: f64,
}

impl MarkerSpan {
    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }
}

/// Maps data indices to horizontal pixel positions.
///
/// Line and bar charts disagree on how an index occupies the x axis, so the
/// variant owns this mapping while vertical scaling stays shared.
pub trait HorizontalLayout {
    /// Width allotted to one index step (line) or one bar (bar).
    fn segment_width(&self, count: usize, area: PlotArea) -> SparklineResult<f64>;

    /// Left-edge x position for every index in data order.
    fn x_positions(&self, count: usize, area: PlotArea) -> SparklineResult<Vec<f64>>;

    /// Positions for a series the caller supplied as a single point, after it
    /// was duplicated to `count` entries.
    fn single_point_positions(&self, count: usize, area: PlotArea) -> SparklineResult<Vec<f64>> {
        self.x_positions(count, area)
    }

    /// Horizontal extent for overlays given the computed positions.
    fn marker_span(&self, positions: &[f64], segment_width: f64) -> MarkerSpan;
}

/// Points sit on segment boundaries; the first and last touch the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineLayout;

impl HorizontalLayout for LineLayout {
    fn segment_width(&self, count: usize, area: PlotArea) -> SparklineResult<f64> {
        if count < 2 {
            return Err(SparklineError::EmptySeries);
        }
        Ok(area.width / (count - 1) as f64)
    }

    fn x_positions(&self, count: usize, area: PlotArea) -> SparklineResult<Vec<f64>> {
        let segment_width = self.segment_width(count, area)?;
        Ok((0..count)
            .map(|index| index as f64 * segment_width + area.left)
            .collect())
    }

    /// Every copy sits at the left edge, so the path is a zero-length segment.
    fn single_point_positions(&self, count: usize, area: PlotArea) -> SparklineResult<Vec<f64>> {
        self.segment_width(count, area)?;
        Ok(vec![area.left; count])
    }

    fn marker_span(&self, positions: &[f64], _segment_width: f64) -> MarkerSpan {
        MarkerSpan {
            start: positions.first().copied().unwrap_or_default(),
            end: positions.last().copied().unwrap_or_default(),
        }
    }
}

/// Bars occupy equal widths separated by a fixed gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub bar_gap: f64,
    pub marking_extension: f64,
    pub extend_markings: bool,
}

impl HorizontalLayout for BarLayout {
    fn segment_width(&self, count: usize, area: PlotArea) -> SparklineResult<f64> {
        if count == 0 {
            return Err(SparklineError::EmptySeries);
        }
        let gaps = (count - 1) as f64 * self.bar_gap;
        let segment_width = (area.width - gaps) / count as f64;
        if segment_width <= 0.0 {
            return Err(area.invalid_surface());
        }
        Ok(segment_width)
    }

    fn x_positions(&self, count: usize, area: PlotArea) -> SparklineResult<Vec<f64>> {
        let segment_width = self.segment_width(count, area)?;
        Ok((0..count)
            .map(|index| {
                let index = index as f64;
                index * segment_width + index * self.bar_gap + area.left
            })
            .collect())
    }

    fn marker_span(&self, positions: &[f64], segment_width: f64) -> MarkerSpan {
        let start = positions.first().copied().unwrap_or_default();
        let end = positions.last().copied().unwrap_or_default() + segment_width;
        if self.extend_markings {
            MarkerSpan {
                start: start - self.marking_extension,
                end: end + self.marking_extension,
            }
        } else {
            MarkerSpan { start, end }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BarLayout, HorizontalLayout, LineLayout};
    use crate::core::Viewport;
    use crate::core::plot_area::{Padding, PlotArea};
    use crate::error::SparklineError;
    use approx::assert_abs_diff_eq;

    fn area() -> PlotArea {
        PlotArea::resolve(Viewport::new(120, 60), Padding::default()).expect("area")
    }

    #[test]
    fn line_points_sit_on_segment_boundaries() {
        let xs = LineLayout.x_positions(5, area()).expect("positions");
        assert_eq!(xs, vec![10.0, 35.0, 60.0, 85.0, 110.0]);
        let span = LineLayout.marker_span(&xs, 25.0);
        assert_eq!((span.start, span.end), (10.0, 110.0));
    }

    #[test]
    fn single_point_line_collapses_to_left_edge() {
        let xs = LineLayout
            .single_point_positions(2, area())
            .expect("positions");
        assert_eq!(xs, vec![10.0, 10.0]);
        let span = LineLayout.marker_span(&xs, 110.0);
        assert_eq!(span.width(), 0.0);
    }

    #[test]
    fn bar_widths_and_gaps_fill_chart_width() {
        let layout = BarLayout {
            bar_gap: 5.0,
            marking_extension: 5.0,
            extend_markings: false,
        };
        let width = layout.segment_width(4, area()).expect("width");
        assert_abs_diff_eq!(width * 4.0 + 3.0 * 5.0, 100.0);

        let xs = layout.x_positions(4, area()).expect("positions");
        assert_abs_diff_eq!(xs[0], 10.0);
        assert_abs_diff_eq!(xs[3] + width, 110.0);
    }

    #[test]
    fn bar_markings_extend_past_edges() {
        let layout = BarLayout {
            bar_gap: 5.0,
            marking_extension: 3.0,
            extend_markings: true,
        };
        let width = layout.segment_width(4, area()).expect("width");
        let xs = layout.x_positions(4, area()).expect("positions");
        let span = layout.marker_span(&xs, width);
        assert_abs_diff_eq!(span.start, 7.0);
        assert_abs_diff_eq!(span.end, 113.0);
    }

    #[test]
    fn bar_gap_wider_than_chart_is_rejected() {
        let layout = BarLayout {
            bar_gap: 50.0,
            marking_extension: 0.0,
            extend_markings: false,
        };
        let err = layout.segment_width(4, area()).expect_err("no room");
        assert!(matches!(err, SparklineError::InvalidSurface { .. }));
    }
}
