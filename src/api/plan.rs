use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    BarRect, DataSeries, HorizontalLayout, MarkerSpan, OverlayMarkers, PlotArea, ScaledPoint,
    VerticalScale, Viewport, percentile_markers, stats, value_line_markers,
};
use crate::error::{SparklineError, SparklineResult};

use super::SparklineConfig;
use super::emission::DrawEmission;

/// Data geometry of one sparkline, in data order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum PlotShape {
    Path(Vec<ScaledPoint>),
    Bars(Vec<BarRect>),
}

impl PlotShape {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Path(points) => points.len(),
            Self::Bars(bars) => bars.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renderer-agnostic geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub viewport: Viewport,
    /// Left edge and scaled value of every item.
    pub points: Vec<ScaledPoint>,
    pub shape: PlotShape,
    pub percentile_markers: OverlayMarkers,
    pub value_line_markers: OverlayMarkers,
    pub marker_span: MarkerSpan,
    /// Set when the scale range collapsed and the series was drawn at mid-height.
    pub flat_fallback: bool,
}

impl DrawPlan {
    /// Computes every derived coordinate from scratch.
    ///
    /// Fails before doing any work when the surface leaves no drawable area.
    pub fn assemble(
        series: &DataSeries,
        config: &SparklineConfig,
        viewport: Viewport,
    ) -> SparklineResult<Self> {
        let area = PlotArea::resolve(viewport, config.padding)?;
        config
            .variant
            .with_strategies(|layout, emission| assemble_with(series, config, area, layout, emission))
    }
}

fn assemble_with(
    series: &DataSeries,
    config: &SparklineConfig,
    area: PlotArea,
    layout: &dyn HorizontalLayout,
    emission: &dyn DrawEmission,
) -> SparklineResult<DrawPlan> {
    let heights = series.heights();
    let extent = stats::extent(heights)?;
    let policy = config
        .variant
        .effective_scale_policy(config.scale_policy, extent);

    let scale = match VerticalScale::resolve(policy, area, extent) {
        Ok(scale) => scale,
        Err(SparklineError::DegenerateRange { lo, hi }) => {
            debug!(lo, hi, ?policy, "degenerate scale range, drawing flat series");
            VerticalScale::flat(area)
        }
        Err(err) => return Err(err),
    };

    let count = series.len();
    let segment_width = layout.segment_width(count, area)?;
    let xs = if series.source_len() == 1 {
        layout.single_point_positions(count, area)?
    } else {
        layout.x_positions(count, area)?
    };
    let ys = scale.scale_heights(heights);
    let points: Vec<ScaledPoint> = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| ScaledPoint::new(*x, *y))
        .collect();
    let shape = emission.plot_shape(&points, segment_width, scale);
    let marker_span = layout.marker_span(&xs, segment_width);

    let percentile_markers = percentile_markers(
        heights,
        &config.percentile_lines,
        scale,
        marker_span,
        config.fill_between_percentile_lines,
    )?;
    let value_line_markers = value_line_markers(
        &config.value_lines,
        scale,
        marker_span,
        config.fill_between_value_lines,
    );

    trace!(
        count,
        segment_width,
        percentile_count = percentile_markers.len(),
        value_line_count = value_line_markers.len(),
        "assembled draw plan"
    );

    Ok(DrawPlan {
        viewport: area.viewport,
        points,
        shape,
        percentile_markers,
        value_line_markers,
        marker_span,
        flat_fallback: scale.is_flat(),
    })
}
