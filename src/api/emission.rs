use crate::core::{
    BarRect, HorizontalLayout, LineLayout, MarkerSpan, OverlayMarkers, ScaledPoint,
    VerticalScale,
};
use crate::render::{
    Color, DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, SparklineLayer,
};

use super::{DrawPlan, PlotShape, SparklineStyle, SparklineVariant};

/// Variant-specific data geometry.
///
/// The resulting [`PlotShape`] alone decides which data commands are emitted,
/// so a plan always renders the geometry it carries.
pub trait DrawEmission {
    fn plot_shape(
        &self,
        points: &[ScaledPoint],
        segment_width: f64,
        scale: VerticalScale,
    ) -> PlotShape;
}

/// Straight segments between consecutive points.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEmission;

impl DrawEmission for LineEmission {
    fn plot_shape(
        &self,
        points: &[ScaledPoint],
        _segment_width: f64,
        _scale: VerticalScale,
    ) -> PlotShape {
        PlotShape::Path(points.to_vec())
    }
}

/// One filled rectangle per item, from its scaled value to the baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarEmission;

impl DrawEmission for BarEmission {
    fn plot_shape(
        &self,
        points: &[ScaledPoint],
        segment_width: f64,
        scale: VerticalScale,
    ) -> PlotShape {
        let baseline_y = if scale.is_flat() {
            scale.bottom()
        } else {
            scale.scale_y(0.0)
        };
        PlotShape::Bars(
            points
                .iter()
                .map(|point| BarRect::between(point.x, segment_width, point.y, baseline_y))
                .collect(),
        )
    }
}

impl SparklineVariant {
    /// Runs `f` with the layout and emission strategies selected by this variant.
    pub fn with_strategies<T>(
        &self,
        f: impl FnOnce(&dyn HorizontalLayout, &dyn DrawEmission) -> T,
    ) -> T {
        match *self {
            Self::Line => f(&LineLayout, &LineEmission),
            Self::Bar(options) => f(&options.layout(), &BarEmission),
        }
    }
}

/// Turns a plan into the ordered command list.
///
/// Order: background, percentile band, value-line band, value-line strokes,
/// percentile strokes, data.
#[must_use]
pub fn emit_frame(plan: &DrawPlan, style: &SparklineStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(plan.viewport);
    frame.push(
        SparklineLayer::Background,
        DrawCommand::SetBackground {
            color: style.background,
        },
    );

    emit_band(
        &mut frame,
        SparklineLayer::PercentileBand,
        &plan.percentile_markers,
        style.percentile_fill_color,
    );
    emit_band(
        &mut frame,
        SparklineLayer::ValueLineBand,
        &plan.value_line_markers,
        style.value_line_fill_color,
    );
    emit_marker_lines(
        &mut frame,
        SparklineLayer::ValueLines,
        &plan.value_line_markers,
        plan.marker_span,
        style.value_line_color,
        style.stroke_width,
    );
    emit_marker_lines(
        &mut frame,
        SparklineLayer::PercentileLines,
        &plan.percentile_markers,
        plan.marker_span,
        style.percentile_color,
        style.stroke_width,
    );

    match &plan.shape {
        PlotShape::Path(points) => emit_path(&mut frame, points, style),
        PlotShape::Bars(bars) => emit_bars(&mut frame, bars, style),
    }
    frame
}

fn emit_path(frame: &mut RenderFrame, points: &[ScaledPoint], style: &SparklineStyle) {
    frame.push(
        SparklineLayer::Data,
        DrawCommand::SetStrokeColor {
            color: style.stroke,
        },
    );
    for pair in points.windows(2) {
        frame.push(
            SparklineLayer::Data,
            DrawCommand::Line(LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                style.stroke_width,
            )),
        );
    }
}

fn emit_bars(frame: &mut RenderFrame, bars: &[BarRect], style: &SparklineStyle) {
    frame.push(
        SparklineLayer::Data,
        DrawCommand::SetStrokeColor {
            color: style.stroke,
        },
    );
    frame.push(
        SparklineLayer::Data,
        DrawCommand::SetFillColor {
            color: style.stroke,
        },
    );
    for bar in bars {
        frame.push(
            SparklineLayer::Data,
            DrawCommand::Rect(RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                style.stroke_width,
            )),
        );
    }
}

fn emit_band(
    frame: &mut RenderFrame,
    layer: SparklineLayer,
    markers: &OverlayMarkers,
    fill: Color,
) {
    let Some(band) = markers.band else {
        return;
    };
    frame.push(layer, DrawCommand::ClearStroke);
    frame.push(layer, DrawCommand::SetFillColor { color: fill });
    frame.push(
        layer,
        DrawCommand::Rect(RectPrimitive::new(band.x, band.y, band.width, band.height, 0.0)),
    );
}

fn emit_marker_lines(
    frame: &mut RenderFrame,
    layer: SparklineLayer,
    markers: &OverlayMarkers,
    span: MarkerSpan,
    color: Color,
    stroke_width: f64,
) {
    if markers.is_empty() {
        return;
    }
    frame.push(layer, DrawCommand::SetStrokeColor { color });
    for y in &markers.positions {
        frame.push(
            layer,
            DrawCommand::Line(LinePrimitive::new(span.start, *y, span.end, *y, stroke_width)),
        );
    }
}
