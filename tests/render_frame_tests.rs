use sparkline_rs::api::{Sparkline, SparklineConfig, SparklineEngine};
use sparkline_rs::core::Viewport;
use sparkline_rs::render::{DrawCommand, NullRenderer, RenderFrame, SparklineLayer};

fn overlay_config() -> SparklineConfig {
    SparklineConfig::line()
        .with_percentile_lines(vec![0.25, 0.75], true)
        .with_value_lines(vec![2.0, 6.0], true)
}

fn distinct_layers(frame: &RenderFrame) -> Vec<SparklineLayer> {
    let mut layers: Vec<SparklineLayer> = frame.commands.iter().map(|entry| entry.layer).collect();
    layers.dedup();
    layers
}

#[test]
fn frame_layers_follow_fixed_z_order() {
    let sparkline =
        Sparkline::from_values(vec![1.0, 7.0, 3.0, 5.0, 4.0, 8.0], overlay_config())
            .expect("sparkline");
    let frame = sparkline
        .render_frame(Viewport::new(200, 50))
        .expect("frame");

    frame.validate().expect("valid frame");
    assert_eq!(distinct_layers(&frame), SparklineLayer::CANONICAL_ORDER.to_vec());
}

#[test]
fn background_is_painted_first() {
    let config = overlay_config();
    let sparkline = Sparkline::from_values(vec![1.0, 2.0], config.clone()).expect("sparkline");
    let frame = sparkline.render_frame(Viewport::new(60, 30)).expect("frame");

    assert_eq!(
        frame.commands[0].command,
        DrawCommand::SetBackground {
            color: config.style.background
        }
    );
}

#[test]
fn bands_clear_stroke_before_filling() {
    let config = overlay_config();
    let sparkline =
        Sparkline::from_values(vec![1.0, 4.0, 2.0, 6.0], config.clone()).expect("sparkline");
    let frame = sparkline.render_frame(Viewport::new(90, 40)).expect("frame");

    let band: Vec<DrawCommand> = frame
        .layer_commands(SparklineLayer::ValueLineBand)
        .collect();
    assert_eq!(band.len(), 3);
    assert_eq!(band[0], DrawCommand::ClearStroke);
    assert_eq!(
        band[1],
        DrawCommand::SetFillColor {
            color: config.style.value_line_fill_color
        }
    );
    assert!(matches!(band[2], DrawCommand::Rect(_)));
}

#[test]
fn marker_lines_span_the_marker_extent() {
    let sparkline =
        Sparkline::from_values(vec![1.0, 4.0, 2.0, 6.0], overlay_config()).expect("sparkline");
    let viewport = Viewport::new(90, 40);
    let plan = sparkline.draw_plan(viewport).expect("plan");
    let frame = sparkline.render_frame(viewport).expect("frame");

    let lines: Vec<DrawCommand> = frame
        .layer_commands(SparklineLayer::PercentileLines)
        .filter(|command| matches!(command, DrawCommand::Line(_)))
        .collect();
    assert_eq!(lines.len(), 2);
    for command in lines {
        let DrawCommand::Line(line) = command else {
            unreachable!();
        };
        assert_eq!(line.x1, plan.marker_span.start);
        assert_eq!(line.x2, plan.marker_span.end);
        assert_eq!(line.y1, line.y2);
    }
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let sparkline =
        Sparkline::from_values(vec![5.0, 3.0, 8.0, 1.0], overlay_config()).expect("sparkline");
    let mut engine = SparklineEngine::new(NullRenderer::new(Viewport::new(160, 40)), sparkline);

    let expected = engine.build_render_frame().expect("frame");
    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_line_count, expected.line_count());
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_frame, Some(expected));
}

#[test]
fn engine_sizes_frame_from_renderer_dimensions() {
    let sparkline =
        Sparkline::from_values(vec![1.0, 2.0, 3.0], SparklineConfig::bar()).expect("sparkline");
    let engine = SparklineEngine::new(NullRenderer::new(Viewport::new(75, 20)), sparkline);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.viewport, Viewport::new(75, 20));
}

#[test]
fn engine_reports_surface_too_small_for_padding() {
    let sparkline =
        Sparkline::from_values(vec![1.0, 2.0], SparklineConfig::line()).expect("sparkline");
    let mut engine = SparklineEngine::new(NullRenderer::new(Viewport::new(20, 20)), sparkline);

    assert!(engine.render().is_err());
    assert_eq!(engine.renderer().render_count, 0);
}

#[test]
fn frame_with_layers_out_of_order_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(10, 10))
        .with_command(SparklineLayer::Data, DrawCommand::ClearStroke)
        .with_command(SparklineLayer::Background, DrawCommand::ClearStroke);
    assert!(frame.validate().is_err());
}
