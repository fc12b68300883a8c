use std::io::Write;

use cairo::{Context, Format, ImageSurface};

use crate::core::Viewport;
use crate::error::{SparklineError, SparklineResult};
use crate::render::{Color, DrawCommand, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SparklineResult<()>;
}

/// Cairo image-surface renderer backend.
///
/// Commands run in frame order against a small pen state: the active stroke
/// color (or none after `ClearStroke`) and the active fill color.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

#[derive(Debug, Clone, Copy)]
struct PenState {
    stroke: Option<Color>,
    fill: Color,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SparklineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SparklineError::InvalidSurface {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface contents as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> SparklineResult<()> {
        self.surface.write_to_png(writer).map_err(|err| {
            SparklineError::InvalidData(format!("failed to encode png: {err}"))
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> SparklineResult<()> {
        frame.validate()?;

        let mut pen = PenState {
            stroke: None,
            fill: Color::rgb(1.0, 1.0, 1.0),
        };
        let mut stats = CairoRenderStats::default();

        for entry in &frame.commands {
            match entry.command {
                DrawCommand::SetBackground { color } => {
                    apply_color(context, color);
                    context
                        .paint()
                        .map_err(|err| map_backend_error("failed to paint background", err))?;
                }
                DrawCommand::SetStrokeColor { color } => pen.stroke = Some(color),
                DrawCommand::SetFillColor { color } => pen.fill = color,
                DrawCommand::ClearStroke => pen.stroke = None,
                DrawCommand::Line(line) => {
                    let Some(stroke) = pen.stroke else {
                        continue;
                    };
                    apply_color(context, stroke);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Rect(rect) => {
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    apply_color(context, pen.fill);
                    if let Some(stroke) = pen.stroke.filter(|_| rect.border_width > 0.0) {
                        context
                            .fill_preserve()
                            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                        apply_color(context, stroke);
                        context.set_line_width(rect.border_width);
                        context.stroke().map_err(|err| {
                            map_backend_error("failed to stroke rectangle border", err)
                        })?;
                    } else {
                        context
                            .fill()
                            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    }
                    stats.rects_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn dimensions(&self) -> Viewport {
        Viewport::new(
            self.surface.width().max(0) as u32,
            self.surface.height().max(0) as u32,
        )
    }

    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SparklineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> SparklineError {
    SparklineError::InvalidData(format!("{prefix}: {err}"))
}
