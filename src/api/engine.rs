use tracing::{debug, trace, warn};

use crate::error::SparklineResult;
use crate::render::{RenderFrame, Renderer};

use super::Sparkline;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `SparklineEngine` pairs one sparkline with one renderer. Each call to
/// [`SparklineEngine::render`] queries the surface size, rebuilds the frame
/// and hands it to the renderer.
pub struct SparklineEngine<R: Renderer> {
    renderer: R,
    sparkline: Sparkline,
}

impl<R: Renderer> SparklineEngine<R> {
    #[must_use]
    pub fn new(renderer: R, sparkline: Sparkline) -> Self {
        Self {
            renderer,
            sparkline,
        }
    }

    #[must_use]
    pub fn sparkline(&self) -> &Sparkline {
        &self.sparkline
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Builds the frame for the renderer's current dimensions without drawing.
    pub fn build_render_frame(&self) -> SparklineResult<RenderFrame> {
        let viewport = self.renderer.dimensions();
        self.sparkline.render_frame(viewport)
    }

    pub fn render(&mut self) -> SparklineResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            commands = frame.commands.len(),
            "rendering sparkline frame"
        );
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected sparkline frame");
            return Err(err);
        }
        debug!(
            lines = frame.line_count(),
            rects = frame.rect_count(),
            "sparkline rendered"
        );
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// The frame is sized from the renderer's own dimensions.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> SparklineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
