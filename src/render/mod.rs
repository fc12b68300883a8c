mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{FrameCommand, RenderFrame};
pub use layer_stack::SparklineLayer;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, DrawCommand, LinePrimitive, RectPrimitive};

use crate::core::Viewport;
use crate::error::SparklineResult;

/// Contract implemented by any drawing surface.
///
/// Backends report their pixel size and receive a fully materialized,
/// ordered `RenderFrame`, so drawing code stays isolated from scaling and
/// overlay logic.
pub trait Renderer {
    fn dimensions(&self) -> Viewport;

    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
