use crate::core::Viewport;
use crate::error::SparklineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and keeps the last accepted frame so
/// tests can inspect exactly what a real backend would have drawn.
#[derive(Debug)]
pub struct NullRenderer {
    pub viewport: Viewport,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub render_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            last_line_count: 0,
            last_rect_count: 0,
            render_count: 0,
            last_frame: None,
        }
    }
}

impl Renderer for NullRenderer {
    fn dimensions(&self) -> Viewport {
        self.viewport
    }

    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()> {
        frame.validate()?;
        self.last_line_count = frame.line_count();
        self.last_rect_count = frame.rect_count();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
