use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{SparklineError, SparklineResult};
use crate::render::{DrawCommand, SparklineLayer};

/// One command tagged with the z-order slot it was emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameCommand {
    pub layer: SparklineLayer,
    pub command: DrawCommand,
}

/// Backend-agnostic, ordered command list for one sparkline draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<FrameCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: SparklineLayer, command: DrawCommand) {
        self.commands.push(FrameCommand { layer, command });
    }

    #[must_use]
    pub fn with_command(mut self, layer: SparklineLayer, command: DrawCommand) -> Self {
        self.push(layer, command);
        self
    }

    /// Commands emitted for one layer, in emission order.
    pub fn layer_commands(&self, layer: SparklineLayer) -> impl Iterator<Item = DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |entry| entry.layer == layer)
            .map(|entry| entry.command)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|entry| matches!(entry.command, DrawCommand::Line(_)))
            .count()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|entry| matches!(entry.command, DrawCommand::Rect(_)))
            .count()
    }

    pub fn validate(&self) -> SparklineResult<()> {
        if !self.viewport.is_valid() {
            return Err(SparklineError::InvalidSurface {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let mut previous = SparklineLayer::Background;
        for entry in &self.commands {
            if entry.layer < previous {
                return Err(SparklineError::InvalidData(format!(
                    "{:?} command emitted after {:?} layer",
                    entry.layer, previous
                )));
            }
            previous = entry.layer;
            entry.command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
