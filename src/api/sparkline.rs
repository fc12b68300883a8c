use crate::core::{DataSeries, ScaledPoint, Viewport};
use crate::error::SparklineResult;
use crate::render::RenderFrame;

use super::emission::emit_frame;
use super::{DrawPlan, SparklineConfig};

/// A data series bound to its display configuration.
///
/// Both halves are immutable once constructed; every render recomputes its
/// geometry from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    series: DataSeries,
    config: SparklineConfig,
}

impl Sparkline {
    pub fn new(series: DataSeries, config: SparklineConfig) -> SparklineResult<Self> {
        config.validate()?;
        Ok(Self { series, config })
    }

    /// Shorthand for [`DataSeries::from_values`] followed by [`Sparkline::new`].
    pub fn from_values(values: Vec<f64>, config: SparklineConfig) -> SparklineResult<Self> {
        Self::new(DataSeries::from_values(values)?, config)
    }

    #[must_use]
    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &SparklineConfig {
        &self.config
    }

    pub fn draw_plan(&self, viewport: Viewport) -> SparklineResult<DrawPlan> {
        DrawPlan::assemble(&self.series, &self.config, viewport)
    }

    /// Left edge x and scaled value y of every item, in data order.
    pub fn scaled_points(&self, viewport: Viewport) -> SparklineResult<Vec<ScaledPoint>> {
        Ok(self.draw_plan(viewport)?.points)
    }

    pub fn render_frame(&self, viewport: Viewport) -> SparklineResult<RenderFrame> {
        let plan = self.draw_plan(viewport)?;
        Ok(emit_frame(&plan, &self.config.style))
    }
}
