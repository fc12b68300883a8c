use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, Extent, Padding, ScalePolicy};
use crate::error::SparklineResult;
use crate::render::Color;

use super::validation::validate_config;

/// Bar-variant geometry options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarOptions {
    /// Pixel gap between adjacent bars.
    pub bar_gap: f64,
    /// Pixels marker lines and bands reach past the first and last bar.
    pub marking_extension: f64,
    pub extend_markings: bool,
}

impl BarOptions {
    #[must_use]
    pub fn layout(self) -> BarLayout {
        BarLayout {
            bar_gap: self.bar_gap,
            marking_extension: self.marking_extension,
            extend_markings: self.extend_markings,
        }
    }
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            bar_gap: 5.0,
            marking_extension: 5.0,
            extend_markings: true,
        }
    }
}

/// Chart shape drawn for the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SparklineVariant {
    #[default]
    Line,
    Bar(BarOptions),
}

impl SparklineVariant {
    /// Scale policy actually applied for this variant.
    ///
    /// Bars always grow from a zero baseline, whatever policy is configured.
    #[must_use]
    pub fn effective_scale_policy(self, configured: ScalePolicy, extent: Extent) -> ScalePolicy {
        match self {
            Self::Line => configured,
            Self::Bar(_) => configured.with_zero_floor(extent),
        }
    }
}

/// Colors and stroke width handed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SparklineStyle {
    pub background: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub percentile_color: Color,
    pub percentile_fill_color: Color,
    pub value_line_color: Color,
    pub value_line_fill_color: Color,
}

impl Default for SparklineStyle {
    fn default() -> Self {
        Self {
            background: Color::gray(50),
            stroke: Color::rgba8(230, 230, 230, 0.70),
            stroke_width: 1.0,
            percentile_color: Color::rgba8(0x55, 0x55, 0xFF, 1.0),
            percentile_fill_color: Color::gray(75),
            value_line_color: Color::rgba8(0x77, 0x77, 0xFF, 1.0),
            value_line_fill_color: Color::gray(85),
        }
    }
}

/// Immutable display parameters of one sparkline.
///
/// Unspecified fields take their defaults; unknown fields are rejected when
/// loading from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SparklineConfig {
    pub variant: SparklineVariant,
    pub padding: Padding,
    pub scale_policy: ScalePolicy,
    /// Rank fractions in `[0, 1]`.
    pub percentile_lines: Vec<f64>,
    pub fill_between_percentile_lines: bool,
    /// Literal data values.
    pub value_lines: Vec<f64>,
    pub fill_between_value_lines: bool,
    pub style: SparklineStyle,
}

impl SparklineConfig {
    /// Line sparkline with default padding, `FromZero` scaling and no overlays.
    #[must_use]
    pub fn line() -> Self {
        Self::default()
    }

    /// Bar sparkline with default bar options.
    #[must_use]
    pub fn bar() -> Self {
        Self::default().with_variant(SparklineVariant::Bar(BarOptions::default()))
    }

    #[must_use]
    pub fn with_variant(mut self, variant: SparklineVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Switches to the bar variant with explicit options.
    #[must_use]
    pub fn with_bar_options(self, options: BarOptions) -> Self {
        self.with_variant(SparklineVariant::Bar(options))
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_scale_policy(mut self, policy: ScalePolicy) -> Self {
        self.scale_policy = policy;
        self
    }

    /// Sets percentile rank fractions and whether to shade between the outermost ones.
    #[must_use]
    pub fn with_percentile_lines(mut self, rank_fractions: Vec<f64>, fill_between: bool) -> Self {
        self.percentile_lines = rank_fractions;
        self.fill_between_percentile_lines = fill_between;
        self
    }

    /// Sets literal value lines and whether to shade between the outermost ones.
    #[must_use]
    pub fn with_value_lines(mut self, values: Vec<f64>, fill_between: bool) -> Self {
        self.value_lines = values;
        self.fill_between_value_lines = fill_between;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SparklineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> SparklineResult<()> {
        validate_config(self)
    }
}
