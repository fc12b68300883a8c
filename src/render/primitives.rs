use serde::{Deserialize, Serialize};

use crate::error::{SparklineError, SparklineResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as an 8-bit `#RRGGBBAA` hex token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Opaque gray at an 8-bit intensity.
    #[must_use]
    pub fn gray(level: u8) -> Self {
        Self::rgba8(level, level, level, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(token: &str) -> SparklineResult<Self> {
        let invalid = || SparklineError::InvalidConfig(format!("malformed color token `{token}`"));
        let digits = token.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |index: usize| {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).map_err(|_| invalid())
        };
        match digits.len() {
            6 => Ok(Self::rgba8(channel(0)?, channel(1)?, channel(2)?, 1.0)),
            8 => Ok(Self::rgba8(
                channel(0)?,
                channel(1)?,
                channel(2)?,
                f64::from(channel(3)?) / 255.0,
            )),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha)
        )
    }

    pub fn validate(self) -> SparklineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SparklineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = SparklineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
        }
    }

    pub fn validate(self) -> SparklineResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(SparklineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(SparklineError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one axis-aligned rectangle in pixel space.
///
/// The outline uses the active stroke color at `border_width`; a zero width
/// fills without an outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, border_width: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            border_width,
        }
    }

    pub fn validate(self) -> SparklineResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(SparklineError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(SparklineError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(SparklineError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Drawing-surface operation, executed in order by a renderer.
///
/// Colors set by `SetStrokeColor` / `SetFillColor` stay active until replaced;
/// `ClearStroke` disables outlines until the next `SetStrokeColor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetBackground { color: Color },
    SetStrokeColor { color: Color },
    SetFillColor { color: Color },
    ClearStroke,
    Line(LinePrimitive),
    Rect(RectPrimitive),
}

impl DrawCommand {
    pub fn validate(self) -> SparklineResult<()> {
        match self {
            Self::SetBackground { color }
            | Self::SetStrokeColor { color }
            | Self::SetFillColor { color } => color.validate(),
            Self::ClearStroke => Ok(()),
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
        }
    }
}
