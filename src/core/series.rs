use rust_decimal::Decimal;

use crate::core::primitives::decimal_to_f64;
use crate::error::{SparklineError, SparklineResult};

/// Read-only sequence of heights bound to one sparkline.
///
/// Heights are extracted once at construction. A single-point input is
/// duplicated so every chart has at least one segment to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    heights: Vec<f64>,
    source_len: usize,
}

impl DataSeries {
    /// Builds a series whose items are their own heights.
    pub fn from_values(values: Vec<f64>) -> SparklineResult<Self> {
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(SparklineError::InvalidData(format!(
                "height at index {index} must be finite"
            )));
        }
        Self::normalized(values)
    }

    /// Builds a series from richer records through a height extractor.
    pub fn from_items<T, F>(items: &[T], extract_height: F) -> SparklineResult<Self>
    where
        F: Fn(&T) -> f64,
    {
        Self::from_values(items.iter().map(extract_height).collect())
    }

    /// Builds a series from decimal-valued records.
    pub fn from_decimal_values(values: &[Decimal]) -> SparklineResult<Self> {
        let mut heights = Vec::with_capacity(values.len());
        for value in values {
            heights.push(decimal_to_f64(*value, "height")?);
        }
        Self::normalized(heights)
    }

    fn normalized(mut heights: Vec<f64>) -> SparklineResult<Self> {
        let source_len = heights.len();
        match source_len {
            0 => return Err(SparklineError::EmptySeries),
            1 => heights.push(heights[0]),
            _ => {}
        }
        Ok(Self {
            heights,
            source_len,
        })
    }

    /// Effective heights used for scaling; always at least two entries.
    #[must_use]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Effective length after normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Number of items the caller supplied.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source_len
    }
}
