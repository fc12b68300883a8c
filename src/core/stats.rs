use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{SparklineError, SparklineResult};

/// Observed minimum and maximum of a height sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

pub fn max(heights: &[f64]) -> SparklineResult<f64> {
    heights
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(SparklineError::EmptySeries)
}

pub fn min(heights: &[f64]) -> SparklineResult<f64> {
    heights
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(SparklineError::EmptySeries)
}

pub fn extent(heights: &[f64]) -> SparklineResult<Extent> {
    Ok(Extent {
        min: min(heights)?,
        max: max(heights)?,
    })
}

#[must_use]
pub fn sorted_ascending(heights: &[f64]) -> Vec<f64> {
    let mut sorted = heights.to_vec();
    sorted.sort_by_key(|value| OrderedFloat(*value));
    sorted
}

/// Index of the rank fraction within `n` sorted values.
///
/// Uses `round(rank_fraction * (n + 1))`, clamped to the last element so a
/// fraction of `1.0` selects the maximum instead of reading past the end.
#[must_use]
pub fn rank_index(rank_fraction: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let position = (rank_fraction * (n as f64 + 1.0)).round();
    if position <= 0.0 {
        0
    } else {
        (position as usize).min(n - 1)
    }
}

/// Value at `rank_fraction` of an already ascending-sorted sequence.
pub fn order_statistic_sorted(sorted: &[f64], rank_fraction: f64) -> SparklineResult<f64> {
    if sorted.is_empty() {
        return Err(SparklineError::EmptySeries);
    }
    Ok(sorted[rank_index(rank_fraction, sorted.len())])
}

pub fn order_statistic(heights: &[f64], rank_fraction: f64) -> SparklineResult<f64> {
    order_statistic_sorted(&sorted_ascending(heights), rank_fraction)
}
