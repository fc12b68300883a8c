use serde::{Deserialize, Serialize};

/// Z-order slot of a draw command; earlier layers are painted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SparklineLayer {
    Background,
    PercentileBand,
    ValueLineBand,
    ValueLines,
    PercentileLines,
    Data,
}

impl SparklineLayer {
    /// Bands sit behind every stroke and the data is painted last.
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Background,
        Self::PercentileBand,
        Self::ValueLineBand,
        Self::ValueLines,
        Self::PercentileLines,
        Self::Data,
    ];

    #[must_use]
    pub fn z_index(self) -> usize {
        self as usize
    }
}
