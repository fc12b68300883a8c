use thiserror::Error;

pub type SparklineResult<T> = Result<T, SparklineError>;

#[derive(Debug, Error, PartialEq)]
pub enum SparklineError {
    #[error("data series is empty")]
    EmptySeries,

    #[error("degenerate scale range: lo={lo}, hi={hi}")]
    DegenerateRange { lo: f64, hi: f64 },

    #[error("invalid drawing surface: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
