use thiserror::Error;

/// Degraded conditions the slider recognises.
///
/// Configuration problems are logged and absorbed by the slider itself; only
/// direct navigation hands its rejection back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("invalid interval {0:?}: expected a positive number of milliseconds")]
    InvalidInterval(String),

    #[error("invalid dimension {0:?}: expected a length in px or %")]
    InvalidDimension(String),

    #[error("invalid slide target {0:?}")]
    InvalidTarget(String),

    #[error("slide {target} is out of range for {count} slide(s)")]
    TargetOutOfRange { target: usize, count: usize },

    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),
}

pub type Result<T> = std::result::Result<T, SliderError>;
