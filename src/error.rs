use thiserror::Error;

use crate::capabilities::{Algorithm, ScaleSupport};

/// Failure of a single scale call. Every variant is raised before any output pixel is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("{algorithm} does not support a scale factor of {requested} ({supported})")]
    UnsupportedScale {
        algorithm: Algorithm,
        requested: f32,
        supported: ScaleSupport,
    },

    #[error(
        "output is {actual_width}x{actual_height} but {expected_width}x{expected_height} is required"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("row of {required} pixels exceeds the fixed window capacity of {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("invalid input size (expected {expected} bytes, got {actual})")]
    InvalidBuffer { expected: usize, actual: usize },
}
