use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Every way a network operation can be rejected.
///
/// All variants are contract violations detected before any parameter or
/// buffer is touched, so a failed call never leaves a network half-updated.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// A layer size was zero.
    #[error("invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    /// The learning rate was not a positive finite number.
    #[error("invalid learning rate: must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    /// A slice passed at call time disagrees with the configured sizes.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The training or evaluation set contained no samples.
    #[error("dataset is empty")]
    EmptyDataset,

    /// `train_loop` was asked to run zero epochs.
    #[error("epoch count must be at least 1")]
    InvalidEpochCount,

    /// A snapshot was written by an incompatible version of the format.
    #[error("unsupported snapshot format version {0}")]
    UnsupportedFormat(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    /// Shorthand used by the length checks scattered across the crate.
    pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetworkError::DimensionMismatch { context, expected, actual })
        }
    }
}
