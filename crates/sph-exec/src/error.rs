//! Execution substrate errors.

use thiserror::Error;

/// Result type for substrate operations.
pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Error, Debug)]
pub enum ExecError {
    /// Rejected thread-count request (zero threads).
    #[error("Invalid thread count: {requested}")]
    InvalidThreadCount { requested: usize },

    /// Dedicated pool construction failed.
    #[error("Thread pool construction failed: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// Host/device copy with mismatched extents.
    #[error("Buffer length mismatch for '{label}': buffer={buffer}, source={source_len}")]
    LengthMismatch {
        label: String,
        buffer: usize,
        source_len: usize,
    },
}
