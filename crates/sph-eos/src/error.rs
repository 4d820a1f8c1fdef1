//! Equation-of-state errors.

use sph_core::CoreError;
use thiserror::Error;

/// Result type for EOS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors from substance construction and batch evaluation.
///
/// Numeric domain violations (zero or negative density, wild energies) are
/// deliberately NOT represented here: per-element checks are rejected in
/// the hot path, and validity of the input samples is the caller's
/// responsibility.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Rejected at construction; the instance never exists, so no
    /// evaluation can be attempted with bad parameters.
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    /// Unequal batch extents, detected before the parallel region
    /// launches. Fatal for that call; the arrays are untouched.
    #[error("Batch shape mismatch: {what} (expected={expected}, got={got})")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

impl From<EosError> for CoreError {
    fn from(err: EosError) -> Self {
        match err {
            EosError::InvalidParameter { what } => CoreError::InvalidArg { what },
            EosError::ShapeMismatch {
                what,
                expected,
                got,
            } => CoreError::ShapeMismatch {
                what,
                expected,
                got,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::InvalidParameter {
            what: "gamma must be finite and > 1",
        };
        assert!(err.to_string().contains("gamma"));

        let err = EosError::ShapeMismatch {
            what: "pressure",
            expected: 8,
            got: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("pressure"));
        assert!(msg.contains("expected=8"));
    }

    #[test]
    fn error_to_core_error() {
        let err: CoreError = EosError::InvalidParameter { what: "pcutoff" }.into();
        assert!(matches!(err, CoreError::InvalidArg { .. }));

        let err: CoreError = EosError::ShapeMismatch {
            what: "sound_speed",
            expected: 2,
            got: 3,
        }
        .into();
        assert!(matches!(err, CoreError::ShapeMismatch { .. }));
    }
}
