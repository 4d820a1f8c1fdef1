//! Per-substance parameters.

use sph_core::{EosId, Real};

use crate::error::{EosError, EosResult};

/// Immutable parameter set for one substance instance.
///
/// Constructed once through a validating constructor, never mutated.
/// `id` is bookkeeping identity only; evaluation never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EosParams {
    id: EosId,
    gamma: Real,
    pcutoff: Real,
    pinf: Real,
}

impl EosParams {
    /// Parameters with a zero reference pressure.
    pub fn new(id: EosId, gamma: Real, pcutoff: Real) -> EosResult<Self> {
        Self::with_pinf(id, gamma, pcutoff, 0.0)
    }

    /// Parameters with an explicit reference pressure offset.
    ///
    /// Fails fast: `gamma` must be finite and > 1, `pcutoff` finite and
    /// non-negative, `pinf` finite.
    pub fn with_pinf(id: EosId, gamma: Real, pcutoff: Real, pinf: Real) -> EosResult<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(EosError::InvalidParameter {
                what: "gamma must be finite and > 1",
            });
        }
        if !pcutoff.is_finite() || pcutoff < 0.0 {
            return Err(EosError::InvalidParameter {
                what: "pcutoff must be finite and >= 0",
            });
        }
        if !pinf.is_finite() {
            return Err(EosError::InvalidParameter {
                what: "pinf must be finite",
            });
        }

        Ok(Self {
            id,
            gamma,
            pcutoff,
            pinf,
        })
    }

    pub fn id(&self) -> EosId {
        self.id
    }

    /// Adiabatic exponent, > 1.
    pub fn gamma(&self) -> Real {
        self.gamma
    }

    /// Pressure floor, >= 0.
    pub fn pcutoff(&self) -> Real {
        self.pcutoff
    }

    /// Reference pressure offset (0 for plain gases).
    pub fn pinf(&self) -> Real {
        self.pinf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sph_core::Id;

    fn id() -> EosId {
        Id::from_index(0)
    }

    #[test]
    fn accepts_valid_parameters() {
        let p = EosParams::with_pinf(id(), 1.4, 1e-6, 0.1).unwrap();
        assert_eq!(p.gamma(), 1.4);
        assert_eq!(p.pcutoff(), 1e-6);
        assert_eq!(p.pinf(), 0.1);
    }

    #[test]
    fn new_defaults_pinf_to_zero() {
        let p = EosParams::new(id(), 1.4, 0.0).unwrap();
        assert_eq!(p.pinf(), 0.0);
    }

    #[test]
    fn rejects_gamma_at_or_below_one() {
        assert!(EosParams::new(id(), 1.0, 0.0).is_err());
        assert!(EosParams::new(id(), 0.9, 0.0).is_err());
        assert!(EosParams::new(id(), f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rejects_negative_or_non_finite_pcutoff() {
        assert!(EosParams::new(id(), 1.4, -1e-6).is_err());
        assert!(EosParams::new(id(), 1.4, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_non_finite_pinf() {
        assert!(EosParams::with_pinf(id(), 1.4, 0.0, f64::NAN).is_err());
    }
}
