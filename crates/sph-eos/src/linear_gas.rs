//! Linear gas model.

use sph_core::{EosId, Real};

use crate::error::EosResult;
use crate::model::{EosModel, floor_pressure};
use crate::params::EosParams;

/// Ideal-gas-like relation with a pressure floor.
///
/// `p = max((gamma - 1) * rho * e, pcutoff)`. The floor keeps cavitating or
/// cold elements from feeding negative or vanishing pressure into the
/// sound-speed expression, which would destabilize the time stepping that
/// consumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGas {
    params: EosParams,
}

impl LinearGas {
    /// Validating constructor; fails fast on bad parameters.
    pub fn new(id: EosId, gamma: Real, pcutoff: Real) -> EosResult<Self> {
        Ok(Self {
            params: EosParams::new(id, gamma, pcutoff)?,
        })
    }
}

impl EosModel for LinearGas {
    fn name(&self) -> &'static str {
        "linear_gas"
    }

    fn params(&self) -> &EosParams {
        &self.params
    }

    #[inline]
    fn pressure_sound_speed(&self, density: Real, internal_energy: Real) -> (Real, Real) {
        let gamma = self.params.gamma();
        let p = floor_pressure(
            (gamma - 1.0) * density * internal_energy,
            self.params.pcutoff(),
        );
        let sos = gamma * p / density;
        (p, sos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sph_core::Id;

    fn air() -> LinearGas {
        LinearGas::new(Id::from_index(0), 1.4, 1e-6).unwrap()
    }

    #[test]
    fn unit_density_unit_energy() {
        let (p, sos) = air().pressure_sound_speed(1.0, 1.0);
        assert_relative_eq!(p, 0.4, epsilon = 1e-12);
        assert_relative_eq!(sos, 0.56, epsilon = 1e-12);
    }

    #[test]
    fn zero_energy_hits_the_floor_exactly() {
        let (p, sos) = air().pressure_sound_speed(1.0, 0.0);
        // Raw pressure is 0 < pcutoff: the clamp must yield the floor
        // itself, not merely something above it.
        assert_eq!(p, 1e-6);
        assert_relative_eq!(sos, 1.4e-6, epsilon = 1e-12);
    }

    #[test]
    fn negative_energy_hits_the_floor() {
        let (p, _) = air().pressure_sound_speed(1.0, -5.0);
        assert_eq!(p, 1e-6);
    }

    #[test]
    fn sound_speed_scales_inversely_with_density() {
        let eos = air();
        let (p2, sos2) = eos.pressure_sound_speed(2.0, 1.0);
        assert_relative_eq!(sos2, 1.4 * p2 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn construction_rejects_bad_gamma() {
        assert!(LinearGas::new(Id::from_index(0), 1.0, 1e-6).is_err());
    }
}
