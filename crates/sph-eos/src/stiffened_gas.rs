//! Stiffened gas model.

use sph_core::{EosId, Real};

use crate::error::EosResult;
use crate::model::{EosModel, floor_pressure};
use crate::params::EosParams;

/// Ideal-gas-like relation with a reference pressure offset.
///
/// `p = max((gamma - 1) * rho * e - gamma * pinf, pcutoff)`,
/// `sos = gamma * (p + pinf) / rho`. The offset `pinf` models
/// near-incompressible liquids; with `pinf = 0` the formulas reduce to
/// [`crate::LinearGas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StiffenedGas {
    params: EosParams,
}

impl StiffenedGas {
    /// Validating constructor; fails fast on bad parameters.
    pub fn new(id: EosId, gamma: Real, pcutoff: Real, pinf: Real) -> EosResult<Self> {
        Ok(Self {
            params: EosParams::with_pinf(id, gamma, pcutoff, pinf)?,
        })
    }
}

impl EosModel for StiffenedGas {
    fn name(&self) -> &'static str {
        "stiffened_gas"
    }

    fn params(&self) -> &EosParams {
        &self.params
    }

    #[inline]
    fn pressure_sound_speed(&self, density: Real, internal_energy: Real) -> (Real, Real) {
        let gamma = self.params.gamma();
        let pinf = self.params.pinf();
        let p = floor_pressure(
            (gamma - 1.0) * density * internal_energy - gamma * pinf,
            self.params.pcutoff(),
        );
        let sos = gamma * (p + pinf) / density;
        (p, sos)
    }
}
