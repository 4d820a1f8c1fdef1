//! Substance model capability contract.

use sph_core::Real;
use sph_exec::Executor;

use crate::batch::ElementBatch;
use crate::error::EosResult;
use crate::params::EosParams;

/// Floor a raw pressure at the configured cutoff.
///
/// Both models share this clamp-then-derive shape: the raw pressure is
/// floored first, and the floored value feeds the sound-speed expression.
#[inline]
pub(crate) fn floor_pressure(raw: Real, pcutoff: Real) -> Real {
    raw.max(pcutoff)
}

/// Contract implemented once per concrete substance model.
///
/// Implementations must be thread-safe (`Send + Sync`): the per-lane kernel
/// runs concurrently across all lanes of a batch. The kernel is pure and
/// deterministic — output at lane `i` depends only on the inputs at `i` and
/// the instance's own parameters, and identical inputs give
/// bitwise-identical outputs. A failed region launch can therefore be
/// re-submitted wholesale with no extra bookkeeping.
pub trait EosModel: Send + Sync {
    /// Model name, for logging and run reports.
    fn name(&self) -> &'static str;

    /// The instance's immutable parameters.
    fn params(&self) -> &EosParams;

    /// Per-lane kernel: (density, internal energy) -> (pressure, sound speed).
    ///
    /// The returned pressure is never below `pcutoff`. The sound-speed
    /// expression is `gamma * p / rho` with no square root; downstream
    /// stability-limited time stepping consumes exactly this quantity, and
    /// the reference values pin it, so it must not be "corrected".
    ///
    /// Precondition: `density != 0` (a division occurs). Not checked here —
    /// input validity is established upstream, never per lane.
    fn pressure_sound_speed(&self, density: Real, internal_energy: Real) -> (Real, Real);

    /// Evaluate the kernel over every element of `batch`.
    ///
    /// Checks extents once, then submits a single data-parallel region of
    /// `batch.len()` independent lanes to `exec` and blocks until every
    /// lane has finished. Results land in the batch's pressure and
    /// sound-speed arrays; mirroring them to host storage for reporting is
    /// the caller's job.
    fn evaluate(&self, exec: &Executor, batch: &mut ElementBatch<'_>) -> EosResult<()> {
        batch.check_shape()?;
        exec.transform2(
            batch.density,
            batch.internal_energy,
            batch.pressure,
            batch.sound_speed,
            |rho, eint| self.pressure_sound_speed(rho, eint),
        );
        Ok(())
    }
}
