//! Element batch views.

use sph_core::Real;

use crate::error::{EosError, EosResult};

/// Four parallel array views over one working set of N elements.
///
/// Non-owning: the underlying storage belongs to the surrounding
/// application (typically [`sph_exec::DeviceBuffer`]s allocated once and
/// reused across steps). Density and internal energy are read-only for an
/// evaluation; pressure and sound speed are write-only. The `&mut` output
/// views enforce the single-writer discipline structurally — only one
/// in-flight evaluation can hold them.
pub struct ElementBatch<'a> {
    pub density: &'a [Real],
    pub internal_energy: &'a [Real],
    pub pressure: &'a mut [Real],
    pub sound_speed: &'a mut [Real],
}

impl<'a> ElementBatch<'a> {
    pub fn new(
        density: &'a [Real],
        internal_energy: &'a [Real],
        pressure: &'a mut [Real],
        sound_speed: &'a mut [Real],
    ) -> Self {
        Self {
            density,
            internal_energy,
            pressure,
            sound_speed,
        }
    }

    /// Extent N of the working set.
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Verify all four arrays share one extent.
    ///
    /// Runs once per evaluation, before the parallel region launches —
    /// per-lane error signaling across the substrate is not an option.
    pub fn check_shape(&self) -> EosResult<()> {
        let n = self.density.len();
        if self.internal_energy.len() != n {
            return Err(EosError::ShapeMismatch {
                what: "internal_energy",
                expected: n,
                got: self.internal_energy.len(),
            });
        }
        if self.pressure.len() != n {
            return Err(EosError::ShapeMismatch {
                what: "pressure",
                expected: n,
                got: self.pressure.len(),
            });
        }
        if self.sound_speed.len() != n {
            return Err(EosError::ShapeMismatch {
                what: "sound_speed",
                expected: n,
                got: self.sound_speed.len(),
            });
        }
        Ok(())
    }
}
