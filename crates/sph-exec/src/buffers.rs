//! Substrate-owned element storage.

use sph_core::Real;

use crate::error::{ExecError, ExecResult};

/// One labeled element array owned by the execution substrate.
///
/// Allocated once per working set and reused across evaluations. With the
/// thread-pool substrate the storage is ordinary host memory, but consumers
/// still go through an explicit [`DeviceBuffer::mirror_to_host`] copy before
/// host-side reads, so the call pattern holds if storage moves off-host.
#[derive(Clone, Debug)]
pub struct DeviceBuffer {
    label: String,
    data: Vec<Real>,
}

impl DeviceBuffer {
    /// Allocate a zero-initialized buffer of `len` elements.
    pub fn zeros(label: impl Into<String>, len: usize) -> Self {
        Self {
            label: label.into(),
            data: vec![0.0; len],
        }
    }

    /// Allocate a buffer of `len` elements, all set to `value`.
    pub fn filled(label: impl Into<String>, len: usize, value: Real) -> Self {
        Self {
            label: label.into(),
            data: vec![value; len],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: Real) {
        self.data.fill(value);
    }

    /// Read-only view for submitting as a transform input.
    pub fn view(&self) -> &[Real] {
        &self.data
    }

    /// Mutable view for submitting as a transform output.
    pub fn view_mut(&mut self) -> &mut [Real] {
        &mut self.data
    }

    /// Explicit substrate-to-host copy of the current contents.
    pub fn mirror_to_host(&self) -> Vec<Real> {
        self.data.clone()
    }

    /// Shape-checked host-to-substrate upload.
    pub fn copy_from(&mut self, src: &[Real]) -> ExecResult<()> {
        if src.len() != self.data.len() {
            return Err(ExecError::LengthMismatch {
                label: self.label.clone(),
                buffer: self.data.len(),
                source_len: src.len(),
            });
        }
        self.data.copy_from_slice(src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_fill() {
        let mut buf = DeviceBuffer::zeros("rho", 4);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.view(), &[0.0; 4]);

        buf.fill(1.5);
        assert_eq!(buf.mirror_to_host(), vec![1.5; 4]);
    }

    #[test]
    fn filled_sets_initial_value() {
        let buf = DeviceBuffer::filled("eint", 3, 2.0);
        assert_eq!(buf.view(), &[2.0, 2.0, 2.0]);
        assert_eq!(buf.label(), "eint");
    }

    #[test]
    fn copy_from_rejects_wrong_length() {
        let mut buf = DeviceBuffer::zeros("p", 4);
        let err = buf.copy_from(&[1.0, 2.0]).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("length mismatch"));
        assert!(msg.contains("'p'"));
    }

    #[test]
    fn copy_from_uploads() {
        let mut buf = DeviceBuffer::zeros("sos", 2);
        buf.copy_from(&[3.0, 4.0]).unwrap();
        assert_eq!(buf.view(), &[3.0, 4.0]);
    }
}
