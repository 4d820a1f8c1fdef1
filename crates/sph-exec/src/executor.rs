//! Data-parallel submission of elementwise transforms.

use core::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use sph_core::Real;

/// Where a parallel region runs.
///
/// `Serial` is the single-threaded reference path; `Threaded` submits to the
/// process-global rayon pool; `Dedicated` submits to a pool built by
/// [`crate::ExecRuntime`]. Lane results are identical across variants.
#[derive(Clone, Default)]
pub enum Executor {
    /// Single-threaded reference path.
    Serial,
    /// Process-global thread pool.
    #[default]
    Threaded,
    /// Dedicated pool owned by the application runtime.
    Dedicated(Arc<rayon::ThreadPool>),
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "Executor::Serial"),
            Self::Threaded => write!(f, "Executor::Threaded"),
            Self::Dedicated(pool) => {
                write!(f, "Executor::Dedicated({} threads)", pool.current_num_threads())
            }
        }
    }
}

impl Executor {
    /// Elementwise transform of two input arrays into two output arrays.
    ///
    /// Submits one parallel region of `x.len()` independent lanes; lane `i`
    /// writes `kernel(x[i], y[i])` into `(out_a[i], out_b[i])`. The call
    /// blocks until every lane has finished. No inter-lane communication,
    /// no cancellation, no timeout.
    ///
    /// Precondition: all four slices have equal length. Callers validate
    /// shapes before submitting; this is not re-checked per lane.
    pub fn transform2<F>(
        &self,
        x: &[Real],
        y: &[Real],
        out_a: &mut [Real],
        out_b: &mut [Real],
        kernel: F,
    ) where
        F: Fn(Real, Real) -> (Real, Real) + Sync,
    {
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), out_a.len());
        debug_assert_eq!(x.len(), out_b.len());

        match self {
            Self::Serial => serial_transform2(x, y, out_a, out_b, &kernel),
            Self::Threaded => par_transform2(x, y, out_a, out_b, &kernel),
            Self::Dedicated(pool) => {
                pool.install(|| par_transform2(x, y, out_a, out_b, &kernel));
            }
        }
    }
}

fn serial_transform2<F>(x: &[Real], y: &[Real], out_a: &mut [Real], out_b: &mut [Real], kernel: &F)
where
    F: Fn(Real, Real) -> (Real, Real) + Sync,
{
    for (((x, y), a), b) in x.iter().zip(y).zip(out_a.iter_mut()).zip(out_b.iter_mut()) {
        let (va, vb) = kernel(*x, *y);
        *a = va;
        *b = vb;
    }
}

fn par_transform2<F>(x: &[Real], y: &[Real], out_a: &mut [Real], out_b: &mut [Real], kernel: &F)
where
    F: Fn(Real, Real) -> (Real, Real) + Sync,
{
    out_a
        .par_iter_mut()
        .zip(out_b.par_iter_mut())
        .zip(x.par_iter().zip(y.par_iter()))
        .for_each(|((a, b), (x, y))| {
            let (va, vb) = kernel(*x, *y);
            *a = va;
            *b = vb;
        });
}
