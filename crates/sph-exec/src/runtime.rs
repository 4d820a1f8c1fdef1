//! Process-wide execution runtime bootstrap.

use std::sync::Arc;

use crate::error::{ExecError, ExecResult};
use crate::executor::Executor;

/// Dedicated thread pool for the lifetime of the application.
///
/// Built once at process start by the binary and dropped on exit; dropping
/// releases the pool's threads on every exit path. Library crates receive
/// an [`Executor`] from [`ExecRuntime::executor`] and never own this.
#[derive(Debug)]
pub struct ExecRuntime {
    pool: Arc<rayon::ThreadPool>,
}

impl ExecRuntime {
    /// Build the dedicated pool.
    ///
    /// `threads = None` sizes the pool to the machine; `Some(0)` is rejected.
    pub fn init(threads: Option<usize>) -> ExecResult<Self> {
        if threads == Some(0) {
            return Err(ExecError::InvalidThreadCount { requested: 0 });
        }

        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("sph-exec-{i}"));
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Executor submitting to this runtime's pool.
    pub fn executor(&self) -> Executor {
        Executor::Dedicated(self.pool.clone())
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_explicit_threads() {
        let runtime = ExecRuntime::init(Some(2)).unwrap();
        assert_eq!(runtime.num_threads(), 2);
    }

    #[test]
    fn init_rejects_zero_threads() {
        let err = ExecRuntime::init(Some(0)).unwrap_err();
        assert!(matches!(err, ExecError::InvalidThreadCount { requested: 0 }));
    }

    #[test]
    fn runtime_executor_runs_transforms() {
        let runtime = ExecRuntime::init(Some(2)).unwrap();
        let exec = runtime.executor();

        let x = [1.0, 2.0];
        let y = [3.0, 4.0];
        let mut a = [0.0; 2];
        let mut b = [0.0; 2];
        exec.transform2(&x, &y, &mut a, &mut b, |x, y| (x - y, x / y));

        assert_eq!(a, [-2.0, -2.0]);
        assert_eq!(b, [1.0 / 3.0, 0.5]);
    }
}
