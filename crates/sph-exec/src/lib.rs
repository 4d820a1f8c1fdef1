//! sph-exec: parallel-execution substrate for sphflow.
//!
//! Provides:
//! - `Executor`: serial, global-pool, or dedicated-pool submission of
//!   data-parallel elementwise transforms
//! - `DeviceBuffer`: substrate-owned element storage with explicit
//!   host mirroring
//! - `ExecRuntime`: process-wide pool bootstrap, owned by the binary
//!
//! # Architecture
//!
//! Library crates consume an `Executor` handed to them by the caller and
//! never initialize process-wide state themselves. The binary builds an
//! `ExecRuntime` at startup (or settles for the global pool) and passes
//! executors down. A transform call blocks until every lane has finished;
//! lanes are independent and results are identical across executor
//! variants, so a failed launch can simply be re-issued.

pub mod buffers;
pub mod error;
pub mod executor;
pub mod runtime;

pub use buffers::DeviceBuffer;
pub use error::{ExecError, ExecResult};
pub use executor::Executor;
pub use runtime::ExecRuntime;
