//! sph-eos: equation-of-state evaluation for sphflow.
//!
//! Provides:
//! - `EosParams`: validated per-substance parameters
//! - `EosModel` trait: the per-model capability contract
//! - `LinearGas` and `StiffenedGas` substance models
//! - `Eos`: closed tagged set of concrete models
//! - `ElementBatch`: equal-length array views over one working set
//! - `evaluate_table`: heterogeneous dispatch over a substance table
//!
//! # Architecture
//!
//! Substance kinds form a closed set. Heterogeneous collections hold `Eos`
//! values and dispatch through exhaustive `match`, which monomorphizes the
//! batch evaluator per concrete model — no virtual call reaches the
//! parallel region. The parallel region itself is submitted through an
//! [`sph_exec::Executor`] chosen by the surrounding application.
//!
//! # Example
//!
//! ```
//! use sph_core::Id;
//! use sph_eos::{ElementBatch, Eos, LinearGas, evaluate_table};
//! use sph_exec::Executor;
//!
//! let table = vec![Eos::from(LinearGas::new(Id::from_index(0), 1.4, 1e-6).unwrap())];
//!
//! let density = vec![1.0; 8];
//! let internal_energy = vec![1.0; 8];
//! let mut pressure = vec![0.0; 8];
//! let mut sound_speed = vec![0.0; 8];
//!
//! let mut batch = ElementBatch::new(
//!     &density,
//!     &internal_energy,
//!     &mut pressure,
//!     &mut sound_speed,
//! );
//! evaluate_table(&table, &Executor::Serial, &mut batch).unwrap();
//!
//! assert!((pressure[0] - 0.4).abs() < 1e-12);
//! ```

pub mod batch;
pub mod error;
pub mod linear_gas;
pub mod model;
pub mod params;
pub mod stiffened_gas;
pub mod variant;

// Re-exports for ergonomics
pub use batch::ElementBatch;
pub use error::{EosError, EosResult};
pub use linear_gas::LinearGas;
pub use model::EosModel;
pub use params::EosParams;
pub use stiffened_gas::StiffenedGas;
pub use variant::{Eos, evaluate_table};
