//! Closed model set and heterogeneous dispatch.

use sph_exec::Executor;
use tracing::debug;

use crate::batch::ElementBatch;
use crate::error::EosResult;
use crate::linear_gas::LinearGas;
use crate::model::EosModel;
use crate::params::EosParams;
use crate::stiffened_gas::StiffenedGas;

/// One substance instance, tagged by model kind.
///
/// The set is closed on purpose. Every dispatch site matches exhaustively
/// with no wildcard arm, so adding a kind refuses to compile until each
/// site handles it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eos {
    LinearGas(LinearGas),
    StiffenedGas(StiffenedGas),
}

impl Eos {
    pub fn name(&self) -> &'static str {
        match self {
            Eos::LinearGas(m) => m.name(),
            Eos::StiffenedGas(m) => m.name(),
        }
    }

    pub fn params(&self) -> &EosParams {
        match self {
            Eos::LinearGas(m) => m.params(),
            Eos::StiffenedGas(m) => m.params(),
        }
    }

    /// Resolve the concrete model and evaluate it over `batch`.
    ///
    /// Each arm monomorphizes the batch evaluator for its model; no
    /// virtual call reaches the parallel region.
    pub fn evaluate(&self, exec: &Executor, batch: &mut ElementBatch<'_>) -> EosResult<()> {
        match self {
            Eos::LinearGas(m) => m.evaluate(exec, batch),
            Eos::StiffenedGas(m) => m.evaluate(exec, batch),
        }
    }
}

impl From<LinearGas> for Eos {
    fn from(m: LinearGas) -> Self {
        Eos::LinearGas(m)
    }
}

impl From<StiffenedGas> for Eos {
    fn from(m: StiffenedGas) -> Self {
        Eos::StiffenedGas(m)
    }
}

/// Evaluate every instance of a substance table against one shared batch.
///
/// Instances run in order, one at a time; each produces one fully parallel
/// internal region. Later instances overwrite the outputs of earlier ones,
/// so after a successful return the batch holds the last instance's
/// results.
pub fn evaluate_table(
    table: &[Eos],
    exec: &Executor,
    batch: &mut ElementBatch<'_>,
) -> EosResult<()> {
    for eos in table {
        debug!(
            model = eos.name(),
            id = %eos.params().id(),
            n = batch.len(),
            "evaluating substance"
        );
        eos.evaluate(exec, batch)?;
    }
    Ok(())
}
