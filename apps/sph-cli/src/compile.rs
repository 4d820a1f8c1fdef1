//! Project-to-runtime compilation.
//!
//! Turns validated project definitions into live objects: the substance
//! table, the substrate-owned element buffers, and the executor (plus the
//! dedicated runtime when one is requested, which must outlive its
//! executor).

use sph_core::Id;
use sph_eos::{ElementBatch, Eos, LinearGas, StiffenedGas};
use sph_exec::{DeviceBuffer, ExecRuntime, Executor};
use sph_project::{ExecModeDef, ExecutionDef, Project, SubstanceDef};
use tracing::info;

use crate::error::AppResult;
use crate::report::{RunReport, SubstanceReport};

/// Everything needed to evaluate one project: substance table, element
/// buffers (allocated once, reused across evaluations), and executor.
pub struct CompiledRun {
    pub name: String,
    pub table: Vec<Eos>,
    pub density: DeviceBuffer,
    pub internal_energy: DeviceBuffer,
    pub pressure: DeviceBuffer,
    pub sound_speed: DeviceBuffer,
    pub executor: Executor,
    // Owns the dedicated pool for the executor's lifetime.
    _runtime: Option<ExecRuntime>,
}

pub fn compile_project(project: &Project) -> AppResult<CompiledRun> {
    let table = build_substance_table(project)?;
    let (executor, runtime) = build_executor(&project.execution)?;

    let n = project.batch.elements;
    info!(
        substances = table.len(),
        elements = n,
        executor = ?executor,
        "project compiled"
    );

    Ok(CompiledRun {
        name: project.name.clone(),
        table,
        density: DeviceBuffer::filled("density", n, project.batch.density),
        internal_energy: DeviceBuffer::filled(
            "internal_energy",
            n,
            project.batch.internal_energy,
        ),
        pressure: DeviceBuffer::zeros("pressure", n),
        sound_speed: DeviceBuffer::zeros("sound_speed", n),
        executor,
        _runtime: runtime,
    })
}

pub fn build_substance_table(project: &Project) -> AppResult<Vec<Eos>> {
    project
        .substances
        .iter()
        .map(|def| {
            let eos = match def {
                SubstanceDef::LinearGas { id, gamma, pcutoff } => {
                    LinearGas::new(Id::from_index(*id), *gamma, *pcutoff)?.into()
                }
                SubstanceDef::StiffenedGas {
                    id,
                    gamma,
                    pcutoff,
                    pinf,
                } => StiffenedGas::new(Id::from_index(*id), *gamma, *pcutoff, *pinf)?.into(),
            };
            Ok(eos)
        })
        .collect()
}

fn build_executor(def: &ExecutionDef) -> AppResult<(Executor, Option<ExecRuntime>)> {
    Ok(match def.mode {
        ExecModeDef::Serial => (Executor::Serial, None),
        ExecModeDef::Threaded => (Executor::Threaded, None),
        ExecModeDef::Dedicated => {
            let runtime = ExecRuntime::init(def.threads)?;
            (runtime.executor(), Some(runtime))
        }
    })
}

impl CompiledRun {
    /// Evaluate every substance against the shared batch, in table order.
    ///
    /// After each instance's parallel region completes, the outputs are
    /// mirrored to host storage for the report — later instances overwrite
    /// the shared output arrays.
    pub fn run(&mut self) -> AppResult<RunReport> {
        let mut substances = Vec::with_capacity(self.table.len());

        for eos in &self.table {
            let mut batch = ElementBatch::new(
                self.density.view(),
                self.internal_energy.view(),
                self.pressure.view_mut(),
                self.sound_speed.view_mut(),
            );
            eos.evaluate(&self.executor, &mut batch)?;

            // Explicit mirror before host-side reads.
            let p = self.pressure.mirror_to_host();
            let sos = self.sound_speed.mirror_to_host();
            let params = eos.params();
            substances.push(SubstanceReport {
                kind: eos.name(),
                id: params.id().index(),
                gamma: params.gamma(),
                pcutoff: params.pcutoff(),
                pinf: params.pinf(),
                pressure_first: p[0],
                sound_speed_first: sos[0],
            });
        }

        Ok(RunReport {
            project: self.name.clone(),
            elements: self.density.len(),
            substances,
        })
    }
}
