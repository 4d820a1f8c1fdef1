//! Project validation logic.
//!
//! Runs on every load and save, before any substance is constructed or any
//! evaluation is attempted. Numeric preconditions the evaluation hot path
//! refuses to check per element (nonzero density in particular) are
//! enforced here instead.

use std::collections::HashSet;

use crate::schema::{ExecModeDef, Project, SubstanceDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate substance id: {id}")]
    DuplicateId { id: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut ids = HashSet::new();
    for substance in &project.substances {
        if !ids.insert(substance.id()) {
            return Err(ValidationError::DuplicateId {
                id: substance.id(),
            });
        }
        validate_substance(substance)?;
    }

    validate_batch(project)?;
    validate_execution(project)?;

    Ok(())
}

fn validate_substance(substance: &SubstanceDef) -> Result<(), ValidationError> {
    let gamma = substance.gamma();
    if !gamma.is_finite() || gamma <= 1.0 {
        return Err(invalid("gamma", gamma, "must be finite and > 1"));
    }

    let pcutoff = substance.pcutoff();
    if !pcutoff.is_finite() || pcutoff < 0.0 {
        return Err(invalid("pcutoff", pcutoff, "must be finite and >= 0"));
    }

    if let SubstanceDef::StiffenedGas { pinf, .. } = substance {
        if !pinf.is_finite() {
            return Err(invalid("pinf", *pinf, "must be finite"));
        }
    }

    Ok(())
}

fn validate_batch(project: &Project) -> Result<(), ValidationError> {
    if project.batch.elements == 0 {
        return Err(ValidationError::InvalidValue {
            field: "batch.elements".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let rho = project.batch.density;
    if !rho.is_finite() || rho == 0.0 {
        return Err(invalid(
            "batch.density",
            rho,
            "must be finite and nonzero (a division occurs per element)",
        ));
    }

    let eint = project.batch.internal_energy;
    if !eint.is_finite() {
        return Err(invalid("batch.internal_energy", eint, "must be finite"));
    }

    Ok(())
}

fn validate_execution(project: &Project) -> Result<(), ValidationError> {
    if project.execution.threads == Some(0) {
        return Err(ValidationError::InvalidValue {
            field: "execution.threads".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if project.execution.threads.is_some() && project.execution.mode != ExecModeDef::Dedicated {
        return Err(ValidationError::InvalidValue {
            field: "execution.threads".to_string(),
            value: project.execution.threads.unwrap_or(0).to_string(),
            reason: "only meaningful with mode: dedicated".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BatchDef, ExecutionDef};

    fn project() -> Project {
        Project {
            version: 1,
            name: "demo".to_string(),
            substances: vec![
                SubstanceDef::LinearGas {
                    id: 0,
                    gamma: 1.4,
                    pcutoff: 1e-6,
                },
                SubstanceDef::StiffenedGas {
                    id: 1,
                    gamma: 1.4,
                    pcutoff: 1e-6,
                    pinf: 0.1,
                },
            ],
            batch: BatchDef {
                elements: 16,
                density: 1.0,
                internal_energy: 1.0,
            },
            execution: ExecutionDef::default(),
        }
    }

    #[test]
    fn valid_project_passes() {
        assert!(validate_project(&project()).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut p = project();
        p.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_substance_ids() {
        let mut p = project();
        p.substances.push(SubstanceDef::LinearGas {
            id: 0,
            gamma: 1.4,
            pcutoff: 0.0,
        });
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::DuplicateId { id: 0 })
        ));
    }

    #[test]
    fn rejects_gamma_at_one() {
        let mut p = project();
        p.substances[0] = SubstanceDef::LinearGas {
            id: 0,
            gamma: 1.0,
            pcutoff: 0.0,
        };
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_negative_pcutoff() {
        let mut p = project();
        p.substances[0] = SubstanceDef::LinearGas {
            id: 0,
            gamma: 1.4,
            pcutoff: -1.0,
        };
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_zero_density() {
        let mut p = project();
        p.batch.density = 0.0;
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_zero_elements() {
        let mut p = project();
        p.batch.elements = 0;
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_threads_without_dedicated_mode() {
        let mut p = project();
        p.execution.threads = Some(4);
        assert!(validate_project(&p).is_err());

        p.execution.mode = ExecModeDef::Dedicated;
        assert!(validate_project(&p).is_ok());
    }
}
