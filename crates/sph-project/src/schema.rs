//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub substances: Vec<SubstanceDef>,
    pub batch: BatchDef,
    #[serde(default)]
    pub execution: ExecutionDef,
}

/// One substance entry, discriminated by model kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubstanceDef {
    LinearGas {
        id: u32,
        gamma: f64,
        pcutoff: f64,
    },
    StiffenedGas {
        id: u32,
        gamma: f64,
        pcutoff: f64,
        #[serde(default)]
        pinf: f64,
    },
}

impl SubstanceDef {
    pub fn id(&self) -> u32 {
        match self {
            Self::LinearGas { id, .. } | Self::StiffenedGas { id, .. } => *id,
        }
    }

    pub fn gamma(&self) -> f64 {
        match self {
            Self::LinearGas { gamma, .. } | Self::StiffenedGas { gamma, .. } => *gamma,
        }
    }

    pub fn pcutoff(&self) -> f64 {
        match self {
            Self::LinearGas { pcutoff, .. } | Self::StiffenedGas { pcutoff, .. } => *pcutoff,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::LinearGas { .. } => "linear_gas",
            Self::StiffenedGas { .. } => "stiffened_gas",
        }
    }
}

/// Shared working set: uniform initial samples for the demo run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchDef {
    /// Number of elements N.
    pub elements: usize,
    /// Initial density sample (must be nonzero; a division occurs).
    pub density: f64,
    /// Initial specific internal energy sample.
    pub internal_energy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExecutionDef {
    #[serde(default)]
    pub mode: ExecModeDef,
    /// Pool size for dedicated mode; omitted = size to the machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecModeDef {
    Serial,
    #[default]
    Threaded,
    Dedicated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substance_defs_parse_by_tag() {
        let yaml = r#"
- type: linear_gas
  id: 0
  gamma: 1.4
  pcutoff: 1.0e-6
- type: stiffened_gas
  id: 1
  gamma: 1.4
  pcutoff: 1.0e-6
  pinf: 0.1
"#;
        let defs: Vec<SubstanceDef> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].kind(), "linear_gas");
        assert_eq!(defs[1].kind(), "stiffened_gas");
        assert_eq!(defs[1].id(), 1);
    }

    #[test]
    fn pinf_defaults_to_zero() {
        let yaml = r#"
type: stiffened_gas
id: 3
gamma: 2.0
pcutoff: 0.0
"#;
        let def: SubstanceDef = serde_yaml::from_str(yaml).unwrap();
        match def {
            SubstanceDef::StiffenedGas { pinf, .. } => assert_eq!(pinf, 0.0),
            other => panic!("wrong kind: {other:?}"),
        }
    }

    #[test]
    fn execution_defaults_to_threaded() {
        let exec = ExecutionDef::default();
        assert_eq!(exec.mode, ExecModeDef::Threaded);
        assert_eq!(exec.threads, None);
    }
}
