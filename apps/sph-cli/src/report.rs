//! Run reports.

use serde::Serialize;

/// Summary of one demo evaluation run, exportable as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project: String,
    pub elements: usize,
    pub substances: Vec<SubstanceReport>,
}

/// Per-substance results: parameters plus the first-element outputs
/// (the batch is uniform, so one element characterizes the run).
#[derive(Debug, Clone, Serialize)]
pub struct SubstanceReport {
    pub kind: &'static str,
    pub id: u32,
    pub gamma: f64,
    pub pcutoff: f64,
    pub pinf: f64,
    pub pressure_first: f64,
    pub sound_speed_first: f64,
}

impl RunReport {
    /// Human-readable summary for stdout.
    pub fn print_summary(&self) {
        println!("Project: {} ({} elements)", self.project, self.elements);
        for s in &self.substances {
            println!(
                "  [{}] {:<14} p[0] = {:.6e}, sos[0] = {:.6e}",
                s.id, s.kind, s.pressure_first, s.sound_speed_first
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_to_json() {
        let report = RunReport {
            project: "demo".to_string(),
            elements: 4,
            substances: vec![SubstanceReport {
                kind: "linear_gas",
                id: 0,
                gamma: 1.4,
                pcutoff: 1e-6,
                pinf: 0.0,
                pressure_first: 0.4,
                sound_speed_first: 0.56,
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"linear_gas\""));
        assert!(json.contains("\"elements\":4"));
    }
}
