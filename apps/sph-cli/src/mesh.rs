//! Out-of-process mesh conversion.
//!
//! Conversion between simulation output and third-party mesh formats is
//! delegated to an external converter binary invoked with explicit input
//! and output paths. No interpreter or converter state lives in this
//! process; a conversion failure is reported through the child's exit
//! status and stderr.

use std::path::Path;
use std::process::Command;

use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error("Failed to launch mesh converter '{converter}': {source}")]
    Spawn {
        converter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mesh converter exited with {status}: {stderr}")]
    ConverterFailed { status: String, stderr: String },
}

/// Convert `input` to `output` by running `<converter> convert <in> <out>`.
///
/// The default converter is the `meshio` CLI, which infers both formats
/// from the file extensions.
pub fn convert_mesh(converter: &str, input: &Path, output: &Path) -> Result<(), MeshError> {
    let result = Command::new(converter)
        .arg("convert")
        .arg(input)
        .arg(output)
        .output()
        .map_err(|source| MeshError::Spawn {
            converter: converter.to_string(),
            source,
        })?;

    if !result.status.success() {
        return Err(MeshError::ConverterFailed {
            status: result.status.to_string(),
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }

    info!(
        input = %input.display(),
        output = %output.display(),
        "mesh converted"
    );
    Ok(())
}
