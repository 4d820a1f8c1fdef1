//! CLI error aggregation.

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(#[from] sph_project::ProjectError),

    #[error("Substance error: {0}")]
    Eos(#[from] sph_eos::EosError),

    #[error("Execution error: {0}")]
    Exec(#[from] sph_exec::ExecError),

    #[error("Mesh conversion error: {0}")]
    Mesh(#[from] crate::mesh::MeshError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
