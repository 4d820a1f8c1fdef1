use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

mod compile;
mod error;
mod mesh;
mod report;

use error::AppResult;

#[derive(Parser)]
#[command(name = "sph-cli")]
#[command(about = "sphflow CLI - batch equation-of-state evaluation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List substances in a project
    Substances {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Evaluate every substance against the project's element batch
    Run {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// JSON report path (optional, defaults to a stdout summary)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a mesh file via the external converter
    ConvertMesh {
        /// Input mesh path
        input: PathBuf,
        /// Output mesh path (format inferred from the extension)
        output: PathBuf,
        /// Converter binary to invoke
        #[arg(long, default_value = "meshio")]
        converter: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Substances { project_path } => cmd_substances(&project_path),
        Commands::Run {
            project_path,
            output,
        } => cmd_run(&project_path, output.as_deref()),
        Commands::ConvertMesh {
            input,
            output,
            converter,
        } => cmd_convert_mesh(&converter, &input, &output),
    }
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    let project = sph_project::load_yaml(path)?;
    println!(
        "OK: {} ({} substances, {} elements)",
        project.name,
        project.substances.len(),
        project.batch.elements
    );
    Ok(())
}

fn cmd_substances(path: &Path) -> AppResult<()> {
    let project = sph_project::load_yaml(path)?;
    if project.substances.is_empty() {
        println!("No substances defined");
        return Ok(());
    }
    for s in &project.substances {
        match s {
            sph_project::SubstanceDef::LinearGas { id, gamma, pcutoff } => {
                println!("  [{id}] linear_gas     gamma={gamma} pcutoff={pcutoff}");
            }
            sph_project::SubstanceDef::StiffenedGas {
                id,
                gamma,
                pcutoff,
                pinf,
            } => {
                println!("  [{id}] stiffened_gas  gamma={gamma} pcutoff={pcutoff} pinf={pinf}");
            }
        }
    }
    Ok(())
}

fn cmd_run(path: &Path, output: Option<&Path>) -> AppResult<()> {
    let project = sph_project::load_yaml(path)?;
    info!(project = %project.name, "loaded project");

    let mut compiled = compile::compile_project(&project)?;
    let report = compiled.run()?;

    match output {
        Some(out_path) => {
            std::fs::write(out_path, serde_json::to_string_pretty(&report)?)?;
            info!(path = %out_path.display(), "report written");
        }
        None => report.print_summary(),
    }
    Ok(())
}

fn cmd_convert_mesh(converter: &str, input: &Path, output: &Path) -> AppResult<()> {
    mesh::convert_mesh(converter, input, output)?;
    println!(
        "Mesh converted: {} -> {}",
        input.display(),
        output.display()
    );
    Ok(())
}
