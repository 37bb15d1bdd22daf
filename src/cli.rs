use clap::Parser;
use std::path::PathBuf;

use poetry_sbom::application::dto::OutputFormat;

/// Generate CycloneDX SBOMs for Python projects managed by Poetry
#[derive(Parser, Debug)]
#[command(name = "poetry-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs from poetry.lock files",
    long_about = None
)]
pub struct Args {
    /// Output format: json (CycloneDX 1.6) or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Lock file to read instead of <path>/poetry.lock
    #[arg(long, value_name = "FILE")]
    pub lock: Option<PathBuf>,

    /// pyproject.toml to read the root component from (must exist)
    #[arg(long, value_name = "FILE", conflicts_with = "no_pyproject")]
    pub pyproject: Option<PathBuf>,

    /// Do not read pyproject.toml; the SBOM gets no root component
    #[arg(long)]
    pub no_pyproject: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use each component's package URL as its bom-ref instead of a random UUID
    #[arg(long)]
    pub purl_bom_ref: bool,

    /// Suppress progress and warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file (defaults to <path>/poetry-sbom.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
