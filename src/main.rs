mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use owo_colors::{OwoColorize, Stream};
use poetry_sbom::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use poetry_sbom::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use poetry_sbom::application::dto::{ManifestSource, OutputFormat, SbomRequest};
use poetry_sbom::application::factories::FormatterFactory;
use poetry_sbom::application::use_cases::GenerateSbomUseCase;
use poetry_sbom::ports::outbound::{OutputPresenter, ProgressReporter};
use poetry_sbom::sbom_generation::services::BomRefStrategy;
use poetry_sbom::shared::error::{ExitCode, SbomError};
use poetry_sbom::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// CLI flags merged with the config file
struct Settings {
    request: SbomRequest,
    format: OutputFormat,
    output: Option<PathBuf>,
    quiet: bool,
    config_path: Option<PathBuf>,
    config_warnings: Vec<String>,
}

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = resolve_settings(args)?;

    if settings.quiet {
        generate(settings, SilentProgressReporter)
    } else {
        generate(settings, StderrProgressReporter::new())
    }
}

fn resolve_settings(args: Args) -> Result<Settings> {
    let project_path = args.path.unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let (config, config_path) = match args.config {
        Some(path) => (config::load_config_from_path(&path)?, Some(path)),
        None => match config::discover_config(&project_path)? {
            Some(config) => (config, Some(project_path.join(config::CONFIG_FILENAME))),
            None => (ConfigFile::default(), None),
        },
    };

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    let manifest = if let Some(path) = args.pyproject {
        ManifestSource::Explicit(path)
    } else if args.no_pyproject || config.include_pyproject == Some(false) {
        ManifestSource::Skip
    } else {
        ManifestSource::Discover
    };

    let bom_ref_strategy = if args.purl_bom_ref || config.purl_bom_ref.unwrap_or(false) {
        BomRefStrategy::Purl
    } else {
        BomRefStrategy::Generated
    };

    let mut request = SbomRequest::new(project_path)
        .with_manifest(manifest)
        .with_bom_ref_strategy(bom_ref_strategy);
    if let Some(lock) = args.lock {
        request = request.with_lockfile(lock);
    }

    Ok(Settings {
        request,
        format,
        output: args.output,
        quiet: args.quiet || config.quiet.unwrap_or(false),
        config_path,
        config_warnings: config::unknown_field_warnings(&config),
    })
}

fn generate<PR: ProgressReporter>(settings: Settings, progress_reporter: PR) -> Result<()> {
    if let Some(path) = &settings.config_path {
        progress_reporter.report(&format!("⚙️  Loaded config file: {}", path.display()));
    }
    for warning in &settings.config_warnings {
        progress_reporter.report_warning(warning);
    }

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        &progress_reporter,
    );

    let response = use_case.execute(settings.request)?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter: Box<dyn OutputPresenter> = match &settings.output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    if let Some(path) = &settings.output {
        progress_reporter.report(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Directory does not exist ({})", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
