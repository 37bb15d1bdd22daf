//! poetry-sbom - SBOM generation tool for Poetry projects
//!
//! This library turns a `poetry.lock` (and optionally the project's
//! `pyproject.toml`) into CycloneDX components, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): lock document model, package
//!   records, components, hashes and the services that build them
//! - **Application Layer** (`application`): the generation use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types and file security checks
//!
//! # Example
//!
//! ```no_run
//! use poetry_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SbomRequest::new(PathBuf::from("."));
//! let response = use_case.execute(request)?;
//!
//! let output = CycloneDxFormatter::new().format(&response)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CycloneDxFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ManifestSource, OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        LockfileReader, OutputPresenter, ProgressReporter, ProjectConfigReader, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Component, LockDocument, LockVersion, Package, PackageRecord, SbomMetadata,
    };
    pub use crate::sbom_generation::services::{
        BomRefStrategy, ComponentBuilder, LockDocumentReader, RootMetadataBuilder, SbomGenerator,
    };
    pub use crate::shared::Result;
}
