use crate::application::dto::{ManifestSource, SbomRequest, SbomResponse};
use crate::ports::outbound::{LockfileReader, ProgressReporter, ProjectConfigReader};
use crate::sbom_generation::domain::{Component, LockDocument, PackageRecord};
use crate::sbom_generation::services::{
    ComponentBuilder, LockDocumentReader, RootMetadataBuilder, SbomGenerator, SkippedDescriptor,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// GenerateSbomUseCase - turns a poetry.lock (and optional pyproject.toml)
/// into an SBOM response.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `PR` - ProgressReporter implementation (the diagnostic channel)
pub struct GenerateSbomUseCase<LR, PCR, PR> {
    lockfile_reader: LR,
    project_config_reader: PCR,
    progress_reporter: PR,
}

impl<LR, PCR, PR> GenerateSbomUseCase<LR, PCR, PR>
where
    LR: LockfileReader,
    PCR: ProjectConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, project_config_reader: PCR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            project_config_reader,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Either every package becomes a component or nothing is returned:
    /// a structurally invalid lock file or a malformed manifest aborts the
    /// whole run. Unusable distribution hashes only drop that reference.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read and decode the lock file
        let lockfile_path = request.resolved_lockfile_path();
        let document = self.load_lock_document(&lockfile_path)?;

        // Step 2: Normalize package entries
        let records = LockDocumentReader::read(&document).with_context(|| {
            format!("Invalid package entry in {}", lockfile_path.display())
        })?;
        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", records.len()));

        // Step 3: Build components
        let (components, skipped) = self.build_components(&request, &records);

        // Step 4: Root component from pyproject.toml
        let root_component = self.build_root_component(&request)?;

        let metadata = SbomGenerator::generate_default_metadata().with_component(root_component);

        self.progress_reporter.report_completion(&format!(
            "✅ Built {} component(s)",
            components.len()
        ));

        Ok(SbomResponse::new(components, metadata, skipped))
    }

    /// Reads the lock file through the port and decodes it
    fn load_lock_document(&self, lockfile_path: &Path) -> Result<LockDocument> {
        self.progress_reporter.report(&format!(
            "📖 Loading poetry.lock file from: {}",
            lockfile_path.display()
        ));

        let content = self.lockfile_reader.read_lockfile(lockfile_path)?;

        let document: LockDocument =
            toml::from_str(&content).map_err(|e| SbomError::LockfileParseError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            })?;

        self.progress_reporter.report(&format!(
            "🔎 Lock file format version: {}",
            document.lock_version()
        ));

        Ok(document)
    }

    /// Builds one component per record, reporting every skipped descriptor
    fn build_components(
        &self,
        request: &SbomRequest,
        records: &[PackageRecord<'_>],
    ) -> (Vec<Component>, Vec<SkippedDescriptor>) {
        let builder = ComponentBuilder::new(request.bom_ref_strategy);
        let total = records.len();
        let mut components = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        for (index, record) in records.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(record.package().name()));

            let built = builder.build(record);
            for skip in &built.skipped {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: suppressed distribution file '{}' of {}: {}",
                    skip.file, skip.package, skip.reason
                ));
            }
            components.push(built.component);
            skipped.extend(built.skipped);
        }

        (components, skipped)
    }

    /// Reads and decodes the manifest according to the request's policy
    fn build_root_component(&self, request: &SbomRequest) -> Result<Option<Component>> {
        let Some(manifest_path) = request.resolved_manifest_path() else {
            return Ok(None);
        };

        let content = match self.project_config_reader.find_project_config(&manifest_path)? {
            Some(content) => content,
            None if matches!(request.manifest, ManifestSource::Explicit(_)) => {
                return Err(SbomError::ManifestNotFound {
                    path: manifest_path,
                }
                .into());
            }
            None => {
                self.progress_reporter.report(&format!(
                    "ℹ️  No pyproject.toml at {}; SBOM will have no root component",
                    manifest_path.display()
                ));
                return Ok(None);
            }
        };

        self.progress_reporter.report(&format!(
            "📖 Loading project metadata from: {}",
            manifest_path.display()
        ));

        let manifest: toml::Table =
            toml::from_str(&content).map_err(|e| SbomError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        RootMetadataBuilder::build(Some(&manifest)).with_context(|| {
            format!("Invalid project metadata in {}", manifest_path.display())
        })
    }
}
