use crate::sbom_generation::services::BomRefStrategy;
use std::path::{Path, PathBuf};

/// Default lock file name inside a project directory
pub const LOCKFILE_NAME: &str = "poetry.lock";

/// Default manifest name inside a project directory
pub const MANIFEST_NAME: &str = "pyproject.toml";

/// Where the optional pyproject.toml comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManifestSource {
    /// Use `pyproject.toml` next to the lock file if there is one
    #[default]
    Discover,
    /// Use this file; it must exist
    Explicit(PathBuf),
    /// Do not read a manifest; the SBOM has no root component
    Skip,
}

/// SbomRequest - input of the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Project directory containing poetry.lock
    pub project_path: PathBuf,
    /// Lock file to read instead of `<project_path>/poetry.lock`
    pub lockfile_path: Option<PathBuf>,
    /// Manifest lookup policy
    pub manifest: ManifestSource,
    /// How component `bom-ref`s are assigned
    pub bom_ref_strategy: BomRefStrategy,
}

impl SbomRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            lockfile_path: None,
            manifest: ManifestSource::default(),
            bom_ref_strategy: BomRefStrategy::default(),
        }
    }

    pub fn with_lockfile(mut self, lockfile_path: PathBuf) -> Self {
        self.lockfile_path = Some(lockfile_path);
        self
    }

    pub fn with_manifest(mut self, manifest: ManifestSource) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_bom_ref_strategy(mut self, strategy: BomRefStrategy) -> Self {
        self.bom_ref_strategy = strategy;
        self
    }

    /// The lock file this request reads
    pub fn resolved_lockfile_path(&self) -> PathBuf {
        self.lockfile_path
            .clone()
            .unwrap_or_else(|| self.project_path.join(LOCKFILE_NAME))
    }

    /// The manifest this request reads, if any.
    ///
    /// Discovery looks next to the lock file, so `--lock other/poetry.lock`
    /// picks up `other/pyproject.toml`.
    pub fn resolved_manifest_path(&self) -> Option<PathBuf> {
        match &self.manifest {
            ManifestSource::Skip => None,
            ManifestSource::Explicit(path) => Some(path.clone()),
            ManifestSource::Discover => {
                let lockfile = self.resolved_lockfile_path();
                let dir = lockfile.parent().unwrap_or_else(|| Path::new(""));
                Some(dir.join(MANIFEST_NAME))
            }
        }
    }
}
