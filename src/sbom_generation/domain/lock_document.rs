//! Decoded shape of a `poetry.lock` file.
//!
//! Only the fields needed for inventory are modelled. Identity fields are
//! optional at this level so that a missing `name`/`version` can be reported
//! with the entry index instead of a generic decode error.

use serde::Deserialize;
use std::collections::HashMap;

use super::LockVersion;

/// The whole lock file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockDocument {
    #[serde(default)]
    pub metadata: LockMetadata,
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageEntry>,
}

impl LockDocument {
    pub fn lock_version(&self) -> LockVersion {
        LockVersion::from_value(self.metadata.lock_version.as_ref())
    }
}

/// `[metadata]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockMetadata {
    /// Kept undecoded; see [`LockVersion::from_value`]
    #[serde(default, rename = "lock-version")]
    pub lock_version: Option<toml::Value>,
    /// `[metadata.files]`, only written by lock-version 1.x and older
    #[serde(default)]
    pub files: HashMap<String, Vec<FileDescriptor>>,
}

/// One `[[package]]` entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Single group, written by lock-version 1.x and 2.0
    #[serde(default)]
    pub category: Option<String>,
    /// Group list, written by lock-version 2.1 and newer
    #[serde(default)]
    pub groups: Vec<String>,
    /// Inline file list, written by lock-version 2.x
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// One distribution artifact (`{file = "...", hash = "sha256:..."}`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    #[serde(default)]
    pub file: String,
    /// Composite `algorithm:digest`; missing hashes are skipped downstream
    #[serde(default)]
    pub hash: Option<String>,
}

impl FileDescriptor {
    pub fn new(file: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            hash: Some(hash.into()),
        }
    }
}
