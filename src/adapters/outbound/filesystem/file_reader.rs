use crate::ports::outbound::{LockfileReader, ProjectConfigReader};
use crate::shared::error::SbomError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading poetry.lock and pyproject.toml
///
/// Implements both the LockfileReader and ProjectConfigReader ports.
/// Symbolic links and oversized files are refused before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if !lockfile_path.exists() {
            let directory = lockfile_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            return Err(SbomError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: format!(
                    "poetry.lock file does not exist in directory \"{}\".\n   \
                     Run `poetry lock` first, or specify the correct path with the --path or --lock option.",
                    directory.display()
                ),
            }
            .into());
        }

        self.safe_read_file(lockfile_path, "poetry.lock")
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn find_project_config(&self, manifest_path: &Path) -> Result<Option<String>> {
        // symlink_metadata so a dangling link is still reported as a link
        if fs::symlink_metadata(manifest_path).is_err() {
            return Ok(None);
        }

        self.safe_read_file(manifest_path, "pyproject.toml")
            .map(Some)
    }
}
