use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading the raw poetry.lock text
pub trait LockfileReader {
    /// Reads the lock file at `lockfile_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
