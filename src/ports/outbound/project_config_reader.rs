use crate::shared::Result;
use std::path::Path;

/// ProjectConfigReader port for reading the raw pyproject.toml text
pub trait ProjectConfigReader {
    /// Reads the manifest at `manifest_path` if it exists
    ///
    /// # Returns
    /// `Ok(None)` when there is no file at that path
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    fn find_project_config(&self, manifest_path: &Path) -> Result<Option<String>>;
}
