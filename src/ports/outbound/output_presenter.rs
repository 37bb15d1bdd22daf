use crate::shared::Result;

/// OutputPresenter port for delivering the formatted SBOM (stdout, file, ...)
pub trait OutputPresenter {
    /// Presents the formatted SBOM content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
