use crate::application::dto::SbomResponse;
use crate::shared::Result;

/// SbomFormatter port for rendering a generated SBOM
///
/// Implementations exist for CycloneDX JSON and Markdown.
pub trait SbomFormatter {
    /// Renders the components and metadata of `response`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &SbomResponse) -> Result<String>;
}
