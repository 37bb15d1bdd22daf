use crate::sbom_generation::domain::{Component, SbomMetadata};
use crate::sbom_generation::services::SkippedDescriptor;

/// SbomResponse - output of the SBOM generation use case
///
/// Components are in lock file order. The root component, when a manifest
/// was read, lives in `metadata.component()`.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// One component per `[[package]]` entry
    pub components: Vec<Component>,
    /// Timestamp, tool, serial number and optional root component
    pub metadata: SbomMetadata,
    /// Distribution files left out because their hash could not be used
    pub skipped_descriptors: Vec<SkippedDescriptor>,
}

impl SbomResponse {
    pub fn new(
        components: Vec<Component>,
        metadata: SbomMetadata,
        skipped_descriptors: Vec<SkippedDescriptor>,
    ) -> Self {
        Self {
            components,
            metadata,
            skipped_descriptors,
        }
    }

    pub fn root_component(&self) -> Option<&Component> {
        self.metadata.component()
    }
}
