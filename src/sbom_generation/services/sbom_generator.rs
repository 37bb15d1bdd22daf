use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded in `metadata.tools`
pub const TOOL_NAME: &str = "poetry-sbom";

/// SbomGenerator creates BOM metadata: an RFC 3339 timestamp and a fresh
/// `urn:uuid:` serial number per run.
pub struct SbomGenerator;

impl SbomGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Metadata naming this tool at its compile-time version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
