use super::Component;

/// BOM-level metadata: generation time, producing tool, serial number and,
/// when a pyproject.toml was read, the project the inventory describes.
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
    component: Option<Component>,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
            component: None,
        }
    }

    /// Attaches (or clears) the root component describing the project itself
    pub fn with_component(mut self, component: Option<Component>) -> Self {
        self.component = component;
        self
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }
}
