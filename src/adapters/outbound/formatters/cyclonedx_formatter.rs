use crate::application::dto::SbomResponse;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{self as domain, ExternalReference, SbomMetadata};
use crate::shared::Result;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Tools,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<Component>,
}

#[derive(Debug, Serialize)]
struct Tools {
    components: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<Reference>,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Reference {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: String,
    comment: String,
    hashes: Vec<Hash>,
}

#[derive(Debug, Serialize)]
struct Hash {
    alg: &'static str,
    content: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// Components without a `bom-ref` get a random `urn:uuid:` one here, so the
/// document is always internally referencable.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, response: &SbomResponse) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.6",
            version: 1,
            serial_number: response.metadata.serial_number().to_string(),
            metadata: self.build_metadata(&response.metadata),
            components: response
                .components
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &SbomMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: Tools {
                components: vec![Tool {
                    tool_type: "application",
                    name: metadata.tool_name().to_string(),
                    version: metadata.tool_version().to_string(),
                }],
            },
            component: metadata.component().map(|c| self.build_component(c)),
        }
    }

    fn build_component(&self, component: &domain::Component) -> Component {
        let bom_ref = component
            .bom_ref()
            .map(str::to_string)
            .unwrap_or_else(|| format!("urn:uuid:{}", Uuid::new_v4()));

        Component {
            component_type: component.component_type().as_str(),
            bom_ref,
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: component.purl().map(ToString::to_string),
            properties: component
                .properties()
                .iter()
                .map(|p| Property {
                    name: p.name().to_string(),
                    value: p.value().to_string(),
                })
                .collect(),
            external_references: component
                .external_references()
                .iter()
                .map(|r| self.build_reference(r))
                .collect(),
        }
    }

    fn build_reference(&self, reference: &ExternalReference) -> Reference {
        Reference {
            reference_type: reference.reference_type().as_str(),
            url: reference.url().to_string(),
            comment: reference.comment().to_string(),
            hashes: reference
                .hashes()
                .iter()
                .map(|h| Hash {
                    alg: h.algorithm().as_str(),
                    content: h.content().to_string(),
                })
                .collect(),
        }
    }
}
