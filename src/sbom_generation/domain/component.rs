use super::{HashParseError, HashValue, PackageUrl};

/// CycloneDX component type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// A locked dependency
    Library,
    /// The project that owns the lock file
    Application,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Library => "library",
            ComponentType::Application => "application",
        }
    }
}

/// Name/value annotation attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Kind of an external reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalReferenceType {
    Distribution,
}

impl ExternalReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalReferenceType::Distribution => "distribution",
        }
    }
}

/// Link from a component to a verifiable artifact.
///
/// Always carries at least one parsed hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    reference_type: ExternalReferenceType,
    url: String,
    comment: String,
    hashes: Vec<HashValue>,
}

impl ExternalReference {
    /// Builds a distribution reference for `file_name`, failing if
    /// `composite_hash` cannot be parsed.
    pub fn distribution(
        url: impl Into<String>,
        file_name: &str,
        composite_hash: &str,
    ) -> Result<Self, HashParseError> {
        let hash = HashValue::from_composite_str(composite_hash)?;
        Ok(Self {
            reference_type: ExternalReferenceType::Distribution,
            url: url.into(),
            comment: format!("Distribution file: {}", file_name),
            hashes: vec![hash],
        })
    }

    pub fn reference_type(&self) -> ExternalReferenceType {
        self.reference_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn hashes(&self) -> &[HashValue] {
        &self.hashes
    }
}

/// One inventoried software unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    component_type: ComponentType,
    name: String,
    version: String,
    purl: Option<PackageUrl>,
    bom_ref: Option<String>,
    properties: Vec<Property>,
    external_references: Vec<ExternalReference>,
}

impl Component {
    /// A locked dependency identified by its package URL
    pub fn library(name: &str, version: &str, purl: PackageUrl) -> Self {
        Self {
            component_type: ComponentType::Library,
            name: name.to_string(),
            version: version.to_string(),
            purl: Some(purl),
            bom_ref: None,
            properties: Vec::new(),
            external_references: Vec::new(),
        }
    }

    /// The project itself: name and version only
    pub fn application(name: &str, version: &str) -> Self {
        Self {
            component_type: ComponentType::Application,
            name: name.to_string(),
            version: version.to_string(),
            purl: None,
            bom_ref: None,
            properties: Vec::new(),
            external_references: Vec::new(),
        }
    }

    pub fn with_bom_ref(mut self, bom_ref: String) -> Self {
        self.bom_ref = Some(bom_ref);
        self
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn add_external_reference(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> Option<&PackageUrl> {
        self.purl.as_ref()
    }

    pub fn bom_ref(&self) -> Option<&str> {
        self.bom_ref.as_deref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn external_references(&self) -> &[ExternalReference] {
        &self.external_references
    }
}
