use crate::sbom_generation::domain::{
    Component, ExternalReference, FileDescriptor, PackageRecord, PackageUrl, Property,
    PACKAGE_GROUP_PROPERTY,
};

/// How a component's `bom-ref` is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BomRefStrategy {
    /// Use the package URL string as the `bom-ref`
    Purl,
    /// Leave it unset; the serializer assigns a random one
    #[default]
    Generated,
}

/// A file descriptor that produced no external reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDescriptor {
    pub package: String,
    pub file: String,
    pub reason: String,
}

/// Result of turning one file descriptor into an external reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorOutcome {
    Attached(ExternalReference),
    Skipped(SkippedDescriptor),
}

/// A component plus every descriptor that had to be dropped while building it
#[derive(Debug, Clone)]
pub struct BuiltComponent {
    pub component: Component,
    pub skipped: Vec<SkippedDescriptor>,
}

/// ComponentBuilder maps package records to CycloneDX components.
///
/// Never fails: a descriptor with a bad or missing hash is reported as
/// [`DescriptorOutcome::Skipped`] and the rest of the component is kept.
pub struct ComponentBuilder {
    bom_ref_strategy: BomRefStrategy,
}

impl ComponentBuilder {
    pub fn new(bom_ref_strategy: BomRefStrategy) -> Self {
        Self { bom_ref_strategy }
    }

    pub fn build(&self, record: &PackageRecord<'_>) -> BuiltComponent {
        let package = record.package();
        let purl = PackageUrl::for_package(package);

        let mut component = match self.bom_ref_strategy {
            BomRefStrategy::Purl => {
                let bom_ref = purl.to_string();
                Component::library(package.name(), package.version(), purl).with_bom_ref(bom_ref)
            }
            BomRefStrategy::Generated => {
                Component::library(package.name(), package.version(), purl)
            }
        };

        for group in record.groups() {
            component.add_property(Property::new(PACKAGE_GROUP_PROPERTY, group.as_str()));
        }

        let mut skipped = Vec::new();
        for outcome in Self::distribution_outcomes(record) {
            match outcome {
                DescriptorOutcome::Attached(reference) => {
                    component.add_external_reference(reference)
                }
                DescriptorOutcome::Skipped(skip) => skipped.push(skip),
            }
        }

        BuiltComponent { component, skipped }
    }

    /// One outcome per file descriptor, in descriptor order.
    pub fn distribution_outcomes(record: &PackageRecord<'_>) -> Vec<DescriptorOutcome> {
        let url = record.package().distribution_url();
        record
            .files()
            .iter()
            .map(|descriptor| Self::distribution_outcome(record, &url, descriptor))
            .collect()
    }

    fn distribution_outcome(
        record: &PackageRecord<'_>,
        url: &str,
        descriptor: &FileDescriptor,
    ) -> DescriptorOutcome {
        let skip = |reason: String| {
            DescriptorOutcome::Skipped(SkippedDescriptor {
                package: record.package().name().to_string(),
                file: descriptor.file.clone(),
                reason,
            })
        };

        let Some(hash) = descriptor.hash.as_deref() else {
            return skip("no hash recorded".to_string());
        };

        match ExternalReference::distribution(url, &descriptor.file, hash) {
            Ok(reference) => DescriptorOutcome::Attached(reference),
            Err(e) => skip(e.to_string()),
        }
    }
}
