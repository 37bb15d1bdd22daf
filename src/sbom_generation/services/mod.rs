pub mod component_builder;
pub mod lock_document_reader;
pub mod root_metadata_builder;
pub mod sbom_generator;

pub use component_builder::{
    BomRefStrategy, BuiltComponent, ComponentBuilder, DescriptorOutcome, SkippedDescriptor,
};
pub use lock_document_reader::LockDocumentReader;
pub use root_metadata_builder::RootMetadataBuilder;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
