pub mod component;
pub mod hash;
pub mod lock_document;
pub mod lock_version;
pub mod package;
pub mod package_group;
pub mod package_record;
pub mod package_url;
pub mod sbom_metadata;

pub use component::{
    Component, ComponentType, ExternalReference, ExternalReferenceType, Property,
};
pub use hash::{HashAlgorithm, HashParseError, HashValue};
pub use lock_document::{FileDescriptor, LockDocument, LockMetadata, PackageEntry};
pub use lock_version::{FileMetadataLocation, LockVersion};
pub use package::{Package, PackageName, Version};
pub use package_group::{PackageGroup, PACKAGE_GROUP_PROPERTY};
pub use package_record::PackageRecord;
pub use package_url::PackageUrl;
pub use sbom_metadata::SbomMetadata;
