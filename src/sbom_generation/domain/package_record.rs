use super::{FileDescriptor, Package, PackageGroup};

/// Normalized view of one lock file entry.
///
/// File descriptors are borrowed from the decoded document; the record lives
/// only between reading and component building.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord<'doc> {
    package: Package,
    groups: Vec<PackageGroup>,
    files: &'doc [FileDescriptor],
}

impl<'doc> PackageRecord<'doc> {
    pub fn new(package: Package, groups: Vec<PackageGroup>, files: &'doc [FileDescriptor]) -> Self {
        Self {
            package,
            groups,
            files,
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn groups(&self) -> &[PackageGroup] {
        &self.groups
    }

    pub fn files(&self) -> &'doc [FileDescriptor] {
        self.files
    }
}
