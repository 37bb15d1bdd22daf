use crate::sbom_generation::domain::{
    FileDescriptor, FileMetadataLocation, LockDocument, Package, PackageEntry, PackageGroup,
    PackageRecord,
};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// LockDocumentReader turns a decoded poetry.lock into package records.
///
/// Pure: no I/O, no mutation of the document. Records come out in entry
/// order, one per `[[package]]`, without deduplication.
pub struct LockDocumentReader;

impl LockDocumentReader {
    /// Reads every package entry of `document`.
    ///
    /// # Errors
    /// Fails on the first entry with a missing or empty `name`/`version`;
    /// nothing is returned in that case.
    pub fn read(document: &LockDocument) -> Result<Vec<PackageRecord<'_>>> {
        let location = document.lock_version().file_metadata_location();

        document
            .packages
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::read_entry(document, location, index, entry))
            .collect()
    }

    fn read_entry<'doc>(
        document: &'doc LockDocument,
        location: FileMetadataLocation,
        index: usize,
        entry: &'doc PackageEntry,
    ) -> Result<PackageRecord<'doc>> {
        let name = Self::required_field(index, "name", entry.name.as_deref())?;
        let version = Self::required_field(index, "version", entry.version.as_deref())?;

        let package = Package::new(name.to_string(), version.to_string()).map_err(|e| {
            SbomError::LockfileInvalidPackage {
                index,
                reason: e.to_string(),
            }
        })?;

        let files = Self::resolve_files(document, location, entry, package.name());

        Ok(PackageRecord::new(package, Self::groups(entry), files))
    }

    fn required_field<'a>(index: usize, field: &str, value: Option<&'a str>) -> Result<&'a str> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(SbomError::LockfileInvalidPackage {
                index,
                reason: format!("missing required field `{}`", field),
            }
            .into()),
        }
    }

    /// Looks up the file descriptors of one package according to the
    /// document's schema generation. Missing lists are empty, not errors.
    fn resolve_files<'doc>(
        document: &'doc LockDocument,
        location: FileMetadataLocation,
        entry: &'doc PackageEntry,
        name: &str,
    ) -> &'doc [FileDescriptor] {
        match location {
            FileMetadataLocation::Inline => &entry.files,
            FileMetadataLocation::MetadataTable => document
                .metadata
                .files
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// `category` (single group) wins over `groups`; empty strings are ignored.
    fn groups(entry: &PackageEntry) -> Vec<PackageGroup> {
        match entry.category.as_deref() {
            Some(category) if !category.is_empty() => vec![PackageGroup::from(category)],
            _ => entry
                .groups
                .iter()
                .filter(|g| !g.is_empty())
                .map(|g| PackageGroup::from(g.as_str()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "sha256:ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb";
    const HASH_B: &str = "sha256:3e23e8160039594a33894f6564e1b1348bbd7a0088d42c4acb73eeaed59c009d";

    fn decode(content: &str) -> LockDocument {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_read_inline_files_generation_two() {
        let document = decode(&format!(
            r#"
[[package]]
name = "requests"
version = "2.31.0"
category = "main"
files = [
    {{file = "requests-2.31.0-py3-none-any.whl", hash = "{HASH_A}"}},
    {{file = "requests-2.31.0.tar.gz", hash = "{HASH_B}"}},
]

[metadata]
lock-version = "2.0"
"#
        ));

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].package().name(), "requests");
        assert_eq!(records[0].package().version(), "2.31.0");
        assert_eq!(records[0].groups(), &[PackageGroup::Main]);
        assert_eq!(records[0].files().len(), 2);
        assert_eq!(records[0].files()[1].file, "requests-2.31.0.tar.gz");
    }

    #[test]
    fn test_read_metadata_files_generation_one() {
        let document = decode(&format!(
            r#"
[[package]]
name = "six"
version = "1.16.0"
category = "dev"

[metadata]
lock-version = "1.1"

[metadata.files]
six = [
    {{file = "six-1.16.0.tar.gz", hash = "{HASH_A}"}},
]
"#
        ));

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(records[0].groups(), &[PackageGroup::Dev]);
        assert_eq!(records[0].files().len(), 1);
        assert_eq!(records[0].files()[0].file, "six-1.16.0.tar.gz");
    }

    #[test]
    fn test_old_generation_ignores_inline_files() {
        let document = decode(&format!(
            r#"
[[package]]
name = "six"
version = "1.16.0"
files = [{{file = "six-1.16.0.tar.gz", hash = "{HASH_A}"}}]

[metadata]
lock-version = "1.1"
"#
        ));

        let records = LockDocumentReader::read(&document).unwrap();
        assert!(records[0].files().is_empty());
    }

    #[test]
    fn test_unparsable_lock_version_uses_metadata_table() {
        let document = decode(&format!(
            r#"
[[package]]
name = "six"
version = "1.16.0"
files = [{{file = "inline.whl", hash = "{HASH_A}"}}]

[metadata]
lock-version = "garbage"

[metadata.files]
six = [{{file = "table.whl", hash = "{HASH_B}"}}]
"#
        ));

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(records[0].files()[0].file, "table.whl");
    }

    #[test]
    fn test_package_absent_from_metadata_table_has_no_files() {
        let document = decode(
            r#"
[[package]]
name = "orphan"
version = "0.1.0"

[metadata]
lock-version = "1.1"

[metadata.files]
"#,
        );

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].files().is_empty());
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let document = decode(
            r#"
[[package]]
name = "zeta"
version = "1.0"

[[package]]
name = "alpha"
version = "2.0"

[[package]]
name = "zeta"
version = "1.0"
"#,
        );

        let records = LockDocumentReader::read(&document).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.package().name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn test_groups_list_and_missing_category() {
        let document = decode(
            r#"
[[package]]
name = "pytest"
version = "8.0.0"
groups = ["dev", "test"]

[[package]]
name = "plain"
version = "1.0"
category = ""

[metadata]
lock-version = "2.1"
"#,
        );

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(
            records[0].groups(),
            &[PackageGroup::Dev, PackageGroup::Other("test".to_string())]
        );
        assert!(records[1].groups().is_empty());
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let document = decode(
            r#"
[[package]]
name = "ok"
version = "1.0"

[[package]]
version = "1.0"
"#,
        );

        let err = LockDocumentReader::read(&document).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("#1"));
        assert!(message.contains("`name`"));
    }

    #[test]
    fn test_empty_version_is_fatal() {
        let document = decode(
            r#"
[[package]]
name = "pkg"
version = ""
"#,
        );

        let err = LockDocumentReader::read(&document).unwrap_err();
        assert!(err.to_string().contains("`version`"));
    }

    #[test]
    fn test_unusual_names_and_versions_are_kept() {
        let long_local = format!("1.0.0+{}", "a".repeat(120));
        let document = decode(&format!(
            r#"
[[package]]
name = "ok"
version = "1.0"

[[package]]
name = "local-build"
version = "{}"

[[package]]
name = "beta"
version = "1.0 beta"

[[package]]
name = "pkgé"
version = "2.0"
"#,
            long_local
        ));

        let records = LockDocumentReader::read(&document).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].package().version(), long_local);
        assert_eq!(records[2].package().version(), "1.0 beta");
        assert_eq!(records[3].package().name(), "pkgé");
    }

    #[test]
    fn test_empty_document() {
        let document = LockDocument::default();
        assert!(LockDocumentReader::read(&document).unwrap().is_empty());
    }
}
