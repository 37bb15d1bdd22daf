use std::fmt;

/// Where a lock file keeps the per-package distribution file list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMetadataLocation {
    /// `files = [...]` inline on every `[[package]]` entry (lock-version 2.x)
    Inline,
    /// `[metadata.files]` table keyed by package name (lock-version 1.x and older)
    MetadataTable,
}

/// Schema generation of a poetry.lock file, e.g. `"1.1"` → `[1, 1]`.
///
/// Ordering is lexicographic over the numeric parts, so `[2]` < `[2, 0]` <
/// `[2, 1]`. Anything that cannot be parsed is treated as the oldest
/// generation `[0]` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LockVersion(Vec<u32>);

impl LockVersion {
    /// First generation that stores file hashes inline on each package
    const INLINE_FILES_SINCE: &'static [u32] = &[2];

    pub fn oldest() -> Self {
        Self(vec![0])
    }

    /// Strict parse of a dotted version string; `None` on any bad part.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.split('.')
            .map(|part| part.trim().parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Reads `metadata.lock-version`, falling back to [`LockVersion::oldest`].
    ///
    /// Poetry writes a string, but hand-edited files sometimes carry a bare
    /// integer or float; both are accepted.
    pub fn from_value(value: Option<&toml::Value>) -> Self {
        let parsed = match value {
            Some(toml::Value::String(s)) => Self::parse(s),
            Some(toml::Value::Integer(i)) => u32::try_from(*i).ok().map(|n| Self(vec![n])),
            Some(toml::Value::Float(f)) => Self::parse(&f.to_string()),
            _ => None,
        };
        parsed.unwrap_or_else(Self::oldest)
    }

    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// The single decision point for where file descriptors live.
    pub fn file_metadata_location(&self) -> FileMetadataLocation {
        if self.0.as_slice() >= Self::INLINE_FILES_SINCE {
            FileMetadataLocation::Inline
        } else {
            FileMetadataLocation::MetadataTable
        }
    }
}

impl fmt::Display for LockVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(u32::to_string).collect();
        f.write_str(&joined.join("."))
    }
}
