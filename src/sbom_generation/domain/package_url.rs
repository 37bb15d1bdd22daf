use super::Package;
use std::fmt;

/// Package URL (purl) for a PyPI package, e.g. `pkg:pypi/requests@2.31.0`.
///
/// The name is normalized the way the purl `pypi` type requires (lowercase,
/// `_` replaced by `-`); name and version are percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageUrl {
    name: String,
    version: String,
}

impl PackageUrl {
    pub const PURL_TYPE: &'static str = "pypi";

    pub fn for_package(package: &Package) -> Self {
        Self {
            name: package.name().to_lowercase().replace('_', "-"),
            version: package.version().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pkg:{}/{}@{}",
            Self::PURL_TYPE,
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.version)
        )
    }
}
