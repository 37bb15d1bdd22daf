use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Property name used to record a package's Poetry dependency group
pub const PACKAGE_GROUP_PROPERTY: &str = "cdx:poetry:package:group";

/// Dependency group a locked package belongs to.
///
/// Poetry defines `main` and `dev` itself; anything else is a user-defined
/// group (`[tool.poetry.group.<name>]`) kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageGroup {
    Main,
    Dev,
    Other(String),
}

impl PackageGroup {
    pub fn as_str(&self) -> &str {
        match self {
            PackageGroup::Main => "main",
            PackageGroup::Dev => "dev",
            PackageGroup::Other(name) => name,
        }
    }

    pub fn is_well_known(&self) -> bool {
        !matches!(self, PackageGroup::Other(_))
    }
}

impl From<&str> for PackageGroup {
    fn from(s: &str) -> Self {
        match s {
            "main" => PackageGroup::Main,
            "dev" => PackageGroup::Dev,
            other => PackageGroup::Other(other.to_string()),
        }
    }
}

impl FromStr for PackageGroup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for PackageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
