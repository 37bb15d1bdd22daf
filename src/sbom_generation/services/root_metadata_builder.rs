use crate::sbom_generation::domain::Component;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Builds the root component from a decoded pyproject.toml.
pub struct RootMetadataBuilder;

impl RootMetadataBuilder {
    /// `None` in, `None` out. A manifest without `tool.poetry.name` or
    /// `tool.poetry.version` is an error, not an absent root.
    pub fn build(manifest: Option<&toml::Table>) -> Result<Option<Component>> {
        let Some(manifest) = manifest else {
            return Ok(None);
        };

        let poetry = manifest
            .get("tool")
            .and_then(|tool| tool.get("poetry"))
            .and_then(toml::Value::as_table);

        let name = Self::required_string(poetry, "name")?;
        let version = Self::required_string(poetry, "version")?;

        Ok(Some(Component::application(name, version)))
    }

    fn required_string<'a>(poetry: Option<&'a toml::Table>, key: &str) -> Result<&'a str> {
        poetry
            .and_then(|table| table.get(key))
            .and_then(toml::Value::as_str)
            .ok_or_else(|| {
                SbomError::ManifestMissingField {
                    field: format!("tool.poetry.{}", key),
                }
                .into()
            })
    }
}
