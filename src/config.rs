//! Configuration file support for poetry-sbom.
//!
//! Reads `poetry-sbom.config.yml` from the project directory (or the path
//! given with `--config`). Every key is optional; CLI flags win.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use poetry_sbom::application::dto::OutputFormat;
use poetry_sbom::shared::error::SbomError;
use poetry_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "poetry-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub purl_bom_ref: Option<bool>,
    pub include_pyproject: Option<bool>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| {
                value.parse::<OutputFormat>().map_err(|message| {
                    SbomError::Validation {
                        message: format!("config key 'format': {}", message),
                    }
                    .into()
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    // An empty file deserializes to null, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    config.output_format()?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Keys in the file that this version does not understand
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
        .collect()
}
