use poetry_sbom::prelude::*;
use std::path::Path;

/// Mock ProjectConfigReader serving an optional pyproject.toml text
pub struct MockProjectConfigReader {
    pub content: Option<String>,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            should_fail: false,
        }
    }

    /// No pyproject.toml at the requested path
    pub fn absent() -> Self {
        Self {
            content: None,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: None,
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn find_project_config(&self, _manifest_path: &Path) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Mock project config read failure");
        }
        Ok(self.content.clone())
    }
}
