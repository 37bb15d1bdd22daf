use poetry_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LockfileReader that serves fixed poetry.lock text
#[derive(Clone)]
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
    /// Every path the use case asked for, shared between clones
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn get_requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        self.requested_paths
            .lock()
            .unwrap()
            .push(lockfile_path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(self.content.clone())
    }
}
