use lock_transitive::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LockfileReader serving lock files from memory
#[derive(Default)]
pub struct MockLockfileReader {
    pub files: HashMap<PathBuf, Lockfile>,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lockfile(mut self, path: impl Into<PathBuf>, lockfile: Lockfile) -> Self {
        self.files.insert(path.into(), lockfile);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        self.files.get(path).cloned().ok_or_else(|| {
            LockError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: "mock has no such file".to_string(),
            }
            .into()
        })
    }

    fn lockfile_exists(&self, path: &Path) -> bool {
        !self.should_fail && self.files.contains_key(path)
    }
}
