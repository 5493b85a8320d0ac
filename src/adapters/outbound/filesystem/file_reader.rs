use crate::lock_merge::domain::Lockfile;
use crate::ports::outbound::LockfileReader;
use crate::shared::error::LockError;
use crate::shared::security::{validate_lockfile_path, MAX_LOCKFILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading glide.lock YAML files
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile> {
        if !path.exists() {
            return Err(LockError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Run the dependency manager to create it, or pass the correct path.",
                    path.display()
                ),
            }
            .into());
        }

        validate_lockfile_path(path, MAX_LOCKFILE_SIZE).map_err(|e| LockError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| LockError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_yaml_ng::from_str(&content).map_err(|e| {
            LockError::LockfileParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn lockfile_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
