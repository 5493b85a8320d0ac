use crate::ports::outbound::{LockGuard, ProjectLock};
use crate::shared::error::LockError;
use crate::shared::Result;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Name of the marker file created in the project directory while locked
pub const PROJECT_LOCK_FILE: &str = ".lock-transitive.lock";

/// FileProjectLock adapter using an exclusively created marker file
///
/// The marker holds the owning process id. It is removed when the guard is
/// dropped, so a crashed run leaves it behind and the next run reports the
/// project as locked until the file is deleted by hand.
pub struct FileProjectLock;

impl FileProjectLock {
    pub fn new() -> Self {
        Self
    }

    pub fn lock_path(project_path: &Path) -> PathBuf {
        project_path.join(PROJECT_LOCK_FILE)
    }
}

impl Default for FileProjectLock {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLock for FileProjectLock {
    fn acquire(&self, project_path: &Path) -> Result<LockGuard> {
        let lock_path = Self::lock_path(project_path);

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(LockError::ProjectLocked { path: lock_path }.into());
            }
            Err(e) => {
                return Err(LockError::FileWriteError {
                    path: lock_path,
                    details: e.to_string(),
                }
                .into());
            }
        };

        // Best effort; the file's existence is what holds the lock
        let _ = writeln!(file, "{}", std::process::id());

        Ok(LockGuard::new(move || {
            let _ = fs::remove_file(&lock_path);
        }))
    }
}
