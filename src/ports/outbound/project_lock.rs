use crate::shared::Result;
use std::path::Path;

/// Held for the lifetime of an exclusive operation on a project; releases on drop
#[must_use = "the project is unlocked as soon as the guard is dropped"]
pub struct LockGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl LockGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockGuard")
            .field("held", &self.release.is_some())
            .finish()
    }
}

/// ProjectLock port serializing fetch, merge, write and install on a project
pub trait ProjectLock {
    /// Acquires the advisory lock for `project_path`
    ///
    /// # Errors
    /// Returns `LockError::ProjectLocked` if another invocation holds it
    fn acquire(&self, project_path: &Path) -> Result<LockGuard>;
}
