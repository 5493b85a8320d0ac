use lock_transitive::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mock ProjectLock tracking whether the lock is held
#[derive(Default, Clone)]
pub struct MockProjectLock {
    pub held: Arc<AtomicBool>,
}

impl MockProjectLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lock that some other invocation already holds
    pub fn already_held() -> Self {
        Self {
            held: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }
}

impl ProjectLock for MockProjectLock {
    fn acquire(&self, project_path: &Path) -> Result<LockGuard> {
        if self.held.swap(true, Ordering::SeqCst) {
            return Err(LockError::ProjectLocked {
                path: project_path.join(".lock-transitive.lock"),
            }
            .into());
        }
        let held = Arc::clone(&self.held);
        Ok(LockGuard::new(move || held.store(false, Ordering::SeqCst)))
    }
}
