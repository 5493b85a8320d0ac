use crate::lock_merge::domain::Lockfile;

/// MergeResponse - the merged lock file, ready for formatting
#[derive(Debug, Clone)]
pub struct MergeResponse {
    pub lockfile: Lockfile,
}

impl MergeResponse {
    pub fn new(lockfile: Lockfile) -> Self {
        Self { lockfile }
    }
}
