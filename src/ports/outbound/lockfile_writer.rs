use crate::lock_merge::domain::Lockfile;
use crate::shared::Result;
use std::path::Path;

/// LockfileWriter port for persisting lock files
pub trait LockfileWriter {
    /// Serializes `lockfile` and replaces the file at `path` with it
    ///
    /// # Errors
    /// Returns an error if serialization fails or the file cannot be written
    fn write_lockfile(&self, path: &Path, lockfile: &Lockfile) -> Result<()>;
}
