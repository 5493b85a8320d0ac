use crate::lock_merge::domain::Lockfile;
use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for loading lock files
///
/// This port abstracts the storage and the persisted syntax of lock files;
/// the application layer only ever sees parsed `Lockfile` values.
pub trait LockfileReader {
    /// Reads and parses the lock file at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`LockError::LockfileNotFound`)
    /// - The file cannot be read
    /// - The content is not a valid lock file (`LockError::LockfileParseError`)
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile>;

    /// Whether a lock file exists at `path`
    fn lockfile_exists(&self, path: &Path) -> bool;
}
