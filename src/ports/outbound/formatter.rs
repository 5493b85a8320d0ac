use crate::lock_merge::domain::Lockfile;
use crate::shared::Result;

/// LockfileFormatter port for rendering a lock file as text
pub trait LockfileFormatter {
    /// Renders `lockfile`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, lockfile: &Lockfile) -> Result<String>;
}
