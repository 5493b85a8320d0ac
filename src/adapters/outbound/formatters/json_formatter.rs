use crate::lock_merge::domain::Lockfile;
use crate::ports::outbound::LockfileFormatter;
use crate::shared::error::LockError;
use crate::shared::Result;

/// JsonFormatter adapter rendering the lock file document as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileFormatter for JsonFormatter {
    fn format(&self, lockfile: &Lockfile) -> Result<String> {
        let mut json = serde_json::to_string_pretty(lockfile).map_err(|e| LockError::Construction {
            reason: format!("Failed to serialize lock file as JSON: {}", e),
        })?;
        json.push('\n');
        Ok(json)
    }
}
