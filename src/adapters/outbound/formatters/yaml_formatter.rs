use crate::lock_merge::domain::Lockfile;
use crate::ports::outbound::LockfileFormatter;
use crate::shared::error::LockError;
use crate::shared::Result;

/// YamlFormatter adapter rendering glide.lock YAML
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileFormatter for YamlFormatter {
    fn format(&self, lockfile: &Lockfile) -> Result<String> {
        serde_yaml_ng::to_string(lockfile).map_err(|e| {
            LockError::Construction {
                reason: format!("Failed to serialize lock file as YAML: {}", e),
            }
            .into()
        })
    }
}
