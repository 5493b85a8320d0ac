use super::PackageName;
use crate::shared::error::LockError;
use serde::{Deserialize, Serialize};

/// One pinned dependency in a lock file
///
/// `repository`, `vcs`, `arch` and `os` are carried through merges without
/// being interpreted. `pin` is the stricter resolved reference; it lives in
/// memory only and, when set, is what gets persisted as `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    name: PackageName,
    version: String,
    #[serde(skip)]
    pin: Option<String>,
    #[serde(rename = "repo", default, skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vcs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subpackages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    arch: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    os: Vec<String>,
}

impl Lock {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, LockError> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: version.into(),
            pin: None,
            repository: None,
            vcs: None,
            subpackages: Vec::new(),
            arch: Vec::new(),
            os: Vec::new(),
        })
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_vcs(mut self, vcs: impl Into<String>) -> Self {
        self.vcs = Some(vcs.into());
        self
    }

    pub fn with_subpackages<I, S>(mut self, subpackages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subpackages = subpackages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms(mut self, arch: Vec<String>, os: Vec<String>) -> Self {
        self.arch = arch;
        self.os = os;
        self
    }

    /// Pins the entry to `pin`; the pin replaces `version` when persisted
    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Pins the entry to its own version
    pub fn pinned(mut self) -> Self {
        self.pin = Some(self.version.clone());
        self
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The pin if one is set and non-empty, otherwise the version
    pub fn pin(&self) -> &str {
        match self.pin.as_deref() {
            Some(pin) if !pin.is_empty() => pin,
            _ => &self.version,
        }
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn vcs(&self) -> Option<&str> {
        self.vcs.as_deref()
    }

    pub fn subpackages(&self) -> &[String] {
        &self.subpackages
    }

    pub fn arch(&self) -> &[String] {
        &self.arch
    }

    pub fn os(&self) -> &[String] {
        &self.os
    }

    pub fn has_subpackage(&self, subpackage: &str) -> bool {
        self.subpackages.iter().any(|sp| sp == subpackage)
    }

    pub(crate) fn set_subpackages(&mut self, subpackages: Vec<String>) {
        self.subpackages = subpackages;
    }

    /// Folds the pin into `version`, the shape written to disk
    pub(crate) fn into_persisted(mut self) -> Self {
        if let Some(pin) = self.pin.take() {
            if !pin.is_empty() {
                self.version = pin;
            }
        }
        self
    }
}
