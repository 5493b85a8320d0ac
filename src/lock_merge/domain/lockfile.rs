use super::Lock;
use crate::shared::error::LockError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A lock file: pinned production imports, pinned test imports and the
/// fingerprint of the configuration that produced them
///
/// Names are unique within each list. Every constructor, deserialization
/// included, goes through [`Lockfile::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLockfile")]
pub struct Lockfile {
    hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
    imports: Vec<Lock>,
    #[serde(rename = "testImports")]
    dev_imports: Vec<Lock>,
}

/// Unvalidated on-disk shape
#[derive(Deserialize)]
struct RawLockfile {
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    updated: Option<DateTime<Utc>>,
    #[serde(default)]
    imports: Option<Vec<Lock>>,
    #[serde(default, rename = "testImports")]
    dev_imports: Option<Vec<Lock>>,
}

impl TryFrom<RawLockfile> for Lockfile {
    type Error = LockError;

    fn try_from(raw: RawLockfile) -> Result<Self, Self::Error> {
        let lockfile = Lockfile::new(
            raw.imports.unwrap_or_default(),
            raw.dev_imports.unwrap_or_default(),
            raw.hash.unwrap_or_default(),
        )?;
        Ok(lockfile.with_updated_opt(raw.updated))
    }
}

impl Lockfile {
    /// Builds a lock file, folding each entry's pin into its persisted version
    ///
    /// # Errors
    /// Returns `LockError::Construction` if a name repeats within one list.
    /// The hash is opaque and never inspected.
    pub fn new(imports: Vec<Lock>, dev_imports: Vec<Lock>, hash: String) -> Result<Self, LockError> {
        ensure_unique("imports", &imports)?;
        ensure_unique("testImports", &dev_imports)?;

        Ok(Self {
            hash,
            updated: None,
            imports: imports.into_iter().map(Lock::into_persisted).collect(),
            dev_imports: dev_imports.into_iter().map(Lock::into_persisted).collect(),
        })
    }

    /// A lock file with no entries and an empty hash
    pub fn empty() -> Self {
        Self {
            hash: String::new(),
            updated: None,
            imports: Vec::new(),
            dev_imports: Vec::new(),
        }
    }

    pub fn with_updated(self, updated: DateTime<Utc>) -> Self {
        self.with_updated_opt(Some(updated))
    }

    pub(crate) fn with_updated_opt(mut self, updated: Option<DateTime<Utc>>) -> Self {
        self.updated = updated;
        self
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn imports(&self) -> &[Lock] {
        &self.imports
    }

    pub fn dev_imports(&self) -> &[Lock] {
        &self.dev_imports
    }

    pub fn get_import(&self, name: &str) -> Option<&Lock> {
        self.imports.iter().find(|lock| lock.name().as_str() == name)
    }

    pub fn get_dev_import(&self, name: &str) -> Option<&Lock> {
        self.dev_imports
            .iter()
            .find(|lock| lock.name().as_str() == name)
    }

    /// Adds `lock` to the imports, replacing a same-named entry in place
    pub fn upsert_import(&mut self, lock: Lock) {
        let lock = lock.into_persisted();
        match self
            .imports
            .iter_mut()
            .find(|existing| existing.name() == lock.name())
        {
            Some(existing) => *existing = lock,
            None => self.imports.push(lock),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.dev_imports.is_empty()
    }
}

fn ensure_unique(list: &str, locks: &[Lock]) -> Result<(), LockError> {
    let mut seen = HashSet::with_capacity(locks.len());
    for lock in locks {
        if !seen.insert(lock.name().as_str()) {
            return Err(LockError::Construction {
                reason: format!("{} lists '{}' more than once", list, lock.name()),
            });
        }
    }
    Ok(())
}
