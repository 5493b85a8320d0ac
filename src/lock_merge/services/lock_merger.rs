use crate::lock_merge::domain::{Lock, Lockfile, PackageName};
use crate::lock_merge::policies::DevImportBase;
use crate::shared::error::LockError;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Name-keyed lock entries; iteration order is the published order
type LockTable = BTreeMap<PackageName, Lock>;

/// LockMerger service merging a base lock file with an override lock file
///
/// Override entries win on every scalar field; the base only contributes
/// subpackages of same-named entries. Output lists are sorted by name, so
/// equal inputs always give equal outputs. Inputs are borrowed and never
/// modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockMerger {
    dev_import_base: DevImportBase,
}

impl LockMerger {
    pub fn new(dev_import_base: DevImportBase) -> Self {
        Self { dev_import_base }
    }

    pub fn dev_import_base(&self) -> DevImportBase {
        self.dev_import_base
    }

    /// Merges `overrides` on top of `base`
    ///
    /// The merged hash is `sha256_hex(base.hash ++ overrides.hash)`, a
    /// fingerprint of the pair of source hashes rather than of the result.
    /// The merged `updated` timestamp is the later of the two inputs'.
    ///
    /// # Errors
    /// Returns `LockError::Construction` if the merged lists cannot form a
    /// valid lock file.
    pub fn merge(&self, base: &Lockfile, overrides: &Lockfile) -> Result<Lockfile, LockError> {
        let base_imports = index(base.imports());
        let mut imports = base_imports.clone();
        apply_overrides(&mut imports, overrides.imports(), &base_imports);

        let base_dev_imports = index(base.dev_imports());
        let mut dev_imports = base_dev_imports.clone();
        let dev_lookup = match self.dev_import_base {
            DevImportBase::DevImports => &base_dev_imports,
            DevImportBase::Imports => &imports,
        };
        apply_overrides(&mut dev_imports, overrides.dev_imports(), dev_lookup);

        let lockfile = Lockfile::new(
            flatten(imports),
            flatten(dev_imports),
            combine_hashes(base.hash(), overrides.hash()),
        )?;

        Ok(lockfile.with_updated_opt(base.updated().max(overrides.updated())))
    }

    /// Merges one override entry with the same-named base entry, if any
    ///
    /// The result is a copy of `overrides`. With a base entry present its
    /// subpackages become the sorted, de-duplicated union of both entries'.
    pub fn merge_entry(base: Option<&Lock>, overrides: &Lock) -> Lock {
        let mut merged = overrides.clone();
        let Some(base) = base else {
            return merged;
        };

        let mut subpackages =
            Vec::with_capacity(merged.subpackages().len() + base.subpackages().len());
        subpackages.extend(merged.subpackages().iter().cloned());
        subpackages.extend(base.subpackages().iter().cloned());
        subpackages.sort();
        subpackages.dedup();

        merged.set_subpackages(subpackages);
        merged
    }
}

/// Fingerprint of a merge: hex SHA-256 over `base` followed by `overrides`
pub fn combine_hashes(base: &str, overrides: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(base.as_bytes());
    hasher.update(overrides.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn index(locks: &[Lock]) -> LockTable {
    locks
        .iter()
        .map(|lock| (lock.name().clone(), lock.clone()))
        .collect()
}

/// Writes each override into `table`, merged with its entry in `base_lookup`
fn apply_overrides(table: &mut LockTable, overrides: &[Lock], base_lookup: &LockTable) {
    for lock in overrides {
        let merged = LockMerger::merge_entry(base_lookup.get(lock.name()), lock);
        table.insert(lock.name().clone(), merged);
    }
}

fn flatten(table: LockTable) -> Vec<Lock> {
    table.into_values().map(Lock::pinned).collect()
}
