use crate::adapters::outbound::filesystem::write_atomically;
use crate::lock_merge::domain::DependencySpec;
use crate::shared::error::LockError;
use crate::shared::security::{validate_lockfile_path, MAX_LOCKFILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use std::fs;
use std::path::Path;

/// File name of glide's project manifest
pub const MANIFEST_FILE: &str = "glide.yaml";

/// One `import:` entry of glide.yaml
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestDependency {
    pub package: String,
    pub version: Option<String>,
    pub repo: Option<String>,
    pub vcs: Option<String>,
    pub subpackages: Vec<String>,
    pub os: Vec<String>,
    pub arch: Vec<String>,
}

impl ManifestDependency {
    /// Where glide clones the dependency from
    pub fn remote(&self) -> String {
        match self.repo.as_deref().filter(|r| !r.is_empty()) {
            Some(repo) => repo.to_string(),
            None => format!("https://{}", self.package),
        }
    }
}

/// The subset of glide.yaml needed to locate a fetched dependency
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlideManifest {
    pub package: Option<String>,
    pub import: Vec<ManifestDependency>,
    #[serde(rename = "testImport")]
    pub test_import: Vec<ManifestDependency>,
}

impl GlideManifest {
    pub fn read(project_path: &Path) -> Result<Self> {
        let path = project_path.join(MANIFEST_FILE);
        let content = read_manifest(&path)?;

        serde_yaml_ng::from_str(&content).map_err(|e| {
            LockError::LockfileParseError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn find_import(&self, package: &str) -> Option<&ManifestDependency> {
        self.import.iter().find(|dep| dep.package == package)
    }
}

/// What [`ensure_import`] did to glide.yaml
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The root package is not an import yet; `glide get` adds it
    NotDeclared,
    /// The import already has the requested version and subpackage
    Unchanged,
    /// The import was rewritten with the requested version or subpackage
    Updated,
}

/// Brings an existing `import:` entry in line with `spec`
///
/// A requested subpackage is appended if missing and a requested version
/// replaces the declared one. The document is edited as a YAML value so
/// that keys this crate does not model survive the rewrite.
pub fn ensure_import(project_path: &Path, spec: &DependencySpec) -> Result<EnsureOutcome> {
    let path = project_path.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(EnsureOutcome::NotDeclared);
    }

    let content = read_manifest(&path)?;
    let mut document: Value =
        serde_yaml_ng::from_str(&content).map_err(|e| LockError::LockfileParseError {
            path: path.clone(),
            details: e.to_string(),
        })?;

    let Some(entry) = find_import_entry(&mut document, spec.root().as_str()) else {
        return Ok(EnsureOutcome::NotDeclared);
    };

    let mut changed = false;
    if let Some(subpackage) = spec.subpackage() {
        changed |= add_subpackage(entry, subpackage);
    }
    if let Some(version) = spec.version() {
        changed |= set_version(entry, version);
    }
    if !changed {
        return Ok(EnsureOutcome::Unchanged);
    }

    let rendered = serde_yaml_ng::to_string(&document).map_err(|e| LockError::FileWriteError {
        path: path.clone(),
        details: e.to_string(),
    })?;
    write_atomically(&path, &rendered)?;
    Ok(EnsureOutcome::Updated)
}

fn read_manifest(path: &Path) -> Result<String> {
    validate_lockfile_path(path, MAX_LOCKFILE_SIZE).map_err(|e| LockError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    fs::read_to_string(path).map_err(|e| {
        LockError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

fn find_import_entry<'a>(document: &'a mut Value, package: &str) -> Option<&'a mut Mapping> {
    document
        .get_mut("import")?
        .as_sequence_mut()?
        .iter_mut()
        .filter_map(Value::as_mapping_mut)
        .find(|entry| entry.get("package").and_then(Value::as_str) == Some(package))
}

fn add_subpackage(entry: &mut Mapping, subpackage: &str) -> bool {
    let key = Value::from("subpackages");
    let mut subpackages = entry
        .get(&key)
        .and_then(Value::as_sequence)
        .cloned()
        .unwrap_or_default();
    if subpackages.iter().any(|s| s.as_str() == Some(subpackage)) {
        return false;
    }

    subpackages.push(Value::from(subpackage));
    entry.insert(key, Value::Sequence(subpackages));
    true
}

fn set_version(entry: &mut Mapping, version: &str) -> bool {
    let key = Value::from("version");
    if entry.get(&key).and_then(Value::as_str) == Some(version) {
        return false;
    }

    entry.insert(key, Value::from(version));
    true
}
