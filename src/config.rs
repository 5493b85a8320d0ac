//! Configuration file support for lock-transitive.
//!
//! Provides YAML-based configuration through `lock-transitive.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::lock_merge::policies::DevImportBase;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "lock-transitive.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Project lock file name, `glide.lock` when unset
    pub lock_file: Option<String>,
    /// Root of glide's repository cache
    pub cache_dir: Option<PathBuf>,
    /// glide executable
    pub glide_command: Option<String>,
    /// `dev_imports` or `imports`
    pub dev_import_base: Option<String>,
    /// `yaml` or `json`, for lock-merge output
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn dev_import_base(&self) -> Result<Option<DevImportBase>> {
        self.dev_import_base
            .as_deref()
            .map(|value| value.parse::<DevImportBase>().map_err(Into::into))
            .transpose()
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| value.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref lock_file) = config.lock_file {
        let name = lock_file.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            bail!(
                "Invalid config: lock_file must be a plain file name, got {:?}.\n\n\
                 💡 Hint: Use a name such as \"glide.lock\"; it is looked up in the project directory.",
                lock_file
            );
        }
    }

    if let Some(ref command) = config.glide_command {
        if command.trim().is_empty() {
            bail!(
                "Invalid config: glide_command must not be empty.\n\n\
                 💡 Hint: Remove the key to use \"glide\" from your PATH."
            );
        }
    }

    config.dev_import_base()?;
    config.format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
