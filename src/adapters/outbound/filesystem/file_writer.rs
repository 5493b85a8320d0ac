use crate::adapters::outbound::formatters::YamlFormatter;
use crate::lock_merge::domain::Lockfile;
use crate::ports::outbound::{LockfileFormatter, LockfileWriter, OutputPresenter};
use crate::shared::error::LockError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `content` to `path` through a temporary file in the same directory,
/// so readers see either the old or the new file and never a partial one
pub(crate) fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(LockError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Parent directory does not exist: {}", parent.display()),
        }
        .into());
    }

    reject_symlink(path, "write")?;

    let to_write_error = |details: String| LockError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    let mut file = NamedTempFile::new_in(parent).map_err(|e| to_write_error(e.to_string()))?;
    file.write_all(content.as_bytes())
        .map_err(|e| to_write_error(e.to_string()))?;
    file.as_file()
        .sync_all()
        .map_err(|e| to_write_error(e.to_string()))?;
    file.persist(path)
        .map_err(|e| to_write_error(e.error.to_string()))?;

    Ok(())
}

/// FileSystemWriter adapter persisting lock files as glide.lock YAML
pub struct FileSystemWriter {
    formatter: YamlFormatter,
}

impl FileSystemWriter {
    pub fn new() -> Self {
        Self {
            formatter: YamlFormatter::new(),
        }
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileWriter for FileSystemWriter {
    fn write_lockfile(&self, path: &Path, lockfile: &Lockfile) -> Result<()> {
        let content = self.formatter.format(lockfile)?;
        write_atomically(path, &content)
    }
}

/// FilePresenter adapter for writing rendered output to a file
pub struct FilePresenter {
    output_path: PathBuf,
}

impl FilePresenter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FilePresenter {
    fn present(&self, content: &str) -> Result<()> {
        write_atomically(&self.output_path, content)?;
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing rendered output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
