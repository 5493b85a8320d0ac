use crate::shared::error::LockError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum lock file size accepted by the readers (16 MB)
pub const MAX_LOCKFILE_SIZE: u64 = 16 * 1024 * 1024;

/// Rejects symbolic links at `path` for the given operation.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A missing path is accepted; callers that need the file to exist check that
/// separately.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(LockError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the command at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that `path` is an existing regular file no larger than `max_size`
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size` bytes
pub fn validate_lockfile_path(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        return Err(LockError::SecurityError {
            path: path.to_path_buf(),
            reason: "lock file is a symbolic link".to_string(),
            hint: "Point the command at the real lock file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}
