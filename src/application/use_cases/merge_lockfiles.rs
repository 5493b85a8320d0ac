use crate::application::dto::{MergeRequest, MergeResponse};
use crate::lock_merge::services::LockMerger;
use crate::ports::outbound::{LockfileReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// MergeLockfilesUseCase - merges an override lock file on top of a base lock file
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeLockfilesUseCase<LR, PR> {
    lockfile_reader: LR,
    progress_reporter: PR,
}

impl<LR, PR> MergeLockfilesUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    pub fn new(lockfile_reader: LR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
        }
    }

    /// Reads both lock files and merges them
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or parsed, or if the
    /// merged lock file cannot be constructed
    pub fn execute(&self, request: MergeRequest) -> Result<MergeResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading base lock file: {}",
            request.base_path.display()
        ));
        let base = self.lockfile_reader.read_lockfile(&request.base_path)?;

        self.progress_reporter.report(&format!(
            "📖 Loading override lock file: {}",
            request.override_path.display()
        ));
        let overrides = self.lockfile_reader.read_lockfile(&request.override_path)?;

        let merged = LockMerger::new(request.dev_import_base)
            .merge(&base, &overrides)
            .context("Could not merge lock files")?;

        self.progress_reporter.report_completion(&format!(
            "✅ Merged {} import(s) and {} test import(s)",
            merged.imports().len(),
            merged.dev_imports().len()
        ));

        Ok(MergeResponse::new(merged))
    }
}
