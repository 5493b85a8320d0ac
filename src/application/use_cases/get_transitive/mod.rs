use crate::application::dto::{GetRequest, GetResponse};
use crate::lock_merge::domain::{DependencySpec, Lockfile};
use crate::lock_merge::services::LockMerger;
use crate::ports::outbound::{
    DependencyFetcher, DependencyInstaller, FetchedDependency, LockfileReader, LockfileWriter,
    ProgressReporter, ProjectLock,
};
use crate::shared::Result;
use anyhow::Context;
use chrono::Utc;

/// Number of reported steps in `execute`
const TOTAL_STEPS: usize = 5;

/// GetTransitiveUseCase - fetches a dependency and pins its transitive dependencies
///
/// The dependency manager adds and downloads the dependency; its own lock
/// file (if it has one) plus its freshly resolved pin form an override lock
/// file that is merged into the project's lock file. The dependency manager
/// then installs the merged set.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `LW` - LockfileWriter implementation
/// * `DF` - DependencyFetcher implementation
/// * `DI` - DependencyInstaller implementation
/// * `PL` - ProjectLock implementation
/// * `PR` - ProgressReporter implementation
pub struct GetTransitiveUseCase<LR, LW, DF, DI, PL, PR> {
    lockfile_reader: LR,
    lockfile_writer: LW,
    dependency_fetcher: DF,
    dependency_installer: DI,
    project_lock: PL,
    progress_reporter: PR,
}

impl<LR, LW, DF, DI, PL, PR> GetTransitiveUseCase<LR, LW, DF, DI, PL, PR>
where
    LR: LockfileReader,
    LW: LockfileWriter,
    DF: DependencyFetcher,
    DI: DependencyInstaller,
    PL: ProjectLock,
    PR: ProgressReporter,
{
    pub fn new(
        lockfile_reader: LR,
        lockfile_writer: LW,
        dependency_fetcher: DF,
        dependency_installer: DI,
        project_lock: PL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            lockfile_reader,
            lockfile_writer,
            dependency_fetcher,
            dependency_installer,
            project_lock,
            progress_reporter,
        }
    }

    /// Executes fetch, merge, write and install while holding the project lock
    ///
    /// # Errors
    /// Stops at the first failing step and returns its error. The project
    /// lock is released either way.
    pub fn execute(&self, request: GetRequest) -> Result<GetResponse> {
        let spec = DependencySpec::parse(&request.dependency)?;
        let _guard = self.project_lock.acquire(&request.project_path)?;

        // Step 1: Add and download the dependency
        let fetched = self.fetch_dependency(&request, &spec)?;

        // Step 2: Read the project's lock file
        let lockfile_path = request.lockfile_path();
        self.progress_reporter.report_progress(
            2,
            TOTAL_STEPS,
            Some(&format!("Reading {}", lockfile_path.display())),
        );
        let base = self
            .lockfile_reader
            .read_lockfile(&lockfile_path)
            .context("Could not read base lock file")?;

        // Step 3: Build the override from the dependency's own lock file
        let (overrides, dependency_lockfile_found) =
            self.build_override_lockfile(&request, &fetched)?;

        // Step 4: Merge and persist
        self.progress_reporter
            .report_progress(4, TOTAL_STEPS, Some("Merging lock files"));
        let merged = LockMerger::new(request.dev_import_base)
            .merge(&base, &overrides)
            .context("Could not merge lock files")?
            .with_updated(Utc::now());
        self.lockfile_writer
            .write_lockfile(&lockfile_path, &merged)
            .context("Could not write merged lock file")?;

        // Step 5: Install the merged dependency set
        self.progress_reporter
            .report_progress(5, TOTAL_STEPS, Some("Installing dependencies"));
        self.dependency_installer
            .install(&request.project_path)
            .context("Could not install dependencies")?;

        self.progress_reporter.report_completion(&format!(
            "✅ Pinned {} at {} with {} import(s) in {}",
            spec.root(),
            fetched.lock.pin(),
            merged.imports().len(),
            lockfile_path.display()
        ));

        Ok(GetResponse {
            dependency: spec.root().clone(),
            pin: fetched.lock.pin().to_string(),
            dependency_lockfile_found,
            lockfile: merged,
            lockfile_path,
        })
    }

    fn fetch_dependency(
        &self,
        request: &GetRequest,
        spec: &DependencySpec,
    ) -> Result<FetchedDependency> {
        self.progress_reporter.report_progress(
            1,
            TOTAL_STEPS,
            Some(&format!("Fetching {}", spec.raw())),
        );

        let fetched = self
            .dependency_fetcher
            .fetch(&request.project_path, spec, request.interactive)
            .with_context(|| format!("Failed to get {}", spec.raw()))?;

        if fetched.lock.name() != spec.root() {
            anyhow::bail!(
                "Fetched dependency '{}' does not match requested package '{}'",
                fetched.lock.name(),
                spec.root()
            );
        }

        Ok(fetched)
    }

    /// The dependency's lock file (or an empty one) plus its own pinned entry
    fn build_override_lockfile(
        &self,
        request: &GetRequest,
        fetched: &FetchedDependency,
    ) -> Result<(Lockfile, bool)> {
        self.progress_reporter.report_progress(
            3,
            TOTAL_STEPS,
            Some(&format!("Looking for {} in {}", request.lockfile_name, fetched.cache_dir.display())),
        );

        let dependency_lockfile_path = fetched.cache_dir.join(&request.lockfile_name);
        let found = self.lockfile_reader.lockfile_exists(&dependency_lockfile_path);

        let mut overrides = if found {
            self.progress_reporter
                .report("Found dependency lock file so merging into project lock file");
            self.lockfile_reader
                .read_lockfile(&dependency_lockfile_path)
                .context("Could not read dependency lock file")?
        } else {
            Lockfile::empty()
        };

        overrides.upsert_import(fetched.lock.clone());
        Ok((overrides, found))
    }
}

#[cfg(test)]
mod tests;
