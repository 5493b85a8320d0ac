use super::cache::cache_key;
use super::command::run_visible;
use super::manifest::{ensure_import, GlideManifest, MANIFEST_FILE};
use super::vcs::Vcs;
use crate::lock_merge::domain::{DependencySpec, Lock};
use crate::ports::outbound::{DependencyFetcher, DependencyInstaller, FetchedDependency};
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Default glide executable
pub const DEFAULT_GLIDE_COMMAND: &str = "glide";

/// GlideCli adapter driving the `glide` executable
///
/// `fetch` updates an existing glide.yaml import to the requested version
/// and subpackage, runs `glide get`, then locates the dependency's checkout
/// in glide's repository cache and reads the revision it is at. `install`
/// runs `glide install`.
pub struct GlideCli {
    command: String,
    cache_root: PathBuf,
}

impl GlideCli {
    pub fn new(command: impl Into<String>, cache_root: PathBuf) -> Self {
        Self {
            command: command.into(),
            cache_root,
        }
    }

    /// Checkout directory for `remote` in glide's cache
    pub fn cache_dir(&self, remote: &str) -> PathBuf {
        self.cache_root.join("src").join(cache_key(remote))
    }

    /// Argument for `glide get`, which takes the version after `#`
    fn get_argument(spec: &DependencySpec) -> String {
        let mut argument = spec.root().to_string();
        if let Some(subpackage) = spec.subpackage() {
            argument.push('/');
            argument.push_str(subpackage);
        }
        if let Some(version) = spec.version() {
            argument.push('#');
            argument.push_str(version);
        }
        argument
    }

    /// Builds the pinned lock entry for a dependency declared in glide.yaml
    fn resolve_fetched(&self, project_path: &Path, spec: &DependencySpec) -> Result<FetchedDependency> {
        let manifest = GlideManifest::read(project_path)?;
        let declared = manifest.find_import(spec.root().as_str()).ok_or_else(|| {
            anyhow::anyhow!(
                "{} is not listed under import in {}",
                spec.root(),
                project_path.join(MANIFEST_FILE).display()
            )
        })?;

        if let Some(requested) = spec.version() {
            if declared.version.as_deref() != Some(requested) {
                anyhow::bail!(
                    "{} is declared at version {} in {}, not the requested {}",
                    spec.root(),
                    declared.version.as_deref().unwrap_or("(none)"),
                    project_path.join(MANIFEST_FILE).display(),
                    requested
                );
            }
        }

        let cache_dir = self.cache_dir(&declared.remote());
        let vcs = Vcs::resolve(declared.vcs.as_deref(), &cache_dir)?;
        let revision = vcs
            .current_revision(&cache_dir)
            .with_context(|| format!("Could not get version of {}", cache_dir.display()))?;

        let mut lock = Lock::new(
            spec.root().as_str(),
            declared.version.clone().unwrap_or_default(),
        )?
        .with_subpackages(declared.subpackages.iter().cloned())
        .with_platforms(declared.arch.clone(), declared.os.clone())
        .with_pin(revision);
        if let Some(repo) = declared.repo.as_deref().filter(|r| !r.is_empty()) {
            lock = lock.with_repository(repo);
        }
        if let Some(vcs_name) = declared.vcs.as_deref().filter(|v| !v.is_empty()) {
            lock = lock.with_vcs(vcs_name);
        }

        Ok(FetchedDependency::new(lock, cache_dir))
    }
}

impl DependencyFetcher for GlideCli {
    fn fetch(
        &self,
        project_path: &Path,
        spec: &DependencySpec,
        interactive: bool,
    ) -> Result<FetchedDependency> {
        ensure_import(project_path, spec)?;

        let argument = Self::get_argument(spec);
        let mut args = vec!["get"];
        if !interactive {
            args.push("--non-interactive");
        }
        args.push(&argument);

        run_visible(&self.command, &args, project_path, interactive)?;
        self.resolve_fetched(project_path, spec)
    }
}

impl DependencyInstaller for GlideCli {
    fn install(&self, project_path: &Path) -> Result<()> {
        run_visible(&self.command, &["install"], project_path, false)
    }
}
