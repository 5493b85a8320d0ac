use lock_transitive::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyFetcher returning a prepared dependency
#[derive(Clone)]
pub struct MockDependencyFetcher {
    pub fetched: Option<FetchedDependency>,
    pub calls: Arc<Mutex<Vec<(PathBuf, String, bool)>>>,
}

impl MockDependencyFetcher {
    pub fn new(lock: Lock, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetched: Some(FetchedDependency::new(lock, cache_dir.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            fetched: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyFetcher for MockDependencyFetcher {
    fn fetch(
        &self,
        project_path: &Path,
        spec: &DependencySpec,
        interactive: bool,
    ) -> Result<FetchedDependency> {
        self.calls.lock().unwrap().push((
            project_path.to_path_buf(),
            spec.raw().to_string(),
            interactive,
        ));
        self.fetched
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock fetch failure"))
    }
}
