use crate::lock_merge::policies::DevImportBase;
use std::path::PathBuf;

/// MergeRequest - request DTO for merging two lock files given by path
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Lock file whose entries are overridden
    pub base_path: PathBuf,
    /// Lock file whose entries take precedence
    pub override_path: PathBuf,
    /// Table override test imports are matched against
    pub dev_import_base: DevImportBase,
}

impl MergeRequest {
    pub fn new(base_path: PathBuf, override_path: PathBuf) -> Self {
        Self {
            base_path,
            override_path,
            dev_import_base: DevImportBase::default(),
        }
    }

    pub fn with_dev_import_base(mut self, dev_import_base: DevImportBase) -> Self {
        self.dev_import_base = dev_import_base;
        self
    }
}
