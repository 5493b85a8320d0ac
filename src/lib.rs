//! lock-transitive - pin transitive dependencies of glide projects
//!
//! This library merges glide.lock files, letting the entries of an override
//! lock file take precedence over a base lock file, and splices the lock file
//! of a freshly fetched dependency into a project's lock file. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lock_merge`): Lock file model and the merge algorithm
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use lock_transitive::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let base = Lockfile::new(
//!     vec![Lock::new("github.com/pkg/errors", "v0.7.0")?],
//!     vec![],
//!     "aaaa".to_string(),
//! )?;
//! let overrides = Lockfile::new(
//!     vec![Lock::new("github.com/pkg/errors", "v0.8.0")?.with_subpackages(["cause"])],
//!     vec![],
//!     "bbbb".to_string(),
//! )?;
//!
//! let merged = LockMerger::default().merge(&base, &overrides)?;
//! let errors = merged.get_import("github.com/pkg/errors").unwrap();
//! assert_eq!(errors.version(), "v0.8.0");
//! assert_eq!(errors.subpackages(), ["cause"]);
//!
//! println!("{}", YamlFormatter::new().format(&merged)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod lock_merge;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FilePresenter, FileProjectLock, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
    pub use crate::adapters::outbound::glide::GlideCli;
    pub use crate::application::dto::{
        GetRequest, GetResponse, MergeRequest, MergeResponse, OutputFormat,
    };
    pub use crate::application::use_cases::{GetTransitiveUseCase, MergeLockfilesUseCase};
    pub use crate::lock_merge::domain::{DependencySpec, Lock, Lockfile, PackageName};
    pub use crate::lock_merge::policies::DevImportBase;
    pub use crate::lock_merge::services::{combine_hashes, LockMerger};
    pub use crate::ports::outbound::{
        DependencyFetcher, DependencyInstaller, FetchedDependency, LockGuard, LockfileFormatter,
        LockfileReader, LockfileWriter, OutputPresenter, ProgressReporter, ProjectLock,
    };
    pub use crate::shared::error::LockError;
    pub use crate::shared::Result;
}
