/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, dependency manager, console).
pub mod dependency_fetcher;
pub mod dependency_installer;
pub mod formatter;
pub mod lockfile_reader;
pub mod lockfile_writer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_lock;

pub use dependency_fetcher::{DependencyFetcher, FetchedDependency};
pub use dependency_installer::DependencyInstaller;
pub use formatter::LockfileFormatter;
pub use lockfile_reader::LockfileReader;
pub use lockfile_writer::LockfileWriter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_lock::{LockGuard, ProjectLock};
