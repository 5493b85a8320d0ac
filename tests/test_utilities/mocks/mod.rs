/// Mock implementations for testing
mod mock_dependency_fetcher;
mod mock_dependency_installer;
mod mock_lockfile_reader;
mod mock_lockfile_writer;
mod mock_progress_reporter;
mod mock_project_lock;

pub use mock_dependency_fetcher::MockDependencyFetcher;
pub use mock_dependency_installer::MockDependencyInstaller;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_lockfile_writer::MockLockfileWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_lock::MockProjectLock;
