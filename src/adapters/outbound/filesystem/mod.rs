/// Filesystem adapters for lock file I/O and the project lock
mod file_reader;
mod file_writer;
mod project_lock;

pub use file_reader::FileSystemReader;
pub(crate) use file_writer::write_atomically;
pub use file_writer::{FilePresenter, FileSystemWriter, StdoutPresenter};
pub use project_lock::FileProjectLock;
