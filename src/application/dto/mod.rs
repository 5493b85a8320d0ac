/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod get_request;
mod get_response;
mod merge_request;
mod merge_response;
mod output_format;

pub use get_request::{GetRequest, DEFAULT_LOCKFILE_NAME};
pub use get_response::GetResponse;
pub use merge_request::MergeRequest;
pub use merge_response::MergeResponse;
pub use output_format::OutputFormat;
