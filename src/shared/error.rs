use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Lock files merged (and installed, for `get`)
    Success = 0,
    /// Any lock, filesystem or external-command failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for lock file merging and splicing.
///
/// Uses thiserror to derive Display and Error traits. Every user-facing
/// variant ends with a hint line.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("Lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse lock file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the lock file is valid glide.lock YAML")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for value objects and requests
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The merged entries or hash could not be assembled into a lock file
    #[error("Failed to construct lock file: {reason}")]
    Construction { reason: String },

    #[error("Command `{command}` failed\nDetails: {details}\n\n💡 Hint: Please verify that the command is installed and on your PATH")]
    ExternalCommand { command: String, details: String },

    #[error("Project is locked by another invocation: {path}\n\n💡 Hint: Wait for it to finish, or remove the lock file if it is stale")]
    ProjectLocked { path: PathBuf },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
