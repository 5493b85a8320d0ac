/// Type alias for Result with anyhow::Error as the error type.
/// Typed errors from `error::LockError` convert into it and can be downcast back.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
