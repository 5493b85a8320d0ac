/// Lock merge domain - pure lock file model and merge logic
///
/// Nothing in this module performs I/O; adapters parse and persist the
/// values it works on.
pub mod domain;
pub mod policies;
pub mod services;
