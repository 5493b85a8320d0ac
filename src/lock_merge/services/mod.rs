mod lock_merger;

pub use lock_merger::{combine_hashes, LockMerger};
