/// Use cases module containing application business logic orchestration
mod get_transitive;
mod merge_lockfiles;

pub use get_transitive::GetTransitiveUseCase;
pub use merge_lockfiles::MergeLockfilesUseCase;
