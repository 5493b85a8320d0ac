/// Adapters driving the glide dependency manager
mod cache;
mod command;
mod glide_cli;
mod manifest;
mod vcs;

pub use cache::{cache_key, default_cache_root};
pub use glide_cli::{GlideCli, DEFAULT_GLIDE_COMMAND};
pub use manifest::{ensure_import, EnsureOutcome, GlideManifest, ManifestDependency, MANIFEST_FILE};
pub use vcs::Vcs;
