pub mod dependency_spec;
pub mod lock;
pub mod lockfile;
pub mod package_name;

pub use dependency_spec::DependencySpec;
pub use lock::Lock;
pub use lockfile::Lockfile;
pub use package_name::PackageName;
