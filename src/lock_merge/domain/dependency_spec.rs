use super::PackageName;
use crate::shared::error::LockError;

/// Hosts whose repository root is the first three path segments
const KNOWN_HOSTS: &[&str] = &[
    "github.com",
    "bitbucket.org",
    "gitlab.com",
    "launchpad.net",
    "git.apache.org",
    "hub.jazz.net",
];

/// Maximum length of a requested package path
const MAX_PACKAGE_PATH_LENGTH: usize = 255;

/// A dependency requested on the command line, e.g.
/// `github.com/tendermint/go-wire/data@v0.6.2`
///
/// The version may follow `@` or `#`. The root package is the repository
/// import path; anything below it is a subpackage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    raw: String,
    root: PackageName,
    subpackage: Option<String>,
    version: Option<String>,
}

impl DependencySpec {
    pub fn parse(input: &str) -> Result<Self, LockError> {
        let input = input.trim();
        validate_input(input)?;

        let (path, version) = match input.split_once(['@', '#']) {
            Some((path, version)) => (path, Some(version.to_string())),
            None => (input, None),
        };
        let version = version.filter(|v| !v.is_empty());

        let (root, subpackage) = normalize_name(path);
        if root.is_empty() {
            return Err(LockError::Validation {
                message: format!("Package name is required for {:?}", input),
            });
        }

        Ok(Self {
            raw: input.to_string(),
            root: PackageName::new(root)?,
            subpackage,
            version,
        })
    }

    /// The argument as the user typed it, passed through to the fetcher
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn subpackage(&self) -> Option<&str> {
        self.subpackage.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

fn validate_input(input: &str) -> Result<(), LockError> {
    if input.len() > MAX_PACKAGE_PATH_LENGTH {
        return Err(LockError::Validation {
            message: format!(
                "Dependency is too long ({} bytes). Maximum allowed: {} bytes",
                input.len(),
                MAX_PACKAGE_PATH_LENGTH
            ),
        });
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(LockError::Validation {
            message: format!("Dependency {:?} contains whitespace or control characters", input),
        });
    }

    Ok(())
}

/// Splits an import path into repository root and subpackage
fn normalize_name(path: &str) -> (String, Option<String>) {
    let path = strip_vendor(path.trim_matches('/'));
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let root_len = match segments.first() {
        Some(host) if KNOWN_HOSTS.contains(host) => 3,
        Some(&"golang.org") if segments.get(1) == Some(&"x") => 3,
        Some(&"gopkg.in") => gopkg_root_len(&segments),
        _ => segments.len(),
    }
    .min(segments.len());

    let root = segments[..root_len].join("/");
    let rest = segments[root_len..].join("/");
    let subpackage = if rest.is_empty() { None } else { Some(rest) };
    (root, subpackage)
}

/// gopkg.in/yaml.v2 has a two-segment root, gopkg.in/user/pkg.v1 three
fn gopkg_root_len(segments: &[&str]) -> usize {
    match segments.get(1) {
        Some(second) if second.contains(".v") => 2,
        _ => 3,
    }
}

fn strip_vendor(path: &str) -> &str {
    match path.rfind("vendor/") {
        Some(idx) if idx == 0 || path[..idx].ends_with('/') => &path[idx + "vendor/".len()..],
        _ => path,
    }
}
