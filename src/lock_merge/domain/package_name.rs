use crate::shared::error::LockError;
use serde::{Deserialize, Serialize};

/// NewType wrapper for a dependency's import path, the unique key of a lock entry
///
/// Any non-empty string is accepted so that every name found in a lock file
/// round-trips. Command-line input is checked more strictly by
/// [`DependencySpec`](super::DependencySpec).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self, LockError> {
        let name = name.into();

        if name.is_empty() {
            return Err(LockError::Validation {
                message: "Package name cannot be empty".to_string(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackageName {
    type Error = LockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
