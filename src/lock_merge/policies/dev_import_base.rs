use crate::shared::error::LockError;
use std::str::FromStr;

/// DevImportBase policy selecting which merged table an override test import
/// is matched against
///
/// - `DevImports`: the same-named base test import. Subpackages of both are
///   unioned, exactly as for production imports.
/// - `Imports`: the production imports table after the production overrides
///   were applied. A same-named base test import is then replaced outright,
///   and a production import of that name donates its subpackages. Older
///   releases of the glide plugin behaved this way; select it to reproduce
///   their lock files byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevImportBase {
    #[default]
    DevImports,
    Imports,
}

impl DevImportBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevImportBase::DevImports => "dev_imports",
            DevImportBase::Imports => "imports",
        }
    }
}

impl FromStr for DevImportBase {
    type Err = LockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "dev_imports" | "test_imports" => Ok(DevImportBase::DevImports),
            "imports" | "legacy" => Ok(DevImportBase::Imports),
            _ => Err(LockError::Validation {
                message: format!(
                    "Invalid dev_import_base: {}. Please specify 'dev_imports' or 'imports'",
                    s
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dev_imports() {
        assert_eq!(DevImportBase::default(), DevImportBase::DevImports);
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("dev_imports".parse::<DevImportBase>().unwrap(), DevImportBase::DevImports);
        assert_eq!("Dev-Imports".parse::<DevImportBase>().unwrap(), DevImportBase::DevImports);
        assert_eq!("testImports".parse::<DevImportBase>().ok(), None);
        assert_eq!("imports".parse::<DevImportBase>().unwrap(), DevImportBase::Imports);
        assert_eq!("legacy".parse::<DevImportBase>().unwrap(), DevImportBase::Imports);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "both".parse::<DevImportBase>().unwrap_err();
        assert!(err.to_string().contains("Invalid dev_import_base"));
    }

    #[test]
    fn test_as_str_round_trip() {
        for policy in [DevImportBase::DevImports, DevImportBase::Imports] {
            assert_eq!(policy.as_str().parse::<DevImportBase>().unwrap(), policy);
        }
    }
}
