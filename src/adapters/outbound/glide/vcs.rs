use super::command::capture;
use crate::shared::error::LockError;
use crate::shared::Result;
use std::path::Path;

/// Version control systems whose checkouts can be resolved to a revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vcs {
    Git,
    Hg,
}

impl Vcs {
    /// Picks the VCS declared in glide.yaml, or detects it from the checkout
    ///
    /// # Errors
    /// Returns a validation error for VCS types other than git and hg
    pub fn resolve(
        declared: Option<&str>,
        checkout: &Path,
    ) -> std::result::Result<Self, LockError> {
        match declared.map(str::trim).filter(|v| !v.is_empty()) {
            Some(vcs) => match vcs.to_ascii_lowercase().as_str() {
                "git" => Ok(Vcs::Git),
                "hg" | "mercurial" => Ok(Vcs::Hg),
                other => Err(LockError::Validation {
                    message: format!(
                        "Unsupported VCS '{}' for {}. Only git and hg checkouts can be pinned",
                        other,
                        checkout.display()
                    ),
                }),
            },
            None if checkout.join(".hg").is_dir() => Ok(Vcs::Hg),
            None => Ok(Vcs::Git),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vcs::Git => "git",
            Vcs::Hg => "hg",
        }
    }

    /// Revision currently checked out in `checkout`
    pub fn current_revision(&self, checkout: &Path) -> Result<String> {
        let output = match self {
            Vcs::Git => capture("git", &["rev-parse", "HEAD"], checkout)?,
            Vcs::Hg => capture("hg", &["--debug", "identify", "-i"], checkout)?,
        };

        // hg marks a dirty working copy with a trailing '+'
        let revision = output.trim().trim_end_matches('+');
        if revision.is_empty() {
            anyhow::bail!(
                "{} reported no revision for {}",
                self.as_str(),
                checkout.display()
            );
        }
        Ok(revision.to_string())
    }
}
