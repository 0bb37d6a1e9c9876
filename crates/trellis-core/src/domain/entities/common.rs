use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::DomainError;

/// A template source path relative to the template root, `/`-separated.
///
/// Never absolute, never contains `..`, never empty. Segments are non-empty
/// and carry no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplatePath(String);

impl TemplatePath {
    /// Build a path from trusted segments (static names and enum spellings).
    ///
    /// A segment may itself contain `/` (`react/next`).
    pub fn new<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        debug_assert!(
            Self::check(&joined).is_ok(),
            "TemplatePath built from invalid segments: {joined:?}"
        );
        Self(joined)
    }

    /// Fallible constructor for paths that come from outside the resolver.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into().replace('\\', "/");
        let normalized = path.trim().trim_end_matches('/');
        Self::check(normalized)?;
        Ok(Self(normalized.to_string()))
    }

    fn check(path: &str) -> Result<(), DomainError> {
        let invalid = path.is_empty()
            || path.starts_with('/')
            || Path::new(path).is_absolute()
            || path
                .split('/')
                .any(|s| s.is_empty() || s != s.trim() || s == ".." || s == ".");
        if invalid {
            Err(DomainError::InvalidTemplatePath {
                path: path.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Append segments, keeping the relative invariant.
    pub fn join(&self, segment: &str) -> Result<Self, DomainError> {
        Self::try_new(format!("{}/{segment}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// This path resolved under `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |p, s| p.join(s))
    }
}

impl AsRef<str> for TemplatePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_joins_and_skips_empty_segments() {
        let path = TemplatePath::new(["frontend", "react/next", ""]);
        assert_eq!(path.as_str(), "frontend/react/next");
    }

    #[test]
    fn try_new_rejects_escapes() {
        assert!(TemplatePath::try_new("../etc").is_err());
        assert!(TemplatePath::try_new("/abs").is_err());
        assert!(TemplatePath::try_new("").is_err());
        assert!(TemplatePath::try_new("a/./b").is_err());
        assert_eq!(TemplatePath::try_new("db/drizzle/").unwrap().as_str(), "db/drizzle");
    }

    #[test]
    fn try_new_normalises_outer_whitespace() {
        let path = TemplatePath::try_new("  deploy/alchemy/ \n").unwrap();
        assert_eq!(path.as_str(), "deploy/alchemy");
        assert!(TemplatePath::try_new("   ").is_err());
        assert!(TemplatePath::try_new(" /abs").is_err());
    }

    #[test]
    fn try_new_rejects_padded_or_empty_segments() {
        assert!(TemplatePath::try_new("db/ drizzle").is_err());
        assert!(TemplatePath::try_new("db /drizzle").is_err());
        assert!(TemplatePath::try_new("db//drizzle").is_err());
    }

    #[test]
    fn join_validates_segment() {
        let base = TemplatePath::new(["addons"]);
        assert_eq!(base.join("pwa").unwrap().as_str(), "addons/pwa");
        assert!(base.join("../x").is_err());
    }

    #[test]
    fn under_resolves_against_root() {
        let path = TemplatePath::new(["api", "trpc"]);
        assert_eq!(
            path.under(Path::new("/tpl")),
            Path::new("/tpl").join("api").join("trpc")
        );
    }
}
