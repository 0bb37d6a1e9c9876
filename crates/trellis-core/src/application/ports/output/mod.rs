//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::{Overlay, ProjectConfig, Selection, TemplatePath};
use crate::error::TrellisResult;

/// Files touched by one overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Files created or overwritten.
    pub written: usize,
    /// Files left alone because they already existed.
    pub preserved: usize,
}

impl std::ops::AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.written += rhs.written;
        self.preserved += rhs.preserved;
    }
}

/// Port for the template copy/render primitive.
///
/// Implemented by:
/// - `trellis_adapters::LocalTemplateCopier` (template tree on disk, Handlebars)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateCopier: Send + Sync {
    /// Whether the overlay source is present in the template tree.
    fn exists(&self, source: &TemplatePath, selection: Selection) -> bool;

    /// Copy one overlay into `destination`.
    ///
    /// Must create directories as needed, render `*.hbs` files against
    /// `context` and strip the extension, rename `_gitignore` and `_npmrc`
    /// to their dotfile names, and honour the overlay's overwrite policy.
    fn render(
        &self,
        overlay: &Overlay,
        destination: &Path,
        context: &ProjectConfig,
    ) -> TrellisResult<RenderStats>;
}

/// Port for filesystem operations the services perform directly.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()>;
}

/// One `KEY=value` line for a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
}

impl EnvVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Port for `.env` files.
#[cfg_attr(test, mockall::automock)]
pub trait EnvWriter: Send + Sync {
    /// Append variables whose keys are not yet present. Creates the file
    /// if it does not exist.
    fn add_variables(&self, env_file: &Path, variables: &[EnvVariable]) -> TrellisResult<()>;
}

/// Which manifest section a dependency goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    /// The `package.json` key for this section.
    pub const fn manifest_key(&self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
        }
    }
}

/// Port for package manifest edits.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyAdder: Send + Sync {
    /// Add `names` to the manifest in `package_dir`, with versions from the
    /// dependency version table. An unknown name is an error.
    fn add_dependencies(
        &self,
        package_dir: &Path,
        names: &[String],
        kind: DependencyKind,
    ) -> TrellisResult<()>;
}
