//! Application layer errors.
//!
//! Failures in orchestration and I/O, as opposed to the rule violations in
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while composing or setting up a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A planned template source is absent and missing sources are fatal.
    #[error("Template source not found: {source_path}")]
    TemplateMissing { source_path: String },

    #[error("Template rendering failed for {path}: {reason}")]
    RenderingFailed { path: PathBuf, reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A `package.json` could not be read or updated.
    #[error("Could not update manifest {path}: {reason}")]
    ManifestUpdate { path: PathBuf, reason: String },

    /// The dependency has no entry in the version table.
    #[error("No version known for dependency '{name}'")]
    UnknownDependency { name: String },

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { .. } => vec![
                "The template directory does not cover this combination".into(),
                "Drop --strict-templates to skip missing overlays".into(),
                "Or point --templates at a complete template tree".into(),
            ],
            Self::RenderingFailed { path, .. } => vec![
                format!("Check the Handlebars syntax in {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ManifestUpdate { path, .. } => vec![
                format!("Make sure {} is valid JSON", path.display()),
            ],
            Self::UnknownDependency { name } => vec![
                format!("Add '{name}' to the dependency version table"),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway".into(),
                "Choose a different project name".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::ManifestUpdate { .. }
            | Self::UnknownDependency { .. } => ErrorCategory::Internal,
        }
    }
}
