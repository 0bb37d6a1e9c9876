//! Adapter-level failures, converted into core errors at the port boundary.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use trellis_core::{application::ApplicationError, error::TrellisError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template directory {} does not exist", .0.display())]
    TemplateRoot(PathBuf),

    #[error("failed to walk template directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to render {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("failed to build template context: {0}")]
    Context(#[source] serde_json::Error),

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no '{key}' object", .path.display())]
    ManifestShape { path: PathBuf, key: &'static str },
}

impl AdapterError {
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<AdapterError> for TrellisError {
    fn from(e: AdapterError) -> Self {
        let reason = e.to_string();
        let app = match e {
            AdapterError::TemplateRoot(_) => {
                return TrellisError::Configuration { message: reason };
            }
            AdapterError::Io { path, .. } => ApplicationError::FilesystemError { path, reason },
            AdapterError::Walk(err) => ApplicationError::FilesystemError {
                path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                reason,
            },
            AdapterError::Render { path, .. } => ApplicationError::RenderingFailed { path, reason },
            AdapterError::Context(_) => ApplicationError::RenderingFailed {
                path: PathBuf::new(),
                reason,
            },
            AdapterError::Json { path, .. } | AdapterError::ManifestShape { path, .. } => {
                ApplicationError::ManifestUpdate { path, reason }
            }
        };
        app.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::error::ErrorCategory;

    #[test]
    fn missing_template_root_is_a_configuration_error() {
        let err: TrellisError = AdapterError::TemplateRoot(PathBuf::from("/nope")).into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn io_errors_keep_the_path() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: TrellisError = AdapterError::io("write", Path::new("/p/.env"), source).into();
        match err {
            TrellisError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, PathBuf::from("/p/.env"));
                assert!(reason.contains("failed to write"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
