//! Infrastructure adapters for Trellis.
//!
//! This crate implements the ports defined in `trellis-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod copier;
pub mod env_file;
pub mod error;
pub mod filesystem;
pub mod package_json;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::TemplateCatalog;
pub use copier::LocalTemplateCopier;
pub use env_file::DotenvWriter;
pub use error::AdapterError;
pub use filesystem::LocalFilesystem;
pub use package_json::PackageJsonEditor;
pub use renderer::HandlebarsRenderer;
