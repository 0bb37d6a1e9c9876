//! Template copying from a directory tree on disk.

mod local;

pub use local::{LocalTemplateCopier, output_name};
