//! Local filesystem adapter using std::fs.

use std::path::Path;

use trellis_core::{application::ports::Filesystem, error::TrellisResult};

use crate::error::AdapterError;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        std::fs::create_dir_all(path)
            .map_err(|e| AdapterError::io("create directory", path, e).into())
    }
}
