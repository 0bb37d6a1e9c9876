//! `.env` file writer.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use trellis_core::{
    application::ports::{EnvVariable, EnvWriter},
    error::TrellisResult,
};

use crate::error::AdapterError;

/// Appends `KEY=value` lines, leaving keys that are already defined alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvWriter;

impl DotenvWriter {
    pub fn new() -> Self {
        Self
    }

    fn update(&self, env_file: &Path, variables: &[EnvVariable]) -> Result<usize, AdapterError> {
        let mut contents = match fs::read_to_string(env_file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AdapterError::io("read", env_file, e)),
        };

        let mut defined = defined_keys(&contents);
        let mut added = 0;
        for variable in variables {
            if !defined.insert(variable.key.clone()) {
                continue;
            }
            if !contents.is_empty() && !contents.ends_with('\n') {
                contents.push('\n');
            }
            contents.push_str(&format!("{}={}\n", variable.key, variable.value));
            added += 1;
        }

        if added > 0 || !env_file.exists() {
            if let Some(parent) = env_file.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| AdapterError::io("create directory", parent, e))?;
            }
            fs::write(env_file, contents).map_err(|e| AdapterError::io("write", env_file, e))?;
        }
        Ok(added)
    }
}

impl EnvWriter for DotenvWriter {
    fn add_variables(&self, env_file: &Path, variables: &[EnvVariable]) -> TrellisResult<()> {
        let added = self.update(env_file, variables)?;
        debug!(path = %env_file.display(), added, "Updated env file");
        Ok(())
    }
}

/// Keys assigned in a dotenv document, ignoring comments and `export`.
fn defined_keys(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            line.split_once('=').map(|(key, _)| key.trim().to_string())
        })
        .collect()
}
