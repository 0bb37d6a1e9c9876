//! `package.json` dependency editing.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};
use trellis_core::{
    application::{
        ApplicationError,
        ports::{DependencyAdder, DependencyKind},
    },
    domain::dependency_version,
    error::TrellisResult,
};

use crate::error::AdapterError;

pub const MANIFEST_FILE: &str = "package.json";

/// Adds pinned dependencies to a package manifest, keeping key order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonEditor;

impl PackageJsonEditor {
    pub fn new() -> Self {
        Self
    }

    fn edit(
        &self,
        manifest: &Path,
        pinned: &[(&str, &'static str)],
        kind: DependencyKind,
    ) -> Result<(), AdapterError> {
        let raw = fs::read_to_string(manifest).map_err(|e| AdapterError::io("read", manifest, e))?;
        let mut document: Value = serde_json::from_str(&raw).map_err(|source| AdapterError::Json {
            path: manifest.to_path_buf(),
            source,
        })?;

        let key = kind.manifest_key();
        let shape_error = || AdapterError::ManifestShape {
            path: manifest.to_path_buf(),
            key,
        };
        let section = document
            .as_object_mut()
            .ok_or_else(shape_error)?
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(shape_error)?;

        for (name, version) in pinned {
            section.insert((*name).to_string(), Value::String((*version).to_string()));
        }

        let mut out = serde_json::to_string_pretty(&document).map_err(|source| AdapterError::Json {
            path: manifest.to_path_buf(),
            source,
        })?;
        out.push('\n');
        fs::write(manifest, out).map_err(|e| AdapterError::io("write", manifest, e))
    }
}

impl DependencyAdder for PackageJsonEditor {
    #[instrument(skip_all, fields(package_dir = %package_dir.display(), kind = kind.manifest_key()))]
    fn add_dependencies(
        &self,
        package_dir: &Path,
        names: &[String],
        kind: DependencyKind,
    ) -> TrellisResult<()> {
        // Resolve every version first so an unknown name leaves the file untouched.
        let pinned = names
            .iter()
            .map(|name| {
                dependency_version(name)
                    .map(|version| (name.as_str(), version))
                    .ok_or_else(|| ApplicationError::UnknownDependency { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.edit(&package_dir.join(MANIFEST_FILE), &pinned, kind)?;
        debug!(added = pinned.len(), "Updated package manifest");
        Ok(())
    }
}
