//! Index of the overlay sources available in a template root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use trellis_core::{
    domain::{Overlay, OverlayPlan, Selection},
    error::TrellisResult,
};
use walkdir::WalkDir;

use crate::error::AdapterError;

/// Every directory and file under a template root, as `/`-separated
/// relative paths. Built with one walk so plans can be checked cheaply.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    entries: BTreeSet<String>,
}

impl TemplateCatalog {
    pub fn scan(root: impl Into<PathBuf>) -> TrellisResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AdapterError::TemplateRoot(root).into());
        }

        let mut entries = BTreeSet::new();
        for entry in WalkDir::new(&root).min_depth(1) {
            let entry = entry.map_err(AdapterError::from)?;
            if let Ok(relative) = entry.path().strip_prefix(&root) {
                entries.insert(slash_path(relative));
            }
        }
        debug!(root = %root.display(), entries = entries.len(), "Scanned template root");
        Ok(Self { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the overlay's source (or single file) is present.
    pub fn contains(&self, overlay: &Overlay) -> bool {
        match overlay.selection {
            Selection::Tree => self.entries.contains(overlay.source.as_str()),
            Selection::File(_) => self.entries.contains(&overlay.source_display()),
        }
    }

    /// Overlays of `plan` that would be skipped, in plan order.
    pub fn missing<'p>(&self, plan: &'p OverlayPlan) -> Vec<&'p Overlay> {
        plan.iter().filter(|overlay| !self.contains(overlay)).collect()
    }
}

fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trellis_core::domain::{AppDir, Phase, TemplatePath};

    fn root_with(paths: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in paths {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, "").unwrap();
        }
        dir
    }

    #[test]
    fn missing_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(TemplateCatalog::scan(dir.path().join("absent")).is_err());
    }

    #[test]
    fn reports_missing_overlays_in_order() {
        let dir = root_with(&["base/package.json.hbs", "deploy/alchemy/alchemy.run.ts.hbs"]);
        let catalog = TemplateCatalog::scan(dir.path()).unwrap();

        let mut plan = OverlayPlan::new();
        plan.push(Overlay::tree(Phase::Base, TemplatePath::new(["base"]), AppDir::Root));
        plan.push(Overlay::tree(
            Phase::Backend,
            TemplatePath::new(["backend", "server", "hono"]),
            AppDir::Server,
        ));
        plan.push(Overlay::file(
            Phase::Deploy,
            TemplatePath::new(["deploy", "alchemy"]),
            "alchemy.run.ts.hbs",
            AppDir::Root,
        ));
        plan.push(Overlay::file(
            Phase::Deploy,
            TemplatePath::new(["deploy", "alchemy"]),
            "env.d.ts.hbs",
            AppDir::Server,
        ));

        let missing: Vec<_> = catalog
            .missing(&plan)
            .into_iter()
            .map(Overlay::source_display)
            .collect();
        assert_eq!(missing, ["backend/server/hono", "deploy/alchemy/env.d.ts.hbs"]);
    }

    #[test]
    fn nested_directories_are_indexed() {
        let dir = root_with(&["frontend/react/next/src/app/page.tsx"]);
        let catalog = TemplateCatalog::scan(dir.path()).unwrap();
        let overlay = Overlay::tree(
            Phase::Frontend,
            TemplatePath::new(["frontend", "react", "next"]),
            AppDir::Web,
        );
        assert!(catalog.contains(&overlay));
        assert_eq!(catalog.len(), 6);
    }
}
