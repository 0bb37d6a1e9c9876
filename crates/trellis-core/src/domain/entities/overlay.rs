//! Overlay plan: the ordered template operations for one project.

use std::fmt;

use serde::Serialize;

use super::common::TemplatePath;

/// One stage of the fixed composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Base,
    Frontend,
    Backend,
    DbOrm,
    Auth,
    Addons,
    Examples,
    Extras,
    Deploy,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Self::Base,
        Self::Frontend,
        Self::Backend,
        Self::DbOrm,
        Self::Auth,
        Self::Addons,
        Self::Examples,
        Self::Extras,
        Self::Deploy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::DbOrm => "db-orm",
            Self::Auth => "auth",
            Self::Addons => "addons",
            Self::Examples => "examples",
            Self::Extras => "extras",
            Self::Deploy => "deploy",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Destination app directory inside the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppDir {
    Root,
    Web,
    Native,
    Server,
    ConvexBackend,
}

impl AppDir {
    /// Path relative to the project root. Empty for the root itself.
    pub const fn relative_path(&self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Web => "apps/web",
            Self::Native => "apps/native",
            Self::Server => "apps/server",
            Self::ConvexBackend => "packages/backend",
        }
    }
}

impl fmt::Display for AppDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("."),
            other => f.write_str(other.relative_path()),
        }
    }
}

/// What happens when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwritePolicy {
    #[default]
    Overwrite,
    PreserveExisting,
}

impl OverwritePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::PreserveExisting => "preserve-existing",
        }
    }
}

/// Which part of the source an overlay copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "name")]
pub enum Selection {
    /// The whole directory tree.
    Tree,
    /// One file inside the source directory.
    File(&'static str),
}

/// One template tree (or file) applied onto the destination project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Overlay {
    pub phase: Phase,
    pub source: TemplatePath,
    pub selection: Selection,
    pub destination: AppDir,
    pub policy: OverwritePolicy,
}

impl Overlay {
    pub fn tree(phase: Phase, source: TemplatePath, destination: AppDir) -> Self {
        Self {
            phase,
            source,
            selection: Selection::Tree,
            destination,
            policy: OverwritePolicy::Overwrite,
        }
    }

    pub fn file(
        phase: Phase,
        source: TemplatePath,
        file: &'static str,
        destination: AppDir,
    ) -> Self {
        Self {
            phase,
            source,
            selection: Selection::File(file),
            destination,
            policy: OverwritePolicy::Overwrite,
        }
    }

    pub fn preserving(mut self) -> Self {
        self.policy = OverwritePolicy::PreserveExisting;
        self
    }

    /// Display form of the source, including the file for single-file overlays.
    pub fn source_display(&self) -> String {
        match self.selection {
            Selection::Tree => self.source.to_string(),
            Selection::File(name) => format!("{}/{name}", self.source),
        }
    }
}

/// The ordered overlays for one validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OverlayPlan {
    overlays: Vec<Overlay>,
}

impl OverlayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: Overlay) {
        debug_assert!(
            self.overlays
                .last()
                .is_none_or(|last| last.phase <= overlay.phase),
            "overlay pushed out of phase order"
        );
        self.overlays.push(overlay);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Overlays of one phase, in plan order.
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(move |o| o.phase == phase)
    }

    /// Source paths in plan order, single files shown with their name.
    pub fn sources(&self) -> Vec<String> {
        self.overlays.iter().map(Overlay::source_display).collect()
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.overlays.iter().any(|o| o.source.as_str() == source)
    }
}

impl<'a> IntoIterator for &'a OverlayPlan {
    type Item = &'a Overlay;
    type IntoIter = std::slice::Iter<'a, Overlay>;

    fn into_iter(self) -> Self::IntoIter {
        self.overlays.iter()
    }
}
