//! Copies overlays out of a local template root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};
use trellis_core::{
    application::ports::{RenderStats, TemplateCopier},
    domain::{Overlay, OverwritePolicy, ProjectConfig, Selection, TemplatePath},
    error::TrellisResult,
};
use walkdir::WalkDir;

use crate::error::AdapterError;
use crate::renderer::{HandlebarsRenderer, TEMPLATE_EXTENSION};

/// Files stored under a placeholder name so packaging tools leave them alone.
const RENAMED_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore"), ("_npmrc", ".npmrc")];

/// Reads overlays from `root/<source>` and writes them into the project.
#[derive(Debug)]
pub struct LocalTemplateCopier {
    root: PathBuf,
    renderer: HandlebarsRenderer,
}

impl LocalTemplateCopier {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: HandlebarsRenderer::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `(source file, path relative to the destination)` for every file the
    /// overlay contributes, sorted for deterministic output.
    fn collect_files(&self, overlay: &Overlay) -> Result<Vec<(PathBuf, PathBuf)>, AdapterError> {
        let source_dir = overlay.source.under(&self.root);
        match overlay.selection {
            Selection::File(name) => Ok(vec![(source_dir.join(name), PathBuf::from(name))]),
            Selection::Tree => {
                let mut files = Vec::new();
                for entry in WalkDir::new(&source_dir)
                    .min_depth(1)
                    .sort_by_file_name()
                {
                    let entry = entry?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    // min_depth(1) guarantees every entry is below source_dir.
                    if let Ok(relative) = entry.path().strip_prefix(&source_dir) {
                        files.push((entry.path().to_path_buf(), relative.to_path_buf()));
                    }
                }
                Ok(files)
            }
        }
    }

    fn write_one(
        &self,
        source: &Path,
        target: &Path,
        context: &serde_json::Value,
    ) -> Result<(), AdapterError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AdapterError::io("create directory", parent, e))?;
        }

        if is_template(source) {
            let template = fs::read_to_string(source)
                .map_err(|e| AdapterError::io("read template", source, e))?;
            let rendered = self.renderer.render(source, &template, context)?;
            fs::write(target, rendered).map_err(|e| AdapterError::io("write file", target, e))?;
        } else {
            fs::copy(source, target).map_err(|e| AdapterError::io("copy file", source, e))?;
        }
        Ok(())
    }

    fn render_overlay(
        &self,
        overlay: &Overlay,
        destination: &Path,
        config: &ProjectConfig,
    ) -> Result<RenderStats, AdapterError> {
        let context = HandlebarsRenderer::context(config)?;
        let mut stats = RenderStats::default();

        for (source, relative) in self.collect_files(overlay)? {
            let target = destination.join(output_path(&relative));

            if overlay.policy == OverwritePolicy::PreserveExisting && target.exists() {
                trace!(path = %target.display(), "Keeping existing file");
                stats.preserved += 1;
                continue;
            }

            self.write_one(&source, &target, &context)?;
            trace!(path = %target.display(), "Wrote file");
            stats.written += 1;
        }
        Ok(stats)
    }
}

impl TemplateCopier for LocalTemplateCopier {
    fn exists(&self, source: &TemplatePath, selection: Selection) -> bool {
        let dir = source.under(&self.root);
        match selection {
            Selection::Tree => dir.is_dir(),
            Selection::File(name) => dir.join(name).is_file(),
        }
    }

    #[instrument(skip_all, fields(source = %overlay.source_display()))]
    fn render(
        &self,
        overlay: &Overlay,
        destination: &Path,
        context: &ProjectConfig,
    ) -> TrellisResult<RenderStats> {
        let stats = self.render_overlay(overlay, destination, context)?;
        debug!(
            written = stats.written,
            preserved = stats.preserved,
            "Overlay copied"
        );
        Ok(stats)
    }
}

fn is_template(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
}

/// Name a template file takes in the generated project.
///
/// The `.hbs` suffix is dropped, then placeholder names are restored:
/// `_gitignore` becomes `.gitignore`, `_npmrc.hbs` becomes `.npmrc`.
pub fn output_name(file_name: &str) -> String {
    let name = file_name
        .strip_suffix(".hbs")
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name);
    RENAMED_FILES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or_else(|| name.to_string(), |(_, to)| (*to).to_string())
}

fn output_path(relative: &Path) -> PathBuf {
    match relative.file_name().and_then(|n| n.to_str()) {
        Some(name) => relative.with_file_name(output_name(name)),
        None => relative.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trellis_core::domain::{AppDir, Phase};

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config() -> ProjectConfig {
        ProjectConfig::builder().project_name("acme").build().unwrap()
    }

    #[test]
    fn output_names() {
        assert_eq!(output_name("package.json.hbs"), "package.json");
        assert_eq!(output_name("_gitignore"), ".gitignore");
        assert_eq!(output_name("_npmrc.hbs"), ".npmrc");
        assert_eq!(output_name("logo.png"), "logo.png");
        assert_eq!(output_name(".hbs"), ".hbs");
    }

    #[test]
    fn exists_checks_tree_and_file() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "deploy/alchemy/alchemy.run.ts.hbs", "");
        let copier = LocalTemplateCopier::new(templates.path());
        let source = TemplatePath::new(["deploy", "alchemy"]);

        assert!(copier.exists(&source, Selection::Tree));
        assert!(copier.exists(&source, Selection::File("alchemy.run.ts.hbs")));
        assert!(!copier.exists(&source, Selection::File("env.d.ts.hbs")));
        assert!(!copier.exists(&TemplatePath::new(["deploy", "vercel"]), Selection::Tree));
    }

    #[test]
    fn renders_templates_and_copies_other_files() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "base/package.json.hbs", r#"{"name":"{{projectName}}"}"#);
        write(templates.path(), "base/_gitignore", "node_modules\n");
        write(templates.path(), "base/src/raw.ts", "const x = {{y}};\n");

        let out = TempDir::new().unwrap();
        let copier = LocalTemplateCopier::new(templates.path());
        let overlay = Overlay::tree(Phase::Base, TemplatePath::new(["base"]), AppDir::Root);
        let stats = copier.render(&overlay, out.path(), &config()).unwrap();

        assert_eq!(stats.written, 3);
        assert_eq!(
            fs::read_to_string(out.path().join("package.json")).unwrap(),
            r#"{"name":"acme"}"#
        );
        assert!(out.path().join(".gitignore").is_file());
        assert_eq!(
            fs::read_to_string(out.path().join("src/raw.ts")).unwrap(),
            "const x = {{y}};\n"
        );
    }

    #[test]
    fn later_overlay_overwrites() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "a/index.ts", "first");
        write(templates.path(), "b/index.ts", "second");
        let out = TempDir::new().unwrap();
        let copier = LocalTemplateCopier::new(templates.path());

        for source in ["a", "b"] {
            let overlay = Overlay::tree(Phase::Base, TemplatePath::new([source]), AppDir::Root);
            copier.render(&overlay, out.path(), &config()).unwrap();
        }
        assert_eq!(fs::read_to_string(out.path().join("index.ts")).unwrap(), "second");
    }

    #[test]
    fn preserving_overlay_keeps_existing_files() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "examples/todo/index.ts", "example");
        write(templates.path(), "examples/todo/todo.ts", "todo");
        let out = TempDir::new().unwrap();
        write(out.path(), "index.ts", "original");

        let copier = LocalTemplateCopier::new(templates.path());
        let overlay = Overlay::tree(
            Phase::Examples,
            TemplatePath::new(["examples", "todo"]),
            AppDir::Root,
        )
        .preserving();
        let stats = copier.render(&overlay, out.path(), &config()).unwrap();

        assert_eq!(stats, RenderStats { written: 1, preserved: 1 });
        assert_eq!(fs::read_to_string(out.path().join("index.ts")).unwrap(), "original");
        assert_eq!(fs::read_to_string(out.path().join("todo.ts")).unwrap(), "todo");
    }

    #[test]
    fn single_file_overlay_copies_only_that_file() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "deploy/alchemy/alchemy.run.ts.hbs", "// {{projectName}}");
        write(templates.path(), "deploy/alchemy/env.d.ts.hbs", "");
        let out = TempDir::new().unwrap();

        let copier = LocalTemplateCopier::new(templates.path());
        let overlay = Overlay::file(
            Phase::Deploy,
            TemplatePath::new(["deploy", "alchemy"]),
            "alchemy.run.ts.hbs",
            AppDir::Root,
        );
        let stats = copier.render(&overlay, out.path(), &config()).unwrap();

        assert_eq!(stats.written, 1);
        assert_eq!(
            fs::read_to_string(out.path().join("alchemy.run.ts")).unwrap(),
            "// acme"
        );
        assert!(!out.path().join("env.d.ts").exists());
    }

    #[test]
    fn broken_template_is_a_rendering_error() {
        let templates = TempDir::new().unwrap();
        write(templates.path(), "base/index.ts.hbs", "{{#each}}");
        let out = TempDir::new().unwrap();

        let copier = LocalTemplateCopier::new(templates.path());
        let overlay = Overlay::tree(Phase::Base, TemplatePath::new(["base"]), AppDir::Root);
        let err = copier.render(&overlay, out.path(), &config()).unwrap_err();
        assert!(err.to_string().contains("index.ts.hbs"));
    }
}
