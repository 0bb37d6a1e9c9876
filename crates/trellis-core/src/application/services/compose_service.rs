//! Compose Service - applies an overlay plan to a project directory.
//!
//! Sequencing only: the plan is applied strictly in order, one overlay at a
//! time, because later overlays may overwrite files from earlier ones.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, RenderStats, TemplateCopier},
    },
    domain::{AppDir, Overlay, OverlayPlan, ValidatedConfig},
    error::TrellisResult,
};

/// What to do when a planned overlay source is absent from the template tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingTemplatePolicy {
    /// Treat the overlay as contributing nothing.
    #[default]
    Skip,
    /// Abort with `ApplicationError::TemplateMissing`.
    Fail,
}

/// Summary of one composition run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionReport {
    /// Sources that were applied, in order.
    pub applied: Vec<String>,
    /// Sources absent from the template tree.
    pub skipped: Vec<String>,
    pub files_written: usize,
    pub files_preserved: usize,
}

pub struct ComposeService {
    copier: Box<dyn TemplateCopier>,
    filesystem: Box<dyn Filesystem>,
    missing: MissingTemplatePolicy,
}

impl ComposeService {
    pub fn new(copier: Box<dyn TemplateCopier>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            copier,
            filesystem,
            missing: MissingTemplatePolicy::default(),
        }
    }

    pub fn with_missing_policy(mut self, policy: MissingTemplatePolicy) -> Self {
        self.missing = policy;
        self
    }

    pub fn missing_policy(&self) -> MissingTemplatePolicy {
        self.missing
    }

    /// Apply every overlay of `plan` under `project_dir`.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name,
            overlays = plan.len(),
            project_dir = %project_dir.display()
        )
    )]
    pub fn compose(
        &self,
        config: &ValidatedConfig,
        plan: &OverlayPlan,
        project_dir: &Path,
    ) -> TrellisResult<CompositionReport> {
        self.filesystem.create_dir_all(project_dir)?;

        let mut report = CompositionReport::default();
        let mut totals = RenderStats::default();
        let mut created: HashSet<AppDir> = HashSet::from([AppDir::Root]);

        for overlay in plan {
            let source = overlay.source_display();

            if !self.copier.exists(&overlay.source, overlay.selection) {
                match self.missing {
                    MissingTemplatePolicy::Skip => {
                        debug!(source = %source, phase = %overlay.phase, "Template source absent, skipping");
                        report.skipped.push(source);
                        continue;
                    }
                    MissingTemplatePolicy::Fail => {
                        return Err(ApplicationError::TemplateMissing {
                            source_path: source,
                        }
                        .into());
                    }
                }
            }

            let destination = app_path(project_dir, overlay.destination);
            if created.insert(overlay.destination) {
                self.filesystem.create_dir_all(&destination)?;
            }

            totals += self.apply(overlay, &destination, config)?;
            report.applied.push(source);
        }

        report.files_written = totals.written;
        report.files_preserved = totals.preserved;

        info!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            written = report.files_written,
            preserved = report.files_preserved,
            "Composition finished"
        );
        Ok(report)
    }

    fn apply(
        &self,
        overlay: &Overlay,
        destination: &Path,
        config: &ValidatedConfig,
    ) -> TrellisResult<RenderStats> {
        debug!(
            phase = %overlay.phase,
            source = %overlay.source_display(),
            destination = %overlay.destination,
            policy = overlay.policy.as_str(),
            "Applying overlay"
        );
        self.copier.render(overlay, destination, config.config())
    }
}

/// Absolute directory of an app inside the project.
pub fn app_path(project_dir: &Path, app: AppDir) -> PathBuf {
    match app.relative_path() {
        "" => project_dir.to_path_buf(),
        rel => rel.split('/').fold(project_dir.to_path_buf(), |p, s| p.join(s)),
    }
}
