//! Scaffold Service - main application orchestrator.
//!
//! Runs the whole workflow for one project:
//! 1. Validate the configuration (fail before any filesystem write)
//! 2. Resolve the overlay plan
//! 3. Compose the plan into the project directory
//! 4. Run provider setup steps (`.env` and manifest edits)

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{DependencyAdder, DependencyKind, EnvVariable, EnvWriter},
        services::compose_service::{ComposeService, CompositionReport, app_path},
    },
    domain::{
        AppDir, DbSetup, OverlayPlan, Orm, ProjectConfig, ServerDeploy, ValidatedConfig,
        Validator, resolve,
    },
    error::TrellisResult,
};

/// A validated configuration and its overlay plan, before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedProject {
    pub config: ValidatedConfig,
    pub plan: OverlayPlan,
}

/// Outcome of a completed scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub config: ValidatedConfig,
    pub composition: CompositionReport,
}

pub struct ScaffoldService {
    composer: ComposeService,
    env: Box<dyn EnvWriter>,
    dependencies: Box<dyn DependencyAdder>,
}

impl ScaffoldService {
    pub fn new(
        composer: ComposeService,
        env: Box<dyn EnvWriter>,
        dependencies: Box<dyn DependencyAdder>,
    ) -> Self {
        Self {
            composer,
            env,
            dependencies,
        }
    }

    /// Validate and resolve without touching the filesystem.
    pub fn plan(config: ProjectConfig) -> TrellisResult<PlannedProject> {
        let config = Validator::validate(config)?;
        let plan = resolve(&config);
        Ok(PlannedProject { config, plan })
    }

    /// Scaffold a new project into `project_dir`.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name,
            project_dir = %project_dir.display()
        )
    )]
    pub fn scaffold(
        &self,
        config: ProjectConfig,
        project_dir: &Path,
    ) -> TrellisResult<ScaffoldReport> {
        let PlannedProject { config, plan } = Self::plan(config)?;
        info!(overlays = plan.len(), "Configuration validated");

        let composition = self.composer.compose(&config, &plan, project_dir)?;
        self.setup_providers(&config, project_dir)?;

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            config,
            composition,
        })
    }

    fn setup_providers(&self, config: &ValidatedConfig, project_dir: &Path) -> TrellisResult<()> {
        if config.db_setup == DbSetup::D1 {
            self.setup_d1(config, project_dir)?;
        }
        Ok(())
    }

    /// Cloudflare D1: credentials placeholders and the Prisma D1 adapter.
    fn setup_d1(&self, config: &ValidatedConfig, project_dir: &Path) -> TrellisResult<()> {
        let server_dir = app_path(project_dir, AppDir::Server);
        let env_file = server_dir.join(".env");

        if config.server_deploy == ServerDeploy::Wrangler {
            self.add_env_best_effort(
                &env_file,
                &[
                    EnvVariable::new("CLOUDFLARE_ACCOUNT_ID", ""),
                    EnvVariable::new("CLOUDFLARE_DATABASE_ID", ""),
                    EnvVariable::new("CLOUDFLARE_D1_TOKEN", ""),
                ],
            );
        }

        let deploys_server = matches!(
            config.server_deploy,
            ServerDeploy::Wrangler | ServerDeploy::Alchemy
        );
        if deploys_server && config.orm == Orm::Prisma {
            self.add_env_best_effort(
                &env_file,
                &[EnvVariable::new("DATABASE_URL", "file:./local.db")],
            );
            self.dependencies.add_dependencies(
                &server_dir,
                &["@prisma/adapter-d1".to_string()],
                DependencyKind::Runtime,
            )?;
        }
        Ok(())
    }

    /// `.env` edits never fail the scaffold.
    fn add_env_best_effort(&self, env_file: &Path, variables: &[EnvVariable]) {
        if let Err(e) = self.env.add_variables(env_file, variables) {
            warn!(path = %env_file.display(), error = %e, "Could not update .env file");
        }
    }
}
