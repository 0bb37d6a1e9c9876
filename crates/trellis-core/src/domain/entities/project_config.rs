//! The `ProjectConfig` record and its merging builder.
//!
//! A `ProjectConfig` is the single source of truth for one run: every enum
//! field is resolved to a concrete value (never "unset"). It is assembled
//! once by [`ProjectConfigBuilder::build`], which fills only the fields the
//! caller left empty. The builder never overrides an explicit choice, so an
//! illegal combination survives until the validator rejects it.
//!
//! The serialised form (camelCase keys) is the context templates render
//! against, e.g. `{{#if (eq backend "hono")}}`.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{
        Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, PackageManager,
        Runtime, ServerDeploy, WebDeploy,
    },
};

/// Project name used when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "my-trellis-app";

/// A fully-merged project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub frontend: Vec<Frontend>,
    pub backend: Backend,
    pub database: Database,
    pub orm: Orm,
    pub auth: Auth,
    pub api: Api,
    pub runtime: Runtime,
    pub db_setup: DbSetup,
    pub web_deploy: WebDeploy,
    pub server_deploy: ServerDeploy,
    pub addons: Vec<Addon>,
    pub examples: Vec<Example>,
    pub package_manager: PackageManager,
}

impl ProjectConfig {
    /// Start assembling a configuration.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    /// Every selected web frontend, in selection order.
    pub fn web_frontends(&self) -> impl Iterator<Item = Frontend> + '_ {
        self.frontend.iter().copied().filter(|f| f.is_web())
    }

    /// Every selected native frontend, in selection order.
    pub fn native_frontends(&self) -> impl Iterator<Item = Frontend> + '_ {
        self.frontend.iter().copied().filter(|f| f.is_native())
    }

    /// The web frontend, if one is selected.
    pub fn web_frontend(&self) -> Option<Frontend> {
        self.web_frontends().next()
    }

    /// The native frontend, if one is selected.
    pub fn native_frontend(&self) -> Option<Frontend> {
        self.native_frontends().next()
    }

    /// The React web framework, if the web frontend is React-based.
    pub fn react_framework(&self) -> Option<Frontend> {
        self.web_frontends().find(|f| f.is_react())
    }

    pub fn has_frontend(&self, frontend: Frontend) -> bool {
        self.frontend.contains(&frontend)
    }

    pub fn has_web(&self) -> bool {
        self.web_frontend().is_some()
    }

    pub fn has_native(&self) -> bool {
        self.native_frontend().is_some()
    }

    /// Whether an `apps/server` app is generated.
    pub fn has_server_app(&self) -> bool {
        self.backend.has_server_app()
    }

    /// Whether both an ORM and a database are selected.
    pub fn has_data_layer(&self) -> bool {
        self.orm != Orm::None && self.database != Database::None
    }
}

/// Collects selections from any source, then merges in defaults.
///
/// Set fields are kept as given; unset fields get a default that may depend
/// on other fields (a Convex project defaults its database to `none`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfigBuilder {
    project_name: Option<String>,
    frontend: Option<Vec<Frontend>>,
    backend: Option<Backend>,
    database: Option<Database>,
    orm: Option<Orm>,
    auth: Option<Auth>,
    api: Option<Api>,
    runtime: Option<Runtime>,
    db_setup: Option<DbSetup>,
    web_deploy: Option<WebDeploy>,
    server_deploy: Option<ServerDeploy>,
    addons: Option<Vec<Addon>>,
    examples: Option<Vec<Example>>,
    package_manager: Option<PackageManager>,
}

impl ProjectConfigBuilder {
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Set the frontends. Duplicates are dropped, order is kept.
    pub fn frontend(mut self, frontend: impl IntoIterator<Item = Frontend>) -> Self {
        self.frontend = Some(dedup(frontend));
        self
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn orm(mut self, orm: Orm) -> Self {
        self.orm = Some(orm);
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn api(mut self, api: Api) -> Self {
        self.api = Some(api);
        self
    }

    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn db_setup(mut self, db_setup: DbSetup) -> Self {
        self.db_setup = Some(db_setup);
        self
    }

    pub fn web_deploy(mut self, web_deploy: WebDeploy) -> Self {
        self.web_deploy = Some(web_deploy);
        self
    }

    pub fn server_deploy(mut self, server_deploy: ServerDeploy) -> Self {
        self.server_deploy = Some(server_deploy);
        self
    }

    pub fn addons(mut self, addons: impl IntoIterator<Item = Addon>) -> Self {
        self.addons = Some(dedup(addons));
        self
    }

    pub fn examples(mut self, examples: impl IntoIterator<Item = Example>) -> Self {
        self.examples = Some(dedup(examples));
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = Some(package_manager);
        self
    }

    /// Fill every field still unset from `fallback`.
    ///
    /// Used to layer flags (self) over config-file defaults (fallback).
    pub fn or(self, fallback: ProjectConfigBuilder) -> Self {
        Self {
            project_name: self.project_name.or(fallback.project_name),
            frontend: self.frontend.or(fallback.frontend),
            backend: self.backend.or(fallback.backend),
            database: self.database.or(fallback.database),
            orm: self.orm.or(fallback.orm),
            auth: self.auth.or(fallback.auth),
            api: self.api.or(fallback.api),
            runtime: self.runtime.or(fallback.runtime),
            db_setup: self.db_setup.or(fallback.db_setup),
            web_deploy: self.web_deploy.or(fallback.web_deploy),
            server_deploy: self.server_deploy.or(fallback.server_deploy),
            addons: self.addons.or(fallback.addons),
            examples: self.examples.or(fallback.examples),
            package_manager: self.package_manager.or(fallback.package_manager),
        }
    }

    /// Merge defaults into every unset field and produce the configuration.
    ///
    /// Fails only on an unusable project name; compatibility is the
    /// validator's job.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let project_name = self
            .project_name
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
        validate_project_name(&project_name)?;

        let frontend = self.frontend.unwrap_or_else(|| vec![Frontend::TanstackRouter]);
        let backend = self.backend.unwrap_or(Backend::Hono);
        let serverless = !backend.has_server_app();

        let runtime = self
            .runtime
            .unwrap_or(if serverless { Runtime::None } else { Runtime::Bun });
        let database = self.database.unwrap_or(if serverless {
            Database::None
        } else {
            Database::Sqlite
        });
        let orm = self.orm.unwrap_or(match database {
            Database::None => Orm::None,
            Database::Mongodb => Orm::Prisma,
            _ => Orm::Drizzle,
        });
        let auth = self.auth.unwrap_or(if serverless {
            Auth::None
        } else {
            Auth::BetterAuth
        });
        let api = self.api.unwrap_or_else(|| {
            if serverless {
                Api::None
            } else if frontend
                .iter()
                .any(|f| matches!(f, Frontend::Nuxt | Frontend::Svelte | Frontend::Solid))
            {
                Api::Orpc
            } else {
                Api::Trpc
            }
        });

        Ok(ProjectConfig {
            project_name,
            frontend,
            backend,
            database,
            orm,
            auth,
            api,
            runtime,
            db_setup: self.db_setup.unwrap_or(DbSetup::None),
            web_deploy: self.web_deploy.unwrap_or(WebDeploy::None),
            server_deploy: self.server_deploy.unwrap_or(ServerDeploy::None),
            addons: self.addons.unwrap_or_else(|| vec![Addon::Turborepo]),
            examples: self.examples.unwrap_or_default(),
            package_manager: self.package_manager.unwrap_or_default(),
        })
    }
}

fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// The project name becomes a directory and an npm package name.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let reason = if name.is_empty() {
        Some("name cannot be empty")
    } else if name.len() > 214 {
        Some("name cannot be longer than 214 characters")
    } else if name.starts_with('.') || name.starts_with('_') {
        Some("name cannot start with '.' or '_'")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | '~'))
    {
        Some("name may only contain lowercase letters, digits, '-', '_', '.', and '~'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
