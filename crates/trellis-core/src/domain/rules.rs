//! Compatibility rule set.
//!
//! # Design
//!
//! Every constraint between choices is one [`Rule`] entry in [`RULES`]: an
//! id, a one-line description, and a pure check over a [`ProjectConfig`]
//! returning the violation message on failure. The table order is the
//! evaluation order, so the first violation reported for a given
//! configuration is always the same one.
//!
//! The predicates behind the checks are also exported on their own
//! (`allowed_apis_for_frontends`, `is_example_ai_allowed`, ...) so callers
//! can filter the choices they offer before a configuration exists.
//!
//! # Adding a Rule
//!
//! 1. Add a variant to [`RuleId`] with its spelling and description
//! 2. Write a `fn(&ProjectConfig) -> Result<(), String>` check
//! 3. Append one [`Rule`] entry to [`RULES`] at the position it should run

use std::fmt;

use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, Runtime, ServerDeploy,
    WebDeploy,
};

// ── Rule identifiers ─────────────────────────────────────────────────────────

/// Stable identifier of one compatibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    SingleWebAndNative,
    FrontendAllowedWithBackend,
    ApiFrontendCompatible,
    WorkersRuntimeCompatible,
    DatabaseRequiresBackend,
    OrmDatabaseCompatible,
    DbSetupCompatible,
    WebDeployRequiresWebFrontend,
    ServerDeployRequiresBackend,
    AddonCompatible,
    ExampleCompatible,
}

impl RuleId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleWebAndNative => "single-web-and-native",
            Self::FrontendAllowedWithBackend => "frontend-allowed-with-backend",
            Self::ApiFrontendCompatible => "api-frontend-compatible",
            Self::WorkersRuntimeCompatible => "workers-runtime-compatible",
            Self::DatabaseRequiresBackend => "database-requires-backend",
            Self::OrmDatabaseCompatible => "orm-database-compatible",
            Self::DbSetupCompatible => "db-setup-compatible",
            Self::WebDeployRequiresWebFrontend => "web-deploy-requires-web-frontend",
            Self::ServerDeployRequiresBackend => "server-deploy-requires-backend",
            Self::AddonCompatible => "addon-compatible",
            Self::ExampleCompatible => "example-compatible",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::SingleWebAndNative => "at most one web and one native frontend",
            Self::FrontendAllowedWithBackend => "the backend supports the chosen frontend",
            Self::ApiFrontendCompatible => "the API layer supports the chosen frontend",
            Self::WorkersRuntimeCompatible => {
                "the Workers runtime needs Hono and a serverless database"
            }
            Self::DatabaseRequiresBackend => "a database needs a backend",
            Self::OrmDatabaseCompatible => "the ORM supports the chosen database",
            Self::DbSetupCompatible => "the database setup provider supports the database",
            Self::WebDeployRequiresWebFrontend => "web deployment needs a web frontend",
            Self::ServerDeployRequiresBackend => "server deployment needs a backend",
            Self::AddonCompatible => "each addon supports the chosen frontend",
            Self::ExampleCompatible => "each example supports the chosen stack",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rule table ───────────────────────────────────────────────────────────────

/// Outcome of one rule check: the violation message on failure.
pub type RuleCheck = fn(&ProjectConfig) -> Result<(), String>;

/// One compatibility constraint.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub check: RuleCheck,
}

/// Every rule, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        id: RuleId::SingleWebAndNative,
        check: single_web_and_native,
    },
    Rule {
        id: RuleId::FrontendAllowedWithBackend,
        check: frontend_allowed_with_backend,
    },
    Rule {
        id: RuleId::ApiFrontendCompatible,
        check: api_frontend_compatible,
    },
    Rule {
        id: RuleId::WorkersRuntimeCompatible,
        check: workers_runtime_compatible,
    },
    Rule {
        id: RuleId::DatabaseRequiresBackend,
        check: database_requires_backend,
    },
    Rule {
        id: RuleId::OrmDatabaseCompatible,
        check: orm_database_compatible,
    },
    Rule {
        id: RuleId::DbSetupCompatible,
        check: db_setup_compatible,
    },
    Rule {
        id: RuleId::WebDeployRequiresWebFrontend,
        check: web_deploy_requires_web_frontend,
    },
    Rule {
        id: RuleId::ServerDeployRequiresBackend,
        check: server_deploy_requires_backend,
    },
    Rule {
        id: RuleId::AddonCompatible,
        check: addon_compatible,
    },
    Rule {
        id: RuleId::ExampleCompatible,
        check: example_compatible,
    },
];

// ── Addon registry ───────────────────────────────────────────────────────────

/// Frontend requirements of one addon.
#[derive(Debug, Clone, Copy)]
pub struct AddonDef {
    pub addon: Addon,

    /// Frontends the addon works with. Empty means no frontend dependency.
    pub frontends: &'static [Frontend],
}

pub static ADDON_REGISTRY: &[AddonDef] = &[
    AddonDef {
        addon: Addon::Pwa,
        frontends: &[
            Frontend::TanstackRouter,
            Frontend::ReactRouter,
            Frontend::Solid,
            Frontend::Next,
        ],
    },
    AddonDef {
        addon: Addon::Tauri,
        frontends: &[
            Frontend::TanstackRouter,
            Frontend::ReactRouter,
            Frontend::Nuxt,
            Frontend::Svelte,
            Frontend::Solid,
            Frontend::Next,
        ],
    },
    AddonDef {
        addon: Addon::Starlight,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Biome,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Husky,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Ultracite,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Turborepo,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Fumadocs,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Oxlint,
        frontends: &[],
    },
    AddonDef {
        addon: Addon::Ruler,
        frontends: &[],
    },
];

pub fn find_addon(addon: Addon) -> Option<&'static AddonDef> {
    ADDON_REGISTRY.iter().find(|d| d.addon == addon)
}

/// Frontends an addon works with; empty when it has no frontend dependency.
pub fn compatible_frontends_for_addon(addon: Addon) -> &'static [Frontend] {
    find_addon(addon).map(|d| d.frontends).unwrap_or(&[])
}

/// Whether `addon` accepts the frontend set.
///
/// An addon with an allow-list needs at least one listed frontend.
pub fn is_addon_allowed(addon: Addon, frontends: &[Frontend]) -> bool {
    let allowed = compatible_frontends_for_addon(addon);
    allowed.is_empty() || frontends.iter().any(|f| allowed.contains(f))
}

// ── Standalone predicates ────────────────────────────────────────────────────

const NON_REACT_WEB: [Frontend; 3] = [Frontend::Nuxt, Frontend::Svelte, Frontend::Solid];

fn first_non_react_web(frontends: &[Frontend]) -> Option<Frontend> {
    NON_REACT_WEB.into_iter().find(|f| frontends.contains(f))
}

/// API layers usable with the frontend set. tRPC clients are React-only.
pub fn allowed_apis_for_frontends(frontends: &[Frontend]) -> &'static [Api] {
    if first_non_react_web(frontends).is_some() {
        &[Api::Orpc, Api::None]
    } else {
        &[Api::Trpc, Api::Orpc, Api::None]
    }
}

pub fn is_frontend_allowed_with_backend(frontend: Frontend, backend: Backend, auth: Auth) -> bool {
    if backend == Backend::Convex && frontend == Frontend::Solid {
        return false;
    }
    if backend == Backend::Convex && auth == Auth::Clerk {
        return !NON_REACT_WEB.contains(&frontend);
    }
    true
}

/// The todo example persists data, so a real server needs a database.
pub fn is_example_todo_allowed(backend: Backend, database: Database) -> bool {
    !(backend.has_server_app() && database == Database::None)
}

pub fn is_example_ai_allowed(frontends: &[Frontend]) -> bool {
    !frontends.contains(&Frontend::Solid)
}

pub fn is_example_monetized_ai_allowed(frontends: &[Frontend]) -> bool {
    first_non_react_web(frontends).is_none()
}

// ── Rule checks ──────────────────────────────────────────────────────────────

/// Web frameworks in the order the error message offers them.
const WEB_FRAMEWORK_CHOICES: [Frontend; 7] = [
    Frontend::TanstackRouter,
    Frontend::TanstackStart,
    Frontend::ReactRouter,
    Frontend::Next,
    Frontend::Nuxt,
    Frontend::Svelte,
    Frontend::Solid,
];

pub fn single_web_and_native(config: &ProjectConfig) -> Result<(), String> {
    if config.web_frontends().count() > 1 {
        let choices: Vec<_> = WEB_FRAMEWORK_CHOICES.iter().map(|f| f.as_str()).collect();
        return Err(format!(
            "Cannot select multiple web frameworks. Choose only one of: {}",
            choices.join(", ")
        ));
    }
    if config.native_frontends().count() > 1 {
        let choices: Vec<_> = Frontend::ALL
            .iter()
            .filter(|f| f.is_native())
            .map(|f| f.as_str())
            .collect();
        return Err(format!(
            "Cannot select multiple native frameworks. Choose only one of: {}",
            choices.join(", ")
        ));
    }
    Ok(())
}

pub fn frontend_allowed_with_backend(config: &ProjectConfig) -> Result<(), String> {
    for &frontend in &config.frontend {
        if is_frontend_allowed_with_backend(frontend, config.backend, config.auth) {
            continue;
        }
        if frontend == Frontend::Solid && config.auth != Auth::Clerk {
            return Err(
                "The Convex backend (--backend convex) is not compatible with the 'solid' \
                 frontend. Please choose a different frontend or backend."
                    .into(),
            );
        }
        return Err(format!(
            "Clerk authentication (--auth clerk) with the Convex backend is not supported \
             with '{frontend}' frontend. Please use a React frontend, '--auth better-auth', \
             or '--auth none'."
        ));
    }
    Ok(())
}

pub fn api_frontend_compatible(config: &ProjectConfig) -> Result<(), String> {
    if config.api != Api::Trpc {
        return Ok(());
    }
    match first_non_react_web(&config.frontend) {
        Some(frontend) => Err(format!(
            "tRPC API is not supported with '{frontend}' frontend. Please use --api orpc or \
             --api none or remove '{frontend}' from --frontend."
        )),
        None => Ok(()),
    }
}

pub fn workers_runtime_compatible(config: &ProjectConfig) -> Result<(), String> {
    if config.runtime != Runtime::Workers {
        return Ok(());
    }
    if config.backend != Backend::Hono {
        return Err(format!(
            "Cloudflare Workers runtime (--runtime workers) is only supported with Hono backend \
             (--backend hono). Current backend: {}. Please use '--backend hono' or choose a \
             different runtime.",
            config.backend
        ));
    }
    if config.database == Database::Mongodb {
        return Err(
            "Cloudflare Workers runtime (--runtime workers) is not compatible with MongoDB \
             database. MongoDB requires Prisma or Mongoose ORM, but Workers runtime only \
             supports Drizzle or Prisma ORM. Please use a different database or runtime."
                .into(),
        );
    }
    if config.db_setup == DbSetup::Docker {
        return Err(
            "Cloudflare Workers runtime (--runtime workers) is not compatible with Docker \
             setup. Workers runtime uses serverless databases (D1) and doesn't support local \
             Docker containers. Please use '--db-setup d1' for SQLite or choose a different \
             runtime."
                .into(),
        );
    }
    Ok(())
}

pub fn database_requires_backend(config: &ProjectConfig) -> Result<(), String> {
    if config.backend == Backend::None && config.database != Database::None {
        return Err(format!(
            "Database '{}' requires a backend. Please select a backend or set '--database none'.",
            config.database
        ));
    }
    Ok(())
}

pub fn orm_database_compatible(config: &ProjectConfig) -> Result<(), String> {
    let (orm, database) = (config.orm, config.database);
    if orm != Orm::None && database == Database::None {
        return Err(format!(
            "ORM '{orm}' requires a database. Please select a database or set '--orm none'."
        ));
    }
    if database != Database::None && orm == Orm::None && config.backend != Backend::Convex {
        return Err(format!(
            "Database '{database}' requires an ORM. Please select an ORM with '--orm' or set \
             '--database none'."
        ));
    }
    if orm == Orm::Mongoose && database != Database::Mongodb {
        return Err(format!(
            "Mongoose ORM only works with MongoDB. Please use '--database mongodb' or a \
             different ORM. Current database: {database}."
        ));
    }
    if orm == Orm::Drizzle && database == Database::Mongodb {
        return Err(
            "Drizzle ORM does not support MongoDB. Please use '--orm prisma' or '--orm mongoose'."
                .into(),
        );
    }
    Ok(())
}

pub fn db_setup_compatible(config: &ProjectConfig) -> Result<(), String> {
    let (setup, database) = (config.db_setup, config.database);
    if setup == DbSetup::None {
        return Ok(());
    }
    if database == Database::None {
        return Err(format!(
            "Database setup '--db-setup {setup}' requires a database. Please select a database \
             or set '--db-setup none'."
        ));
    }
    if let Some(required) = setup.required_database() {
        if required != database {
            return Err(format!(
                "Database setup '--db-setup {setup}' requires '--database {required}'. Current \
                 database: {database}."
            ));
        }
    }
    if setup == DbSetup::Docker && database == Database::Sqlite {
        return Err(
            "Docker setup (--db-setup docker) is not available for SQLite. Please use \
             '--db-setup turso' or '--db-setup d1', or choose a different database."
                .into(),
        );
    }
    Ok(())
}

pub fn web_deploy_requires_web_frontend(config: &ProjectConfig) -> Result<(), String> {
    if config.web_deploy != WebDeploy::None && !config.has_web() {
        return Err(
            "'--web-deploy' requires a web frontend. Please select a web frontend or set \
             '--web-deploy none'."
                .into(),
        );
    }
    Ok(())
}

pub fn server_deploy_requires_backend(config: &ProjectConfig) -> Result<(), String> {
    if config.server_deploy != ServerDeploy::None && config.backend == Backend::None {
        return Err(
            "'--server-deploy' requires a backend. Please select a backend or set \
             '--server-deploy none'."
                .into(),
        );
    }
    Ok(())
}

pub fn addon_compatible(config: &ProjectConfig) -> Result<(), String> {
    for &addon in &config.addons {
        if is_addon_allowed(addon, &config.frontend) {
            continue;
        }
        let allowed: Vec<_> = compatible_frontends_for_addon(addon)
            .iter()
            .map(|f| f.as_str())
            .collect();
        return Err(format!(
            "Incompatible addon/frontend combination: {addon} addon requires one of these \
             frontends: {}",
            allowed.join(", ")
        ));
    }
    Ok(())
}

pub fn example_compatible(config: &ProjectConfig) -> Result<(), String> {
    for &example in &config.examples {
        match example {
            Example::Todo if !is_example_todo_allowed(config.backend, config.database) => {
                return Err(
                    "The 'todo' example requires a database if a backend (other than Convex) \
                     is present. Cannot use --examples todo when database is 'none' and a \
                     backend is selected."
                        .into(),
                );
            }
            Example::Ai if !is_example_ai_allowed(&config.frontend) => {
                return Err(
                    "The 'ai' and 'monetized-ai' examples are not compatible with the Solid \
                     frontend."
                        .into(),
                );
            }
            Example::MonetizedAi if !is_example_monetized_ai_allowed(&config.frontend) => {
                let frontend = first_non_react_web(&config.frontend)
                    .map(|f| f.as_str())
                    .unwrap_or("solid");
                return Err(format!(
                    "The 'monetized-ai' example is not compatible with the '{frontend}' \
                     frontend. Please use a React frontend or remove 'monetized-ai' from \
                     --examples."
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the rule table and addon registry are internally consistent.
///
/// Panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for (i, rule) in RULES.iter().enumerate() {
        assert!(
            RULES[..i].iter().all(|r| r.id != rule.id),
            "Rule {} is registered twice",
            rule.id
        );
    }
    for addon in Addon::ALL {
        assert!(
            find_addon(*addon).is_some(),
            "Addon {addon} has no registry entry"
        );
    }
    for def in ADDON_REGISTRY {
        assert!(
            def.frontends.iter().all(|f| f.is_web()),
            "Addon {} lists a native frontend",
            def.addon
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> crate::domain::entities::ProjectConfigBuilder {
        ProjectConfig::builder()
    }

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn table_runs_in_documented_order() {
        let ids: Vec<_> = RULES.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "single-web-and-native",
                "frontend-allowed-with-backend",
                "api-frontend-compatible",
                "workers-runtime-compatible",
                "database-requires-backend",
                "orm-database-compatible",
                "db-setup-compatible",
                "web-deploy-requires-web-frontend",
                "server-deploy-requires-backend",
                "addon-compatible",
                "example-compatible",
            ]
        );
    }

    #[test]
    fn defaults_pass_every_rule() {
        let config = config().build().unwrap();
        for rule in RULES {
            assert_eq!((rule.check)(&config), Ok(()), "rule {}", rule.id);
        }
    }

    #[test]
    fn two_web_frontends_fail() {
        let config = config()
            .frontend([Frontend::Next, Frontend::Nuxt])
            .api(Api::None)
            .build()
            .unwrap();
        let err = single_web_and_native(&config).unwrap_err();
        assert_eq!(
            err,
            "Cannot select multiple web frameworks. Choose only one of: tanstack-router, \
             tanstack-start, react-router, next, nuxt, svelte, solid"
        );
    }

    #[test]
    fn web_choices_cover_every_web_frontend() {
        let web: Vec<_> = Frontend::ALL.iter().copied().filter(|f| f.is_web()).collect();
        assert_eq!(WEB_FRAMEWORK_CHOICES.len(), web.len());
        assert!(web.iter().all(|f| WEB_FRAMEWORK_CHOICES.contains(f)));
    }

    #[test]
    fn one_web_and_one_native_pass() {
        let config = config()
            .frontend([Frontend::Next, Frontend::NativeUnistyles])
            .build()
            .unwrap();
        assert!(single_web_and_native(&config).is_ok());
    }

    #[test]
    fn two_native_frontends_fail() {
        let config = config()
            .frontend([Frontend::NativeNativewind, Frontend::NativeUnistyles])
            .build()
            .unwrap();
        let err = single_web_and_native(&config).unwrap_err();
        assert_eq!(
            err,
            "Cannot select multiple native frameworks. Choose only one of: native-nativewind, \
             native-unistyles"
        );
    }

    #[test]
    fn trpc_rejects_each_non_react_frontend() {
        for fw in NON_REACT_WEB {
            let config = config().frontend([fw]).api(Api::Trpc).build().unwrap();
            let err = api_frontend_compatible(&config).unwrap_err();
            assert!(err.contains(&format!("remove '{fw}' from --frontend")));
        }
    }

    #[test]
    fn allowed_apis_drop_trpc_for_svelte() {
        assert_eq!(
            allowed_apis_for_frontends(&[Frontend::Svelte]),
            &[Api::Orpc, Api::None]
        );
        assert_eq!(allowed_apis_for_frontends(&[Frontend::Next]).len(), 3);
    }

    #[test]
    fn workers_needs_hono() {
        let config = config()
            .runtime(Runtime::Workers)
            .backend(Backend::Express)
            .build()
            .unwrap();
        let err = workers_runtime_compatible(&config).unwrap_err();
        assert!(err.contains("Current backend: express"));
    }

    #[test]
    fn workers_rejects_mongodb_and_docker() {
        let mongo = config()
            .runtime(Runtime::Workers)
            .database(Database::Mongodb)
            .build()
            .unwrap();
        assert!(workers_runtime_compatible(&mongo).unwrap_err().contains("MongoDB"));

        let docker = config()
            .runtime(Runtime::Workers)
            .database(Database::Postgres)
            .db_setup(DbSetup::Docker)
            .build()
            .unwrap();
        assert!(workers_runtime_compatible(&docker).unwrap_err().contains("Docker"));
    }

    #[test]
    fn workers_with_hono_and_d1_passes() {
        let config = config()
            .runtime(Runtime::Workers)
            .db_setup(DbSetup::D1)
            .build()
            .unwrap();
        assert!(workers_runtime_compatible(&config).is_ok());
        assert!(db_setup_compatible(&config).is_ok());
    }

    #[test]
    fn convex_rejects_solid() {
        assert!(!is_frontend_allowed_with_backend(
            Frontend::Solid,
            Backend::Convex,
            Auth::None
        ));
        let config = config()
            .frontend([Frontend::Solid])
            .backend(Backend::Convex)
            .build()
            .unwrap();
        let err = frontend_allowed_with_backend(&config).unwrap_err();
        assert!(err.contains("'solid'"));
    }

    #[test]
    fn convex_with_clerk_rejects_nuxt_but_allows_react() {
        assert!(!is_frontend_allowed_with_backend(
            Frontend::Nuxt,
            Backend::Convex,
            Auth::Clerk
        ));
        assert!(is_frontend_allowed_with_backend(
            Frontend::Next,
            Backend::Convex,
            Auth::Clerk
        ));
        assert!(is_frontend_allowed_with_backend(
            Frontend::Nuxt,
            Backend::Convex,
            Auth::None
        ));
    }

    #[test]
    fn database_without_backend_fails() {
        let config = config()
            .backend(Backend::None)
            .database(Database::Sqlite)
            .build()
            .unwrap();
        assert!(database_requires_backend(&config).is_err());
    }

    #[test]
    fn orm_and_database_must_agree() {
        let mongoose_pg = config()
            .database(Database::Postgres)
            .orm(Orm::Mongoose)
            .build()
            .unwrap();
        assert!(orm_database_compatible(&mongoose_pg).is_err());

        let drizzle_mongo = config()
            .database(Database::Mongodb)
            .orm(Orm::Drizzle)
            .build()
            .unwrap();
        assert!(orm_database_compatible(&drizzle_mongo).is_err());

        let orm_without_db = config()
            .database(Database::None)
            .orm(Orm::Prisma)
            .build()
            .unwrap();
        assert!(orm_database_compatible(&orm_without_db).is_err());
    }

    #[test]
    fn db_setup_requires_matching_database() {
        let neon_sqlite = config().db_setup(DbSetup::Neon).build().unwrap();
        let err = db_setup_compatible(&neon_sqlite).unwrap_err();
        assert!(err.contains("--database postgres"));

        let docker_sqlite = config().db_setup(DbSetup::Docker).build().unwrap();
        assert!(db_setup_compatible(&docker_sqlite).is_err());

        let docker_pg = config()
            .database(Database::Postgres)
            .db_setup(DbSetup::Docker)
            .build()
            .unwrap();
        assert!(db_setup_compatible(&docker_pg).is_ok());
    }

    #[test]
    fn web_deploy_without_web_frontend_fails() {
        let config = config()
            .frontend([])
            .web_deploy(WebDeploy::Vercel)
            .build()
            .unwrap();
        let err = web_deploy_requires_web_frontend(&config).unwrap_err();
        assert!(err.contains("requires a web frontend"));
    }

    #[test]
    fn web_deploy_with_only_native_fails() {
        let config = config()
            .frontend([Frontend::NativeNativewind])
            .web_deploy(WebDeploy::Wrangler)
            .build()
            .unwrap();
        assert!(web_deploy_requires_web_frontend(&config).is_err());
    }

    #[test]
    fn server_deploy_without_backend_fails() {
        let config = config()
            .backend(Backend::None)
            .server_deploy(ServerDeploy::Wrangler)
            .build()
            .unwrap();
        assert!(
            server_deploy_requires_backend(&config)
                .unwrap_err()
                .contains("requires a backend")
        );
    }

    #[test]
    fn pwa_requires_listed_frontend() {
        assert!(is_addon_allowed(Addon::Pwa, &[Frontend::Next]));
        assert!(!is_addon_allowed(Addon::Pwa, &[Frontend::Svelte]));
        assert!(!is_addon_allowed(Addon::Pwa, &[]));
        assert!(is_addon_allowed(Addon::Biome, &[]));

        let config = config()
            .frontend([Frontend::Nuxt])
            .addons([Addon::Pwa])
            .build()
            .unwrap();
        let err = addon_compatible(&config).unwrap_err();
        assert!(err.starts_with("Incompatible addon/frontend combination: pwa"));
    }

    #[test]
    fn tauri_accepts_svelte() {
        assert!(compatible_frontends_for_addon(Addon::Tauri).contains(&Frontend::Svelte));
        assert!(compatible_frontends_for_addon(Addon::Turborepo).is_empty());
    }

    #[test]
    fn todo_needs_database_with_real_backend() {
        assert!(!is_example_todo_allowed(Backend::Hono, Database::None));
        assert!(is_example_todo_allowed(Backend::Convex, Database::None));
        assert!(is_example_todo_allowed(Backend::None, Database::None));
    }

    #[test]
    fn ai_examples_and_frontends() {
        assert!(!is_example_ai_allowed(&[Frontend::Solid]));
        assert!(is_example_ai_allowed(&[Frontend::Svelte]));
        assert!(!is_example_monetized_ai_allowed(&[Frontend::Svelte]));
        assert!(is_example_monetized_ai_allowed(&[Frontend::Next]));

        let config = config()
            .frontend([Frontend::Nuxt])
            .api(Api::Orpc)
            .examples([Example::MonetizedAi])
            .build()
            .unwrap();
        assert!(example_compatible(&config).unwrap_err().contains("'nuxt'"));
    }
}
