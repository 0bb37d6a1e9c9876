//! Template path resolver.
//!
//! Maps a [`ValidatedConfig`] to the ordered [`OverlayPlan`] the composer
//! applies. Pure: no filesystem access, no hidden state, so the same
//! configuration always yields the same plan.
//!
//! Source paths follow the template tree layout:
//!
//! ```text
//! base/
//! frontend/{react/web-base, react/<fw>, nuxt, svelte, solid, native/...}
//! backend/{server/server-base, server/<backend>, convex/packages/backend}
//! api/<api>/{web/..., native, server/...}
//! db/<orm>/<database>
//! db-setup/docker-compose/<database>
//! auth/<auth>/{server/..., web/..., native/...}
//! addons/<addon>
//! examples/<example>/{server/..., web/..., native/...}
//! extras/
//! deploy/{alchemy, <target>/web/..., <target>/server}
//! ```
//!
//! Whether a source exists on disk is not decided here; the composer skips
//! (or rejects) missing sources.

use crate::domain::{
    entities::{AppDir, Overlay, OverlayPlan, Phase, ProjectConfig, TemplatePath},
    validation::ValidatedConfig,
    value_objects::{
        Addon, Api, Auth, Backend, Database, DbSetup, Frontend, Orm, PackageManager,
        ServerDeploy, WebDeploy,
    },
};

const ALCHEMY_CONFIG: &str = "alchemy.run.ts.hbs";
const ALCHEMY_ENV_TYPES: &str = "env.d.ts.hbs";

/// Compute the overlay plan for a validated configuration.
pub fn resolve(config: &ValidatedConfig) -> OverlayPlan {
    let mut planner = Planner {
        config: config.config(),
        plan: OverlayPlan::new(),
    };

    planner.base();
    planner.frontend();
    planner.backend();
    planner.db_orm();
    planner.auth();
    planner.addons();
    planner.examples();
    planner.extras();
    planner.deploy();

    planner.plan
}

struct Planner<'a> {
    config: &'a ProjectConfig,
    plan: OverlayPlan,
}

impl Planner<'_> {
    fn tree(&mut self, phase: Phase, source: &[&str], destination: AppDir) {
        self.plan.push(Overlay::tree(
            phase,
            TemplatePath::new(source.iter().copied()),
            destination,
        ));
    }

    fn preserving_tree(&mut self, phase: Phase, source: &[&str], destination: AppDir) {
        self.plan.push(
            Overlay::tree(phase, TemplatePath::new(source.iter().copied()), destination)
                .preserving(),
        );
    }

    fn file(&mut self, phase: Phase, dir: &[&str], file: &'static str, destination: AppDir) {
        self.plan.push(Overlay::file(
            phase,
            TemplatePath::new(dir.iter().copied()),
            file,
            destination,
        ));
    }

    /// Client-side API overlays are skipped for Convex, which ships its own client.
    fn client_api(&self) -> Option<Api> {
        match (self.config.api, self.config.backend) {
            (Api::None, _) | (_, Backend::Convex) => None,
            (api, _) => Some(api),
        }
    }

    fn data_layer(&self) -> Option<(Orm, Database)> {
        self.config
            .has_data_layer()
            .then_some((self.config.orm, self.config.database))
    }

    fn base(&mut self) {
        self.tree(Phase::Base, &["base"], AppDir::Root);
    }

    fn frontend(&mut self) {
        const P: Phase = Phase::Frontend;
        let api = self.client_api();

        if let Some(fw) = self.config.web_frontend() {
            let dir = fw.web_dir().unwrap_or_default();
            if fw.is_react() {
                self.tree(P, &["frontend", "react", "web-base"], AppDir::Web);
                self.tree(P, &["frontend", dir], AppDir::Web);
                if let Some(api) = api {
                    self.tree(P, &["api", api.as_str(), "web", "react", "base"], AppDir::Web);
                }
            } else {
                self.tree(P, &["frontend", dir], AppDir::Web);
                if api == Some(Api::Orpc) {
                    self.tree(P, &["api", "orpc", "web", dir], AppDir::Web);
                }
            }
        }

        if let Some(style) = self.native_style() {
            self.tree(P, &["frontend", "native", "native-base"], AppDir::Native);
            self.tree(P, &["frontend", "native", style], AppDir::Native);
            if let Some(api) = api {
                self.tree(P, &["api", api.as_str(), "native"], AppDir::Native);
            }
        }
    }

    fn native_style(&self) -> Option<&'static str> {
        self.config.native_frontend().and_then(Frontend::native_style)
    }

    fn backend(&mut self) {
        const P: Phase = Phase::Backend;
        let backend = self.config.backend;
        match backend {
            Backend::Convex => {
                self.tree(P, &["backend", "convex", "packages", "backend"], AppDir::ConvexBackend)
            }
            Backend::None => {}
            _ => {
                self.tree(P, &["backend", "server", "server-base"], AppDir::Server);
                self.tree(P, &["backend", "server", backend.as_str()], AppDir::Server);
                if self.config.api != Api::None {
                    let api = self.config.api.as_str();
                    self.tree(P, &["api", api, "server", "base"], AppDir::Server);
                    self.tree(P, &["api", api, "server", backend.as_str()], AppDir::Server);
                }
            }
        }
    }

    fn db_orm(&mut self) {
        if self.config.backend != Backend::Convex {
            if let Some((orm, database)) = self.data_layer() {
                self.tree(Phase::DbOrm, &["db", orm.as_str(), database.as_str()], AppDir::Server);
            }
        }
        // Compose file depends on the database alone, not the ORM or backend.
        let database = self.config.database;
        if self.config.db_setup == DbSetup::Docker && database != Database::None {
            self.tree(
                Phase::DbOrm,
                &["db-setup", "docker-compose", database.as_str()],
                AppDir::Server,
            );
        }
    }

    fn auth(&mut self) {
        const P: Phase = Phase::Auth;
        let auth = self.config.auth;
        if auth == Auth::None {
            return;
        }

        if self.config.backend == Backend::Convex && auth == Auth::Clerk {
            self.tree(P, &["auth", "clerk", "convex", "backend"], AppDir::ConvexBackend);
            if let Some(fw) = self.config.react_framework() {
                self.tree(
                    P,
                    &["auth", "clerk", "convex", "web", fw.web_dir().unwrap_or_default()],
                    AppDir::Web,
                );
            }
            if let Some(style) = self.native_style() {
                self.tree(P, &["auth", "clerk", "convex", "native", "base"], AppDir::Native);
                self.tree(P, &["auth", "clerk", "convex", "native", style], AppDir::Native);
            }
            return;
        }

        let auth = auth.as_str();
        if self.config.has_server_app() {
            self.tree(P, &["auth", auth, "server", "base"], AppDir::Server);
            if self.config.backend == Backend::Next {
                self.tree(P, &["auth", auth, "server", "next"], AppDir::Server);
            }
            if let Some((orm, database)) = self.data_layer() {
                self.tree(
                    P,
                    &["auth", auth, "server", "db", orm.as_str(), database.as_str()],
                    AppDir::Server,
                );
            }
        }

        if let Some(fw) = self.config.web_frontend() {
            let dir = fw.web_dir().unwrap_or_default();
            if fw.is_react() {
                self.tree(P, &["auth", auth, "web", "react", "base"], AppDir::Web);
            }
            self.tree(P, &["auth", auth, "web", dir], AppDir::Web);
        }

        if let Some(style) = self.native_style() {
            self.tree(P, &["auth", auth, "native", "native-base"], AppDir::Native);
            self.tree(P, &["auth", auth, "native", style], AppDir::Native);
        }
    }

    fn addons(&mut self) {
        const P: Phase = Phase::Addons;
        let config = self.config;
        for &addon in &config.addons {
            if addon != Addon::Pwa {
                self.tree(P, &["addons", addon.as_str()], AppDir::Root);
                continue;
            }
            let variant = match config.web_frontend() {
                Some(Frontend::Next) => "next",
                Some(Frontend::TanstackRouter | Frontend::ReactRouter | Frontend::Solid) => "vite",
                _ => continue,
            };
            self.tree(P, &["addons", "pwa", "apps", "web", variant], AppDir::Web);
        }
    }

    fn examples(&mut self) {
        const P: Phase = Phase::Examples;
        let config = self.config;
        for &example in &config.examples {
            let ex = example.as_str();

            if self.config.has_server_app() {
                if example.is_ai() && self.config.backend == Backend::Next {
                    self.preserving_tree(P, &["examples", ex, "server", "next"], AppDir::Server);
                }
                if let Some((orm, database)) = self.data_layer() {
                    let orm = orm.as_str();
                    self.preserving_tree(P, &["examples", ex, "server", orm, "base"], AppDir::Server);
                    self.preserving_tree(
                        P,
                        &["examples", ex, "server", orm, database.as_str()],
                        AppDir::Server,
                    );
                }
            }

            if let Some(fw) = self.config.web_frontend() {
                let dir = fw.web_dir().unwrap_or_default();
                if fw.is_react() && example.is_ai() {
                    self.preserving_tree(P, &["examples", ex, "web", "react", "base"], AppDir::Web);
                }
                self.preserving_tree(P, &["examples", ex, "web", dir], AppDir::Web);
            }

            if let Some(style) = self.native_style() {
                self.preserving_tree(P, &["examples", ex, "native", style], AppDir::Native);
            }
        }
    }

    fn extras(&mut self) {
        const P: Phase = Phase::Extras;
        match self.config.package_manager {
            PackageManager::Pnpm => {
                self.file(P, &["extras"], "pnpm-workspace.yaml", AppDir::Root);
                if self.config.has_native() || self.config.has_frontend(Frontend::Nuxt) {
                    self.file(P, &["extras"], "_npmrc.hbs", AppDir::Root);
                }
            }
            PackageManager::Bun => self.file(P, &["extras"], "bunfig.toml.hbs", AppDir::Root),
            PackageManager::Npm => {}
        }
    }

    fn deploy(&mut self) {
        const P: Phase = Phase::Deploy;
        let web = self.config.web_deploy;
        let server = self.config.server_deploy;
        let has_web = self.config.has_web();
        let has_server = self.config.has_server_app();

        if web == WebDeploy::Alchemy && server == ServerDeploy::Alchemy {
            self.file(P, &["deploy", "alchemy"], ALCHEMY_CONFIG, AppDir::Root);
            if has_server {
                self.file(P, &["deploy", "alchemy"], ALCHEMY_ENV_TYPES, AppDir::Server);
            }
        } else {
            if web == WebDeploy::Alchemy && has_web {
                self.file(P, &["deploy", "alchemy"], ALCHEMY_CONFIG, AppDir::Web);
            }
            if server == ServerDeploy::Alchemy && has_server {
                self.file(P, &["deploy", "alchemy"], ALCHEMY_CONFIG, AppDir::Server);
                self.file(P, &["deploy", "alchemy"], ALCHEMY_ENV_TYPES, AppDir::Server);
            }
        }

        if !matches!(web, WebDeploy::None | WebDeploy::Alchemy) && has_web {
            let config = self.config;
            for fw in config.web_frontends() {
                let dir = fw.web_dir().unwrap_or_default();
                self.tree(P, &["deploy", web.as_str(), "web", dir], AppDir::Web);
            }
        }

        if !matches!(server, ServerDeploy::None | ServerDeploy::Alchemy) && has_server {
            self.tree(P, &["deploy", server.as_str(), "server"], AppDir::Server);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{OverwritePolicy, Selection},
        validation::Validator,
        value_objects::*,
    };

    fn plan_for(builder: crate::domain::entities::ProjectConfigBuilder) -> OverlayPlan {
        let config = Validator::validate(builder.build().unwrap()).unwrap();
        resolve(&config)
    }

    fn scenario() -> OverlayPlan {
        plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Next])
                .backend(Backend::Hono)
                .database(Database::Sqlite)
                .orm(Orm::Drizzle)
                .auth(Auth::BetterAuth)
                .api(Api::Trpc)
                .addons([Addon::Turborepo])
                .examples([Example::Todo]),
        )
    }

    #[test]
    fn next_hono_sqlite_scenario_includes_expected_paths() {
        let plan = scenario();
        for path in [
            "base",
            "frontend/react/web-base",
            "frontend/react/next",
            "api/trpc/web/react/base",
            "backend/server/server-base",
            "backend/server/hono",
            "api/trpc/server/base",
            "api/trpc/server/hono",
            "db/drizzle/sqlite",
            "auth/better-auth/server/base",
            "auth/better-auth/server/db/drizzle/sqlite",
            "auth/better-auth/web/react/base",
            "auth/better-auth/web/react/next",
            "addons/turborepo",
            "examples/todo/server/drizzle/base",
            "examples/todo/server/drizzle/sqlite",
        ] {
            assert!(plan.contains_source(path), "missing {path}");
        }
    }

    #[test]
    fn plan_is_in_phase_order() {
        let plan = scenario();
        let phases: Vec<_> = plan.iter().map(|o| o.phase).collect();
        let mut sorted = phases.clone();
        sorted.sort();
        assert_eq!(phases, sorted);
        assert_eq!(plan.iter().next().unwrap().source.as_str(), "base");
    }

    #[test]
    fn resolve_is_idempotent() {
        assert_eq!(scenario(), scenario());
    }

    #[test]
    fn only_examples_preserve_existing_files() {
        for overlay in &scenario() {
            let preserve = overlay.policy == OverwritePolicy::PreserveExisting;
            assert_eq!(preserve, overlay.phase == Phase::Examples, "{overlay:?}");
        }
    }

    #[test]
    fn destinations_follow_app_dirs() {
        let plan = scenario();
        let dest = |src: &str| {
            plan.iter()
                .find(|o| o.source.as_str() == src)
                .map(|o| o.destination)
        };
        assert_eq!(dest("base"), Some(AppDir::Root));
        assert_eq!(dest("frontend/react/next"), Some(AppDir::Web));
        assert_eq!(dest("db/drizzle/sqlite"), Some(AppDir::Server));
        assert_eq!(dest("addons/turborepo"), Some(AppDir::Root));
    }

    #[test]
    fn convex_skips_server_steps() {
        let plan = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::TanstackRouter])
                .backend(Backend::Convex)
                .auth(Auth::Clerk),
        );
        assert!(plan.contains_source("backend/convex/packages/backend"));
        assert!(plan.contains_source("auth/clerk/convex/backend"));
        assert!(plan.contains_source("auth/clerk/convex/web/react/tanstack-router"));
        assert!(plan.iter().all(|o| o.destination != AppDir::Server));
        assert!(!plan.iter().any(|o| o.source.as_str().starts_with("api/")));
        assert_eq!(plan.phase(Phase::DbOrm).count(), 0);
    }

    #[test]
    fn non_react_web_uses_framework_dirs() {
        let plan = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Svelte])
                .api(Api::Orpc),
        );
        assert!(plan.contains_source("frontend/svelte"));
        assert!(plan.contains_source("api/orpc/web/svelte"));
        assert!(plan.contains_source("auth/better-auth/web/svelte"));
        assert!(!plan.contains_source("frontend/react/web-base"));
    }

    #[test]
    fn native_frontend_layers_style() {
        let plan = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::NativeUnistyles])
                .examples([Example::Todo]),
        );
        assert!(plan.contains_source("frontend/native/native-base"));
        assert!(plan.contains_source("frontend/native/unistyles"));
        assert!(plan.contains_source("api/trpc/native"));
        assert!(plan.contains_source("auth/better-auth/native/unistyles"));
        assert!(plan.contains_source("examples/todo/native/unistyles"));
        assert!(!plan.iter().any(|o| o.destination == AppDir::Web));
    }

    #[test]
    fn pwa_picks_variant_by_frontend() {
        let next = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Next])
                .addons([Addon::Pwa]),
        );
        assert!(next.contains_source("addons/pwa/apps/web/next"));

        let solid = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Solid])
                .api(Api::Orpc)
                .addons([Addon::Pwa]),
        );
        let pwa = solid.phase(Phase::Addons).next().unwrap();
        assert_eq!(pwa.source.as_str(), "addons/pwa/apps/web/vite");
        assert_eq!(pwa.destination, AppDir::Web);
    }

    #[test]
    fn ai_example_on_react_adds_web_base() {
        let plan = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::ReactRouter])
                .backend(Backend::Next)
                .examples([Example::Ai]),
        );
        assert!(plan.contains_source("examples/ai/server/next"));
        assert!(plan.contains_source("examples/ai/web/react/base"));
        assert!(plan.contains_source("examples/ai/web/react/react-router"));
        assert!(plan.contains_source("auth/better-auth/server/next"));
    }

    #[test]
    fn extras_follow_package_manager() {
        let pnpm = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Nuxt])
                .api(Api::Orpc)
                .package_manager(PackageManager::Pnpm),
        );
        let extras: Vec<_> = pnpm.phase(Phase::Extras).map(Overlay::source_display).collect();
        assert_eq!(extras, ["extras/pnpm-workspace.yaml", "extras/_npmrc.hbs"]);

        let bun = plan_for(ProjectConfig::builder().package_manager(PackageManager::Bun));
        let bunfig = bun.phase(Phase::Extras).next().unwrap();
        assert_eq!(bunfig.selection, Selection::File("bunfig.toml.hbs"));

        let npm = plan_for(ProjectConfig::builder());
        assert_eq!(npm.phase(Phase::Extras).count(), 0);
    }

    #[test]
    fn docker_setup_adds_compose_overlay() {
        let plan = plan_for(
            ProjectConfig::builder()
                .database(Database::Postgres)
                .db_setup(DbSetup::Docker),
        );
        assert!(plan.contains_source("db-setup/docker-compose/postgres"));
    }

    #[test]
    fn docker_compose_ignores_orm_and_backend() {
        let plan = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Next])
                .backend(Backend::Convex)
                .database(Database::Postgres)
                .orm(Orm::None)
                .db_setup(DbSetup::Docker),
        );
        assert!(plan.contains_source("db-setup/docker-compose/postgres"));
        assert!(!plan.iter().any(|o| o.source.as_str().starts_with("db/")));
    }

    #[test]
    fn shared_alchemy_config_goes_to_root() {
        let plan = plan_for(
            ProjectConfig::builder()
                .web_deploy(WebDeploy::Alchemy)
                .server_deploy(ServerDeploy::Alchemy),
        );
        let deploy: Vec<_> = plan
            .phase(Phase::Deploy)
            .map(|o| (o.source_display(), o.destination))
            .collect();
        assert_eq!(
            deploy,
            [
                ("deploy/alchemy/alchemy.run.ts.hbs".to_string(), AppDir::Root),
                ("deploy/alchemy/env.d.ts.hbs".to_string(), AppDir::Server),
            ]
        );
    }

    #[test]
    fn separate_deploy_targets() {
        let split = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::Next])
                .web_deploy(WebDeploy::Alchemy)
                .server_deploy(ServerDeploy::Wrangler),
        );
        let deploy: Vec<_> = split
            .phase(Phase::Deploy)
            .map(|o| (o.source_display(), o.destination))
            .collect();
        assert_eq!(
            deploy,
            [
                ("deploy/alchemy/alchemy.run.ts.hbs".to_string(), AppDir::Web),
                ("deploy/wrangler/server".to_string(), AppDir::Server),
            ]
        );

        let vercel = plan_for(
            ProjectConfig::builder()
                .frontend([Frontend::TanstackStart])
                .web_deploy(WebDeploy::Vercel),
        );
        assert!(vercel.contains_source("deploy/vercel/web/react/tanstack-start"));
    }
}
