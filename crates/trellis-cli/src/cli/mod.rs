//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value parsing live here; turning the
//! parsed selections into a `ProjectConfig` happens in `crate::selection`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use trellis_core::domain::{
    Api, Auth, Backend, Database, DbSetup, Orm, PackageManager, Runtime, ServerDeploy, WebDeploy,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Compose full-stack TypeScript monorepos from layered templates",
    long_about = "Trellis checks a stack selection against its compatibility rules, \
                  resolves it into an ordered list of template overlays and \
                  applies them to a new project directory.",
    after_help = "EXAMPLES:\n\
        \x20 trellis new my-app --frontend next --backend hono --database sqlite --orm drizzle\n\
        \x20 trellis check --frontend solid --backend convex --auth clerk --all\n\
        \x20 trellis plan --frontend nuxt --api orpc --format json\n\
        \x20 trellis completions bash > /usr/share/bash-completion/completions/trellis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 trellis new my-app --yes\n\
            \x20 trellis new my-app --frontend tanstack-router native-nativewind --backend hono\n\
            \x20 trellis new my-app --backend convex --frontend next --auth clerk\n\
            \x20 trellis new my-app --templates ./templates --strict-templates"
    )]
    New(NewArgs),

    /// Validate a selection without writing anything.
    #[command(
        about = "Check a stack selection against the compatibility rules",
        after_help = "EXAMPLES:\n\
            \x20 trellis check --frontend next --web-deploy vercel\n\
            \x20 trellis check --backend none --server-deploy wrangler --all"
    )]
    Check(CheckArgs),

    /// Print the overlays a selection resolves to.
    #[command(
        about = "Show the template overlay plan for a selection",
        after_help = "EXAMPLES:\n\
            \x20 trellis plan --frontend svelte --api orpc\n\
            \x20 trellis plan --format json > plan.json\n\
            \x20 trellis plan --templates ./templates   # mark missing sources"
    )]
    Plan(PlanArgs),

    /// Write a configuration file with default settings.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 trellis init\n\
            \x20 trellis --config ./trellis.toml init --force"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trellis completions bash > ~/.local/share/bash-completion/completions/trellis\n\
            \x20 trellis completions zsh  > ~/.zfunc/_trellis\n\
            \x20 trellis completions fish > ~/.config/fish/completions/trellis.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trellis config get defaults.backend\n\
            \x20 trellis config list\n\
            \x20 trellis config path"
    )]
    Config(ConfigCommands),
}

// ── selection flags ───────────────────────────────────────────────────────────

/// Stack selection flags shared by `new`, `check` and `plan`.
///
/// Unset flags fall back to the config file's `[defaults]`, then to the
/// built-in stack defaults. List flags accept several values (space or
/// comma separated); `none` selects nothing.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(
        long = "frontend",
        value_name = "FRONTEND",
        num_args = 1..,
        value_delimiter = ',',
        help = "Frontends: tanstack-router, react-router, tanstack-start, next, nuxt, svelte, solid, native-nativewind, native-unistyles, none"
    )]
    pub frontend: Option<Vec<String>>,

    #[arg(long = "backend", value_name = "BACKEND", help = "hono, express, fastify, elysia, next, convex, none")]
    pub backend: Option<Backend>,

    #[arg(long = "database", value_name = "DATABASE", help = "sqlite, postgres, mysql, mongodb, none")]
    pub database: Option<Database>,

    #[arg(long = "orm", value_name = "ORM", help = "drizzle, prisma, mongoose, none")]
    pub orm: Option<Orm>,

    #[arg(long = "auth", value_name = "AUTH", help = "better-auth, clerk, none")]
    pub auth: Option<Auth>,

    #[arg(long = "api", value_name = "API", help = "trpc, orpc, none")]
    pub api: Option<Api>,

    #[arg(long = "runtime", value_name = "RUNTIME", help = "bun, node, workers, none")]
    pub runtime: Option<Runtime>,

    #[arg(
        long = "db-setup",
        value_name = "SETUP",
        help = "turso, neon, prisma-postgres, mongodb-atlas, supabase, d1, docker, none"
    )]
    pub db_setup: Option<DbSetup>,

    #[arg(long = "web-deploy", value_name = "TARGET", help = "wrangler, alchemy, vercel, none")]
    pub web_deploy: Option<WebDeploy>,

    #[arg(long = "server-deploy", value_name = "TARGET", help = "wrangler, alchemy, none")]
    pub server_deploy: Option<ServerDeploy>,

    #[arg(
        long = "addons",
        value_name = "ADDON",
        num_args = 1..,
        value_delimiter = ',',
        help = "pwa, tauri, starlight, biome, husky, ultracite, turborepo, fumadocs, oxlint, ruler, none"
    )]
    pub addons: Option<Vec<String>>,

    #[arg(
        long = "examples",
        value_name = "EXAMPLE",
        num_args = 1..,
        value_delimiter = ',',
        help = "todo, ai, monetized-ai, none"
    )]
    pub examples: Option<Vec<String>>,

    #[arg(
        long = "package-manager",
        value_name = "PM",
        help = "npm, pnpm, bun (detected from the invoking package manager when unset)"
    )]
    pub package_manager: Option<PackageManager>,
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path. A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path [default: my-trellis-app]")]
    pub name: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template root directory (overrides templates.path)"
    )]
    pub templates: Option<PathBuf>,

    /// Fail instead of skipping when a planned template source is absent.
    #[arg(long = "strict-templates", help = "Fail on missing template sources")]
    pub strict_templates: bool,

    #[arg(short = 'y', long = "yes", help = "Skip confirmation and create immediately")]
    pub yes: bool,

    /// Files already present are overwritten; nothing is deleted.
    #[arg(long = "force", help = "Write into an existing directory")]
    pub force: bool,

    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long = "all", help = "Report every violated rule, not just the first")]
    pub all: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,

    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Mark overlays whose source is missing from this template root"
    )]
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Overlays grouped by phase.
    Table,
    /// One source per line.
    List,
    /// The configuration and plan as JSON.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path of the configuration file.
    Path,
}
