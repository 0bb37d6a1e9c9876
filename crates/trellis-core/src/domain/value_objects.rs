//! Domain value objects: every closed choice a project can be composed from.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO compatibility logic. All rules live in `rules.rs`. This
//! file's only job is to define the choices, their string spellings (which
//! double as template directory segments), and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the variant and its spelling to the `choice_enum!` invocation
//! 2. If it constrains other choices, add a rule in `rules.rs`
//! 3. If it contributes templates, add its step in `resolver.rs`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Declares a closed choice enum with its canonical spellings.
///
/// Generates `ALL`, `as_str`, `Display`, and a case-insensitive `FromStr`
/// that reports the allowed spellings on failure.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical spelling, as accepted on the command line.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Canonical spellings of every variant.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| DomainError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                        allowed: Self::names(),
                    })
            }
        }
    };
}

// ── Frontend ──────────────────────────────────────────────────────────────────

choice_enum! {
    /// A frontend framework. Web and native frameworks are independent axes.
    pub enum Frontend ("frontend") {
        TanstackRouter => "tanstack-router",
        ReactRouter => "react-router",
        TanstackStart => "tanstack-start",
        Next => "next",
        Nuxt => "nuxt",
        Svelte => "svelte",
        Solid => "solid",
        NativeNativewind => "native-nativewind",
        NativeUnistyles => "native-unistyles",
    }
}

/// Which app a frontend lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontendCategory {
    Web,
    Native,
}

impl Frontend {
    pub const fn category(self) -> FrontendCategory {
        match self {
            Self::NativeNativewind | Self::NativeUnistyles => FrontendCategory::Native,
            _ => FrontendCategory::Web,
        }
    }

    pub const fn is_web(self) -> bool {
        matches!(self.category(), FrontendCategory::Web)
    }

    pub const fn is_native(self) -> bool {
        matches!(self.category(), FrontendCategory::Native)
    }

    /// React-based web frameworks share the `react/` template family.
    pub const fn is_react(self) -> bool {
        matches!(
            self,
            Self::TanstackRouter | Self::ReactRouter | Self::TanstackStart | Self::Next
        )
    }

    /// Template segment for a web framework: `react/next`, `nuxt`, ...
    ///
    /// `None` for native frameworks.
    pub const fn web_dir(self) -> Option<&'static str> {
        match self {
            Self::TanstackRouter => Some("react/tanstack-router"),
            Self::ReactRouter => Some("react/react-router"),
            Self::TanstackStart => Some("react/tanstack-start"),
            Self::Next => Some("react/next"),
            Self::Nuxt => Some("nuxt"),
            Self::Svelte => Some("svelte"),
            Self::Solid => Some("solid"),
            Self::NativeNativewind | Self::NativeUnistyles => None,
        }
    }

    /// Styling library segment for a native framework.
    ///
    /// `None` for web frameworks.
    pub const fn native_style(self) -> Option<&'static str> {
        match self {
            Self::NativeNativewind => Some("nativewind"),
            Self::NativeUnistyles => Some("unistyles"),
            _ => None,
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

choice_enum! {
    /// Server framework. `Convex` replaces the server app with a backend package.
    pub enum Backend ("backend") {
        Hono => "hono",
        Express => "express",
        Fastify => "fastify",
        Elysia => "elysia",
        Next => "next",
        Convex => "convex",
        None => "none",
    }
}

impl Backend {
    /// Whether this backend produces an `apps/server` app.
    pub const fn has_server_app(self) -> bool {
        !matches!(self, Self::Convex | Self::None)
    }
}

// ── Data layer ────────────────────────────────────────────────────────────────

choice_enum! {
    pub enum Database ("database") {
        Sqlite => "sqlite",
        Postgres => "postgres",
        Mysql => "mysql",
        Mongodb => "mongodb",
        None => "none",
    }
}

choice_enum! {
    pub enum Orm ("orm") {
        Drizzle => "drizzle",
        Prisma => "prisma",
        Mongoose => "mongoose",
        None => "none",
    }
}

choice_enum! {
    /// Hosted or local provisioning for the selected database.
    pub enum DbSetup ("db-setup") {
        Turso => "turso",
        Neon => "neon",
        PrismaPostgres => "prisma-postgres",
        MongodbAtlas => "mongodb-atlas",
        Supabase => "supabase",
        D1 => "d1",
        Docker => "docker",
        None => "none",
    }
}

impl DbSetup {
    /// The database a provider can provision, when it is tied to one.
    pub const fn required_database(self) -> Option<Database> {
        match self {
            Self::Turso | Self::D1 => Some(Database::Sqlite),
            Self::Neon | Self::Supabase | Self::PrismaPostgres => Some(Database::Postgres),
            Self::MongodbAtlas => Some(Database::Mongodb),
            Self::Docker | Self::None => None,
        }
    }
}

// ── Auth / API / runtime ──────────────────────────────────────────────────────

choice_enum! {
    pub enum Auth ("auth") {
        BetterAuth => "better-auth",
        Clerk => "clerk",
        None => "none",
    }
}

choice_enum! {
    /// Typed RPC layer shared by server and clients.
    pub enum Api ("api") {
        Trpc => "trpc",
        Orpc => "orpc",
        None => "none",
    }
}

choice_enum! {
    pub enum Runtime ("runtime") {
        Bun => "bun",
        Node => "node",
        Workers => "workers",
        None => "none",
    }
}

// ── Deployment ────────────────────────────────────────────────────────────────

choice_enum! {
    pub enum WebDeploy ("web-deploy") {
        Wrangler => "wrangler",
        Alchemy => "alchemy",
        Vercel => "vercel",
        None => "none",
    }
}

choice_enum! {
    pub enum ServerDeploy ("server-deploy") {
        Wrangler => "wrangler",
        Alchemy => "alchemy",
        None => "none",
    }
}

// ── Addons / examples ─────────────────────────────────────────────────────────

choice_enum! {
    /// Optional tooling layered onto the project.
    pub enum Addon ("addon") {
        Pwa => "pwa",
        Tauri => "tauri",
        Starlight => "starlight",
        Biome => "biome",
        Husky => "husky",
        Ultracite => "ultracite",
        Turborepo => "turborepo",
        Fumadocs => "fumadocs",
        Oxlint => "oxlint",
        Ruler => "ruler",
    }
}

choice_enum! {
    /// Example app code that augments the generated project.
    pub enum Example ("example") {
        Todo => "todo",
        Ai => "ai",
        MonetizedAi => "monetized-ai",
    }
}

impl Example {
    /// AI examples ship a shared web `base` layer and a Next server route.
    pub const fn is_ai(self) -> bool {
        matches!(self, Self::Ai | Self::MonetizedAi)
    }
}

// ── Package manager ───────────────────────────────────────────────────────────

choice_enum! {
    #[derive(Default)]
    pub enum PackageManager ("package-manager") {
        #[default]
        Npm => "npm",
        Pnpm => "pnpm",
        Bun => "bun",
    }
}

impl PackageManager {
    /// Detect the invoking package manager from an `npm_config_user_agent`
    /// value such as `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.starts_with("pnpm") {
            Self::Pnpm
        } else if user_agent.starts_with("bun") {
            Self::Bun
        } else {
            Self::Npm
        }
    }
}
