//! Trellis Core - domain and application layers of the Trellis scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, ComposeService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateCopier, EnvWriter, ...)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      trellis-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectConfig, rules, Validator,      │
//! │   resolver)                             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trellis_core::domain::{Backend, Frontend, ProjectConfig, Validator, resolve};
//!
//! let config = ProjectConfig::builder()
//!     .frontend([Frontend::Next])
//!     .backend(Backend::Hono)
//!     .build()
//!     .unwrap();
//!
//! let validated = Validator::validate(config).unwrap();
//! let plan = resolve(&validated);
//! assert!(plan.contains_source("frontend/react/next"));
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        ComposeService, MissingTemplatePolicy, ScaffoldService,
        ports::{DependencyAdder, EnvWriter, Filesystem, TemplateCopier},
    };
    pub use crate::domain::{
        OverlayPlan, ProjectConfig, ProjectConfigBuilder, ValidatedConfig, Validator, resolve,
    };
    pub use crate::error::{TrellisError, TrellisResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
