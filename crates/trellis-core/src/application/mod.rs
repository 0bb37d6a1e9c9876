//! Application layer for Trellis.
//!
//! - **Services**: `ComposeService` applies an overlay plan, `ScaffoldService`
//!   runs the whole validate → resolve → compose → provider setup flow
//! - **Ports**: traits for the filesystem-facing collaborators
//! - **Errors**: orchestration and I/O failures
//!
//! Decisions about which templates apply live in `crate::domain`; this
//! layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ComposeService, CompositionReport, MissingTemplatePolicy, PlannedProject, ScaffoldReport,
    ScaffoldService,
};

pub use ports::{
    DependencyAdder, DependencyKind, EnvVariable, EnvWriter, Filesystem, RenderStats,
    TemplateCopier,
};

pub use error::ApplicationError;
