//! Application services - orchestrate use cases.

pub mod compose_service;
pub mod scaffold_service;

pub use compose_service::{ComposeService, CompositionReport, MissingTemplatePolicy, app_path};
pub use scaffold_service::{PlannedProject, ScaffoldReport, ScaffoldService};
