//! Core domain layer for Trellis.
//!
//! Pure logic only: the closed choice types, the project configuration,
//! the compatibility rules, and the template path resolver. All filesystem
//! work happens behind the ports in the application layer.
//!
//! ## Constraints
//!
//! - **No I/O**: no filesystem, network, or process access
//! - **No logging**: callers in the application layer trace decisions
//! - **Only thiserror + serde**
//! - **Immutable after validation**: `ValidatedConfig` has no mutators

pub mod dependencies;
pub mod entities;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod validation;
pub mod value_objects;

pub use dependencies::dependency_version;
pub use entities::{
    AppDir, DEFAULT_PROJECT_NAME, Overlay, OverlayPlan, OverwritePolicy, Phase, ProjectConfig,
    ProjectConfigBuilder, Selection, TemplatePath, validate_project_name,
};
pub use error::{DomainError, ErrorCategory};
pub use resolver::resolve;
pub use rules::{Rule, RuleId};
pub use validation::{ValidatedConfig, Validator, Violation};
pub use value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, FrontendCategory, Orm,
    PackageManager, Runtime, ServerDeploy, WebDeploy,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end domain flow: build -> validate -> resolve
    // ========================================================================

    #[test]
    fn default_project_validates_and_resolves() {
        let config = ProjectConfig::builder().build().unwrap();
        let validated = Validator::validate(config).unwrap();
        let plan = resolve(&validated);

        assert!(plan.contains_source("base"));
        assert!(plan.contains_source("frontend/react/tanstack-router"));
        assert!(plan.contains_source("backend/server/hono"));
        assert!(plan.contains_source("db/drizzle/sqlite"));
    }

    #[test]
    fn rejected_project_never_reaches_resolver() {
        let config = ProjectConfig::builder()
            .frontend([Frontend::Solid])
            .backend(Backend::Convex)
            .auth(Auth::Clerk)
            .build()
            .unwrap();
        let err = Validator::validate(config).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn every_backend_with_defaults_validates() {
        for &backend in Backend::ALL {
            let config = ProjectConfig::builder().backend(backend).build().unwrap();
            let result = Validator::validate(config);
            assert!(result.is_ok(), "{backend}: {result:?}");
        }
    }
}
