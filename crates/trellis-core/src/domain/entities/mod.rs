pub mod common;
pub mod overlay;
pub mod project_config;

pub use common::TemplatePath;
pub use overlay::{AppDir, Overlay, OverlayPlan, OverwritePolicy, Phase, Selection};
pub use project_config::{
    DEFAULT_PROJECT_NAME, ProjectConfig, ProjectConfigBuilder, validate_project_name,
};
