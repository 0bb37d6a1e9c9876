//! Application ports (traits) for external dependencies.
//!
//! The core never touches the filesystem itself. Everything it needs from
//! the outside world is one of these driven (output) ports, implemented in
//! `trellis-adapters`:
//!
//! - `TemplateCopier`: copy/render one overlay into the project
//! - `Filesystem`: directory creation and existence checks
//! - `EnvWriter`: idempotent `.env` appends
//! - `DependencyAdder`: `package.json` dependency edits

pub mod output;

pub use output::{
    DependencyAdder, DependencyKind, EnvVariable, EnvWriter, Filesystem, RenderStats,
    TemplateCopier,
};

#[cfg(test)]
pub use output::{MockDependencyAdder, MockEnvWriter, MockFilesystem, MockTemplateCopier};
