//! Turns command-line flags and config defaults into a `ProjectConfig`.

use std::str::FromStr;

use tracing::debug;
use trellis_core::domain::{DomainError, PackageManager, ProjectConfig, ProjectConfigBuilder};

use crate::cli::SelectionArgs;
use crate::config::SelectionDefaults;
use crate::error::{CliError, CliResult};

/// Variable npm, pnpm and bun set for scripts they launch.
const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Flags first, then `[defaults]` from the config file, then the package
/// manager that launched us. Whatever is still unset gets the built-in
/// defaults in `ProjectConfigBuilder::build`.
pub fn project_config(
    name: Option<&str>,
    flags: &SelectionArgs,
    defaults: &SelectionDefaults,
) -> CliResult<ProjectConfig> {
    let mut builder = from_flags(flags)?;
    if let Some(name) = name {
        builder = builder.project_name(name);
    }

    let detected = ProjectConfigBuilder::default().package_manager(detect_package_manager());
    let config = builder.or(from_defaults(defaults)?).or(detected).build()?;

    debug!(
        project = %config.project_name,
        backend = %config.backend,
        frontends = config.frontend.len(),
        "Selection merged"
    );
    Ok(config)
}

fn from_flags(flags: &SelectionArgs) -> CliResult<ProjectConfigBuilder> {
    let mut b = ProjectConfigBuilder::default();
    if let Some(values) = &flags.frontend {
        b = b.frontend(parse_list(values, "frontend")?);
    }
    if let Some(v) = flags.backend {
        b = b.backend(v);
    }
    if let Some(v) = flags.database {
        b = b.database(v);
    }
    if let Some(v) = flags.orm {
        b = b.orm(v);
    }
    if let Some(v) = flags.auth {
        b = b.auth(v);
    }
    if let Some(v) = flags.api {
        b = b.api(v);
    }
    if let Some(v) = flags.runtime {
        b = b.runtime(v);
    }
    if let Some(v) = flags.db_setup {
        b = b.db_setup(v);
    }
    if let Some(v) = flags.web_deploy {
        b = b.web_deploy(v);
    }
    if let Some(v) = flags.server_deploy {
        b = b.server_deploy(v);
    }
    if let Some(values) = &flags.addons {
        b = b.addons(parse_list(values, "addons")?);
    }
    if let Some(values) = &flags.examples {
        b = b.examples(parse_list(values, "examples")?);
    }
    if let Some(v) = flags.package_manager {
        b = b.package_manager(v);
    }
    Ok(b)
}

fn from_defaults(d: &SelectionDefaults) -> CliResult<ProjectConfigBuilder> {
    let mut b = ProjectConfigBuilder::default();
    if let Some(values) = &d.frontend {
        b = b.frontend(parse_list(values, "frontend")?);
    }
    if let Some(v) = &d.backend {
        b = b.backend(v.parse()?);
    }
    if let Some(v) = &d.database {
        b = b.database(v.parse()?);
    }
    if let Some(v) = &d.orm {
        b = b.orm(v.parse()?);
    }
    if let Some(v) = &d.auth {
        b = b.auth(v.parse()?);
    }
    if let Some(v) = &d.api {
        b = b.api(v.parse()?);
    }
    if let Some(v) = &d.runtime {
        b = b.runtime(v.parse()?);
    }
    if let Some(v) = &d.db_setup {
        b = b.db_setup(v.parse()?);
    }
    if let Some(v) = &d.web_deploy {
        b = b.web_deploy(v.parse()?);
    }
    if let Some(v) = &d.server_deploy {
        b = b.server_deploy(v.parse()?);
    }
    if let Some(values) = &d.addons {
        b = b.addons(parse_list(values, "addons")?);
    }
    if let Some(values) = &d.examples {
        b = b.examples(parse_list(values, "examples")?);
    }
    if let Some(v) = &d.package_manager {
        b = b.package_manager(v.parse()?);
    }
    Ok(b)
}

/// Parse a multi-value option. A lone `none` means "select nothing".
fn parse_list<T>(values: &[String], flag: &str) -> CliResult<Vec<T>>
where
    T: FromStr<Err = DomainError>,
{
    let is_none = |v: &String| v.trim().eq_ignore_ascii_case("none");
    if values.iter().any(is_none) {
        if values.len() > 1 {
            return Err(CliError::InvalidInput {
                message: format!("Cannot combine 'none' with other --{flag} values"),
                source: None,
            });
        }
        return Ok(Vec::new());
    }
    values
        .iter()
        .map(|v| v.parse().map_err(CliError::from))
        .collect()
}

/// Package manager inferred from the environment, npm when unknown.
pub fn detect_package_manager() -> PackageManager {
    std::env::var(USER_AGENT_VAR)
        .map(|agent| PackageManager::from_user_agent(&agent))
        .unwrap_or_default()
}
