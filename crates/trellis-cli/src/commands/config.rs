//! `trellis config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `templates.strict`. Unset optional values
/// print as an empty string; keys outside the schema are an error.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: "Failed to serialise config".into(),
        source: Some(Box::new(e)),
    })?;

    let (section, field) = key.split_once('.').ok_or_else(unknown)?;
    if !is_known_field(section, field) {
        return Err(unknown());
    }
    let section = root.get(section).ok_or_else(unknown)?;

    Ok(match section.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    })
}

/// Optional fields are skipped when unset, so the schema is listed here.
fn is_known_field(section: &str, field: &str) -> bool {
    let fields: &[&str] = match section {
        "defaults" => &[
            "frontend",
            "backend",
            "database",
            "orm",
            "auth",
            "api",
            "runtime",
            "db_setup",
            "web_deploy",
            "server_deploy",
            "addons",
            "examples",
            "package_manager",
        ],
        "output" => &["no_color", "format"],
        "templates" => &["path", "strict"],
        "logging" => &["file"],
        _ => &[],
    };
    fields.contains(&field)
}

// ── tests ─────────────────────────────────────────────────────────────────────
