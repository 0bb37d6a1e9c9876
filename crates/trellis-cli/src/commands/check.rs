//! `trellis check`: validate a selection without touching the filesystem.

use serde::Serialize;
use tracing::instrument;

use trellis_core::domain::{Validator, Violation};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    selection,
};

#[derive(Debug, Serialize)]
struct ViolationReport<'a> {
    rule: &'static str,
    message: &'a str,
}

/// Without `--all` the first violated rule is returned as the error, exactly
/// as `new` would report it. With `--all` every violation is printed first.
#[instrument(skip_all, fields(all = args.all))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = selection::project_config(None, &args.selection, &config.defaults)?;

    if !args.all {
        Validator::validate(project)?;
        output.success("Configuration is compatible")?;
        return Ok(());
    }

    let violations = Validator::violations(&project);
    report(&violations, &output)?;

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::Violations {
            count: violations.len(),
        })
    }
}

fn report(violations: &[Violation], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let rows: Vec<_> = violations
            .iter()
            .map(|v| ViolationReport {
                rule: v.rule.as_str(),
                message: &v.message,
            })
            .collect();
        output.json(&rows)?;
        return Ok(());
    }

    if violations.is_empty() {
        output.success("Configuration is compatible")?;
    }
    for v in violations {
        output.error(&format!("[{}] {}", v.rule, v.message))?;
    }
    Ok(())
}
