//! Implementation of the `trellis new` command.
//!
//! Translates flags into a `ProjectConfig`, wires the adapters into the
//! scaffold service, and reports the result. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use trellis_adapters::{
    DotenvWriter, LocalFilesystem, LocalTemplateCopier, PackageJsonEditor, TemplateCatalog,
};
use trellis_core::{
    application::{ComposeService, MissingTemplatePolicy, ScaffoldService},
    domain::{DEFAULT_PROJECT_NAME, PackageManager, ProjectConfig},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    selection,
};

/// Execute the `trellis new` command.
///
/// 1. Resolve the project name and directory
/// 2. Merge flags and config into a `ProjectConfig`, then validate and plan
/// 3. Refuse an existing directory unless `--force`
/// 4. Confirm with the user unless `--yes`, `--quiet` or non-interactive
/// 5. Stop after describing the plan when `--dry-run`
/// 6. Scaffold through `ScaffoldService`
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME)))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (project_name, project_dir) =
        resolve_project_path(args.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME))?;

    let project = selection::project_config(Some(&project_name), &args.selection, &config.defaults)?;
    let planned = ScaffoldService::plan(project.clone())?;
    debug!(overlays = planned.plan.len(), "Plan resolved");

    ensure_target_available(&project_dir, args.force)?;

    if !global.quiet && !args.yes && std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        show_configuration(&planned.config, &project_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {} from {} overlays",
            project_name,
            project_dir.display(),
            planned.plan.len(),
        ))?;
        for overlay in &planned.plan {
            output.print(&format!(
                "  {:<9} {} -> {}",
                overlay.phase,
                overlay.source_display(),
                overlay.destination
            ))?;
        }
        return Ok(());
    }

    let templates = template_root(&args, &config)?;
    let catalog = TemplateCatalog::scan(&templates)?;
    let missing = catalog.missing(&planned.plan).len();
    let strict = args.strict_templates || config.templates.strict;
    if missing > 0 && !strict {
        output.warning(&format!(
            "{missing} of {} template sources are not in {} and will be skipped",
            planned.plan.len(),
            templates.display()
        ))?;
    }

    let service = build_service(&templates, strict);

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(path = %project_dir.display(), templates = %templates.display(), "Scaffold started");

    let spinner = output.spinner("Applying templates");
    let result = service.scaffold(project, &project_dir);
    spinner.finish_and_clear();
    let report = result?;

    info!(
        applied = report.composition.applied.len(),
        skipped = report.composition.skipped.len(),
        "Scaffold completed"
    );

    output.success(&format!(
        "Project '{project_name}' created at {}",
        project_dir.display()
    ))?;
    output.print(&format!(
        "  {} overlays applied, {} files written, {} kept",
        report.composition.applied.len(),
        report.composition.files_written,
        report.composition.files_preserved
    ))?;

    if !global.quiet {
        print_next_steps(&project_name, report.config.package_manager, &output)?;
    }
    Ok(())
}

/// Split a name-or-path argument into the project name and its directory.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("cannot derive a project name from '{name}'"),
            source: None,
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn ensure_target_available(project_dir: &Path, force: bool) -> CliResult<()> {
    if project_dir.exists() && !force {
        return Err(CliError::ProjectExists {
            path: project_dir.to_path_buf(),
        });
    }
    Ok(())
}

fn template_root(args: &NewArgs, config: &AppConfig) -> CliResult<PathBuf> {
    args.templates
        .clone()
        .or_else(|| config.templates.path.clone())
        .ok_or_else(|| CliError::ConfigError {
            message: "no template directory configured".into(),
            source: None,
        })
}

fn build_service(templates: &Path, strict: bool) -> ScaffoldService {
    let policy = if strict {
        MissingTemplatePolicy::Fail
    } else {
        MissingTemplatePolicy::Skip
    };
    let composer = ComposeService::new(
        Box::new(LocalTemplateCopier::new(templates)),
        Box::new(LocalFilesystem::new()),
    )
    .with_missing_policy(policy);

    ScaffoldService::new(
        composer,
        Box::new(DotenvWriter::new()),
        Box::new(PackageJsonEditor::new()),
    )
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    config: &ProjectConfig,
    project_dir: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let list = |items: Vec<String>| {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    };

    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", config.project_name))?;
    out.print(&format!(
        "  Frontend:  {}",
        list(config.frontend.iter().map(ToString::to_string).collect())
    ))?;
    out.print(&format!("  Backend:   {} ({})", config.backend, config.runtime))?;
    out.print(&format!(
        "  Data:      {} / {} / {}",
        config.database, config.orm, config.db_setup
    ))?;
    out.print(&format!("  Auth:      {}", config.auth))?;
    out.print(&format!("  API:       {}", config.api))?;
    out.print(&format!(
        "  Addons:    {}",
        list(config.addons.iter().map(ToString::to_string).collect())
    ))?;
    out.print(&format!(
        "  Examples:  {}",
        list(config.examples.iter().map(ToString::to_string).collect())
    ))?;
    out.print(&format!(
        "  Deploy:    web {} / server {}",
        config.web_deploy, config.server_deploy
    ))?;
    out.print(&format!("  Location:  {}", project_dir.display()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    use crate::error::IntoCli;

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn print_next_steps(name: &str, pm: PackageManager, out: &OutputManager) -> CliResult<()> {
    let run = match pm {
        PackageManager::Npm => "npm run",
        PackageManager::Pnpm => "pnpm",
        PackageManager::Bun => "bun",
    };
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {name}"))?;
    out.print(&format!("  {pm} install"))?;
    out.print(&format!("  {run} dev"))?;
    Ok(())
}
