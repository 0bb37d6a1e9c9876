//! `trellis plan`: print the overlays a selection resolves to.

use serde::Serialize;
use tracing::{debug, instrument};

use trellis_adapters::TemplateCatalog;
use trellis_core::{
    application::ScaffoldService,
    domain::{Overlay, OverlayPlan, OverwritePolicy, Phase, ValidatedConfig},
};

use crate::{
    cli::{PlanArgs, PlanFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    selection,
};

#[derive(Serialize)]
struct PlanDocument<'a> {
    config: &'a ValidatedConfig,
    overlays: &'a OverlayPlan,
}

#[instrument(skip_all, fields(format = ?args.format))]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = selection::project_config(None, &args.selection, &config.defaults)?;
    let planned = ScaffoldService::plan(project)?;
    debug!(overlays = planned.plan.len(), "Plan resolved");

    let catalog = args
        .templates
        .map(TemplateCatalog::scan)
        .transpose()?;

    match args.format {
        PlanFormat::Json => output.json(&PlanDocument {
            config: &planned.config,
            overlays: &planned.plan,
        })?,
        PlanFormat::List => {
            for overlay in &planned.plan {
                output.print(&overlay.source_display())?;
            }
        }
        PlanFormat::Table => print_table(&planned.plan, catalog.as_ref(), &output)?,
    }
    Ok(())
}

fn print_table(
    plan: &OverlayPlan,
    catalog: Option<&TemplateCatalog>,
    output: &OutputManager,
) -> CliResult<()> {
    for phase in Phase::ALL {
        let overlays: Vec<&Overlay> = plan.phase(phase).collect();
        if overlays.is_empty() {
            continue;
        }
        output.header(&format!("{phase}:"))?;
        for overlay in overlays {
            output.print(&row(overlay, catalog, output))?;
        }
    }
    output.print("")?;
    output.print(&format!("{} overlays", plan.len()))?;
    Ok(())
}

fn row(overlay: &Overlay, catalog: Option<&TemplateCatalog>, output: &OutputManager) -> String {
    let mut line = format!(
        "  {:<48} {}",
        overlay.source_display(),
        output.dim(&format!("-> {}", overlay.destination))
    );
    if overlay.policy == OverwritePolicy::PreserveExisting {
        line.push_str(" (preserve)");
    }
    if catalog.is_some_and(|c| !c.contains(overlay)) {
        line.push_str(" (missing)");
    }
    line
}
