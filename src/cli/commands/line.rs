//! `aero line` command - Production line of one aircraft
//!
//! Shows the aircraft's specs, its stages with the single legal next action,
//! its tests and its parts.

use console::style;
use miette::Result;

use crate::cli::commands::utils::print_serialized;
use crate::cli::helpers::{effective_format, open_workspace, resolve_aircraft};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::workflow::Transition;
use crate::entities::StageStatus;

#[derive(clap::Args, Debug)]
pub struct LineArgs {
    /// Aircraft id or code
    pub aircraft: String,
}

pub fn run(args: LineArgs, global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let store = ws.store();
    let id = resolve_aircraft(store, &args.aircraft)?;
    let line = store
        .production_line(id)
        .ok_or_else(|| miette::miette!("No aircraft found matching '{}'", args.aircraft))?;

    let format = effective_format(global, OutputFormat::Tsv);
    if print_serialized(&line, format)? {
        return Ok(());
    }

    let a = line.aircraft;
    println!(
        "{} {} {}",
        style("Production line").bold(),
        style(&a.code).yellow(),
        style(format!("({})", a.model)).dim()
    );
    println!(
        "  {} · {} seats · {} km",
        a.category.label(),
        a.capacity,
        a.range_km
    );

    println!();
    println!("{} ({}):", style("Stages").bold(), line.stages.len());
    if line.stages.is_empty() {
        println!("  {}", style("no stages associated").dim());
    }
    for stage in &line.stages {
        let status = match stage.status {
            StageStatus::Pending => style(stage.status.label()).dim(),
            StageStatus::InProgress => style(stage.status.label()).yellow(),
            StageStatus::Completed => style(stage.status.label()).green(),
        };
        let next = match Transition::next_for(stage.status) {
            Some(t) => format!("next: aero stage {} {}", t, stage.id),
            None => "done".to_string(),
        };
        println!(
            "  {} {} (due {}) {} {}",
            style(stage.id).cyan(),
            stage.name,
            stage.due.format("%d/%m/%Y"),
            status,
            style(next).dim()
        );
        let crew: Vec<String> = store
            .employees_for(stage.id)
            .iter()
            .map(|e| e.name.clone())
            .collect();
        if !crew.is_empty() {
            println!("      crew: {}", crew.join(", "));
        }
    }

    println!();
    println!("{} ({}):", style("Tests").bold(), line.tests.len());
    if line.tests.is_empty() {
        println!("  {}", style("no tests associated").dim());
    }
    for test in &line.tests {
        println!(
            "  {} {}: {}",
            style(test.id).cyan(),
            test.category.label(),
            test.result.label()
        );
    }

    println!();
    println!("{} ({}):", style("Parts").bold(), line.parts.len());
    if line.parts.is_empty() {
        println!("  {}", style("no parts associated").dim());
    }
    for part in &line.parts {
        println!(
            "  {} {} ({}, supplier {})",
            style(part.id).cyan(),
            part.name,
            part.origin.label(),
            part.supplier
        );
    }
    Ok(())
}
