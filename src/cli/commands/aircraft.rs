//! `aero aircraft` command - Aircraft management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{print_created, print_serialized, remove_record};
use crate::cli::helpers::{effective_format, open_workspace, require_non_empty, resolve_aircraft};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::{Aircraft, AircraftCategory, NewAircraft};

#[derive(Subcommand, Debug)]
pub enum AircraftCommands {
    /// List registered aircraft
    List,

    /// Register a new aircraft
    New(NewArgs),

    /// Show an aircraft with everything linked to it
    Show(ShowArgs),

    /// Delete an aircraft (associations are kept)
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Aircraft code, e.g. AC001
    #[arg(long, short = 'c')]
    pub code: String,

    /// Model name
    #[arg(long, short = 'm')]
    pub model: String,

    /// commercial or military
    #[arg(long, short = 't')]
    pub category: AircraftCategory,

    /// Passenger capacity
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub capacity: u32,

    /// Range in km
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub range: u32,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Aircraft id or code
    pub aircraft: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Aircraft id or code
    pub aircraft: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 16),
    ColumnDef::new("code", "CODE", 12),
    ColumnDef::new("model", "MODEL", 24),
    ColumnDef::new("category", "CATEGORY", 12),
    ColumnDef::new("capacity", "CAPACITY", 10),
    ColumnDef::new("range", "RANGE_KM", 10),
];

/// Run an aircraft subcommand
pub fn run(cmd: AircraftCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AircraftCommands::List => run_list(global),
        AircraftCommands::New(args) => run_new(args, global),
        AircraftCommands::Show(args) => run_show(args, global),
        AircraftCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let aircraft = ws.store().list::<Aircraft>();
    let format = effective_format(global, OutputFormat::Tsv);

    if print_serialized(aircraft, format)? {
        return Ok(());
    }
    if aircraft.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No aircraft found.");
        }
        return Ok(());
    }

    let rows = aircraft.iter().map(|a| {
        TableRow::new(a.id)
            .cell("id", CellValue::Id(a.id.to_string()))
            .cell("code", CellValue::Text(a.code.clone()))
            .cell("model", CellValue::Text(a.model.clone()))
            .cell("category", CellValue::Text(a.category.to_string()))
            .cell("capacity", CellValue::Number(u64::from(a.capacity)))
            .cell("range", CellValue::Number(u64::from(a.range_km)))
    });
    TableFormatter::new(COLUMNS, "aircraft")
        .quiet(global.quiet)
        .output(rows, format);
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let draft = NewAircraft {
        code: require_non_empty("code", &args.code)?,
        model: require_non_empty("model", &args.model)?,
        category: args.category,
        capacity: args.capacity,
        range_km: args.range,
    };
    let title = format!("{} ({})", draft.code, draft.model);

    let mut ws = open_workspace(global)?;
    if ws.store().list::<Aircraft>().iter().any(|a| a.code == draft.code) && !global.quiet {
        eprintln!(
            "{} Another aircraft already uses code {}; refer to them by id",
            style("!").yellow(),
            style(&draft.code).cyan()
        );
    }
    let id = ws.create(draft);
    print_created(global, "aircraft", &id, &title);
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
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
    if format == OutputFormat::Id {
        println!("{}", line.aircraft.id);
        return Ok(());
    }

    let a = line.aircraft;
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(a.id).cyan());
    println!("{}: {}", style("Code").bold(), style(&a.code).yellow());
    println!("{}: {}", style("Model").bold(), a.model);
    println!("{}: {}", style("Category").bold(), a.category);
    println!("{}: {}", style("Capacity").bold(), a.capacity);
    println!("{}: {} km", style("Range").bold(), a.range_km);
    println!("{}", style("─".repeat(60)).dim());

    println!();
    println!("{} ({}):", style("Parts").bold(), line.parts.len());
    for part in &line.parts {
        println!(
            "  {} {} [{}] from {}",
            style(part.id).cyan(),
            part.name,
            part.origin,
            part.supplier
        );
    }

    println!();
    println!("{} ({}):", style("Stages").bold(), line.stages.len());
    for stage in &line.stages {
        println!(
            "  {} {} due {} [{}]",
            style(stage.id).cyan(),
            stage.name,
            stage.due,
            stage.status
        );
    }

    println!();
    println!("{} ({}):", style("Tests").bold(), line.tests.len());
    for test in &line.tests {
        println!(
            "  {} {} → {}",
            style(test.id).cyan(),
            test.category,
            test.result
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let mut ws = open_workspace(global)?;
    match resolve_aircraft(ws.store(), &args.aircraft) {
        Ok(id) => remove_record::<Aircraft>(&mut ws, &id, global),
        Err(_) => {
            if !global.quiet {
                println!(
                    "{} No aircraft matching '{}'; nothing removed",
                    style("!").yellow(),
                    args.aircraft
                );
            }
            Ok(())
        }
    }
}
