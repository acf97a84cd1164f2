//! `aero link` command - Associations between entities

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::print_serialized;
use crate::cli::helpers::{effective_format, open_workspace, parse_record_id, resolve_aircraft};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::{EmployeeId, RecordId};
use crate::core::links::{LinkError, LinkKind, LinkRow};
use crate::core::store::{Store, Stored};
use crate::entities::{Employee, Part, Stage, Test};

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Associate two entities
    Add(AddLinkArgs),

    /// List associations with both endpoints resolved
    List(ListLinksArgs),

    /// Find associations whose endpoint was deleted
    Check,
}

#[derive(clap::Args, Debug)]
pub struct AddLinkArgs {
    /// Association kind
    #[arg(value_enum)]
    pub kind: LinkKind,

    /// Part, stage or test id (employee id for employee-stage)
    pub left: String,

    /// Aircraft id or code (stage id for employee-stage)
    pub right: String,
}

#[derive(clap::Args, Debug)]
pub struct ListLinksArgs {
    /// Only this association kind (default: all)
    #[arg(value_enum)]
    pub kind: Option<LinkKind>,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("kind", "KIND", 15),
    ColumnDef::new("left_id", "LEFT_ID", 16),
    ColumnDef::new("left", "LEFT", 24),
    ColumnDef::new("right_id", "RIGHT_ID", 16),
    ColumnDef::new("right", "RIGHT", 24),
];

/// Run a link subcommand
pub fn run(cmd: LinkCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        LinkCommands::Add(args) => run_add(args, global),
        LinkCommands::List(args) => run_list(args, global),
        LinkCommands::Check => run_check(global),
    }
}

fn run_add(args: AddLinkArgs, global: &GlobalOpts) -> Result<()> {
    let mut ws = open_workspace(global)?;

    let outcome = match args.kind {
        LinkKind::PartAircraft => {
            let part = existing::<Part>(ws.store(), &args.left)?;
            let aircraft = resolve_aircraft(ws.store(), &args.right)?;
            ws.associate_part(part, aircraft)
        }
        LinkKind::StageAircraft => {
            let stage = existing::<Stage>(ws.store(), &args.left)?;
            let aircraft = resolve_aircraft(ws.store(), &args.right)?;
            ws.associate_stage(stage, aircraft)
        }
        LinkKind::TestAircraft => {
            let test = existing::<Test>(ws.store(), &args.left)?;
            let aircraft = resolve_aircraft(ws.store(), &args.right)?;
            ws.associate_test(test, aircraft)
        }
        LinkKind::EmployeeStage => {
            let employee = EmployeeId::new(args.left.trim());
            if !ws.store().contains::<Employee>(&employee) {
                return Err(miette::miette!("No employee found with id '{}'", employee));
            }
            let stage = existing::<Stage>(ws.store(), &args.right)?;
            ws.associate_employee(employee, stage)
        }
    };

    match outcome {
        Ok(()) => {
            if !global.quiet {
                println!(
                    "{} Added link: {} --[{}]--> {}",
                    style("✓").green(),
                    args.left,
                    style(args.kind).cyan(),
                    args.right
                );
            }
        }
        // Duplicates are reported, not failed
        Err(LinkError::DuplicateAssociation { .. }) => {
            println!(
                "{} Association already exists: {} --[{}]--> {}",
                style("!").yellow(),
                args.left,
                args.kind,
                args.right
            );
        }
    }
    Ok(())
}

/// Parse a numeric id and make sure the record exists
fn existing<T: Stored<Id = RecordId>>(store: &Store, raw: &str) -> Result<RecordId> {
    let id = parse_record_id(raw)?;
    if store.contains::<T>(&id) {
        Ok(id)
    } else {
        Err(miette::miette!("No {} found with id {}", T::KIND, id))
    }
}

fn run_list(args: ListLinksArgs, global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let kinds: Vec<LinkKind> = match args.kind {
        Some(kind) => vec![kind],
        None => LinkKind::all().to_vec(),
    };
    let rows: Vec<LinkRow> = kinds
        .iter()
        .flat_map(|kind| ws.store().link_rows(*kind))
        .collect();

    let format = effective_format(global, OutputFormat::Tsv);
    if print_serialized(&rows, format)? {
        return Ok(());
    }
    if rows.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No associations found.");
        }
        return Ok(());
    }
    output_rows(&rows, format, global.quiet);
    Ok(())
}

fn run_check(global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let total: usize = LinkKind::all()
        .iter()
        .map(|kind| ws.store().links().len(*kind))
        .sum();
    let dangling = ws.store().dangling_links();

    let format = effective_format(global, OutputFormat::Tsv);
    if print_serialized(&dangling, format)? {
        return Ok(());
    }

    if !dangling.is_empty() {
        output_rows(&dangling, format, true);
    }
    if !global.quiet {
        println!();
        println!("{}", style("─".repeat(60)).dim());
        println!(
            "Checked {} association(s), found {} dangling",
            style(total).cyan(),
            if dangling.is_empty() {
                style(dangling.len()).green()
            } else {
                style(dangling.len()).red()
            }
        );
        if dangling.is_empty() {
            println!("{} All associations resolve", style("✓").green().bold());
        }
    }
    Ok(())
}

fn output_rows(rows: &[LinkRow], format: OutputFormat, quiet: bool) {
    let cell = |title: &Option<String>| match title {
        Some(t) => CellValue::Text(t.clone()),
        None => CellValue::Missing,
    };
    let table_rows = rows.iter().map(|r| {
        TableRow::new(format!("{}:{}:{}", r.kind, r.left_id, r.right_id))
            .cell("kind", CellValue::Text(r.kind.to_string()))
            .cell("left_id", CellValue::Id(r.left_id.clone()))
            .cell("left", cell(&r.left))
            .cell("right_id", CellValue::Id(r.right_id.clone()))
            .cell("right", cell(&r.right))
    });
    TableFormatter::new(COLUMNS, "association")
        .quiet(quiet)
        .output(table_rows, format);
}
