//! `aero part` command - Part management

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{print_created, print_serialized, remove_record};
use crate::cli::helpers::{effective_format, open_workspace, parse_record_id, require_non_empty};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::{NewPart, Part, PartOrigin};

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// List parts
    List,

    /// Register a new part
    New(NewArgs),

    /// Delete a part (associations are kept)
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Part name
    #[arg(long, short = 'n')]
    pub name: String,

    /// domestic or imported
    #[arg(long, short = 'o')]
    pub origin: PartOrigin,

    /// Supplier name
    #[arg(long, short = 's')]
    pub supplier: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Part id
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 16),
    ColumnDef::new("name", "NAME", 30),
    ColumnDef::new("origin", "ORIGIN", 10),
    ColumnDef::new("supplier", "SUPPLIER", 24),
];

/// Run a part subcommand
pub fn run(cmd: PartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartCommands::List => run_list(global),
        PartCommands::New(args) => run_new(args, global),
        PartCommands::Rm(args) => {
            let id = parse_record_id(&args.id)?;
            let mut ws = open_workspace(global)?;
            remove_record::<Part>(&mut ws, &id, global)
        }
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let parts = ws.store().list::<Part>();
    let format = effective_format(global, OutputFormat::Tsv);

    if print_serialized(parts, format)? {
        return Ok(());
    }
    if parts.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No parts found.");
        }
        return Ok(());
    }

    let rows = parts.iter().map(|p| {
        TableRow::new(p.id)
            .cell("id", CellValue::Id(p.id.to_string()))
            .cell("name", CellValue::Text(p.name.clone()))
            .cell("origin", CellValue::Text(p.origin.to_string()))
            .cell("supplier", CellValue::Text(p.supplier.clone()))
    });
    TableFormatter::new(COLUMNS, "part")
        .quiet(global.quiet)
        .output(rows, format);
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let draft = NewPart {
        name: require_non_empty("name", &args.name)?,
        origin: args.origin,
        supplier: require_non_empty("supplier", &args.supplier)?,
    };
    let title = draft.name.clone();

    let mut ws = open_workspace(global)?;
    let id = ws.create(draft);
    print_created(global, "part", &id, &title);
    Ok(())
}
