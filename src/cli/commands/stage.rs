//! `aero stage` command - Production stage management

use chrono::NaiveDate;
use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{print_created, print_serialized, remove_record};
use crate::cli::helpers::{effective_format, open_workspace, parse_record_id, require_non_empty};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::workflow::Transition;
use crate::entities::{NewStage, Stage};

#[derive(Subcommand, Debug)]
pub enum StageCommands {
    /// List stages
    List,

    /// Register a new stage (starts pending)
    New(NewArgs),

    /// Delete a stage (associations are kept)
    Rm(StageIdArgs),

    /// Move a pending stage to in_progress
    Start(StageIdArgs),

    /// Move an in_progress stage to completed
    Finish(StageIdArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Stage name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Deadline (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub due: NaiveDate,
}

#[derive(clap::Args, Debug)]
pub struct StageIdArgs {
    /// Stage id
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 16),
    ColumnDef::new("name", "NAME", 30),
    ColumnDef::new("due", "DUE", 10),
    ColumnDef::new("status", "STATUS", 12),
    ColumnDef::new("employees", "EMPLOYEES", 10),
];

/// Run a stage subcommand
pub fn run(cmd: StageCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StageCommands::List => run_list(global),
        StageCommands::New(args) => run_new(args, global),
        StageCommands::Rm(args) => {
            let id = parse_record_id(&args.id)?;
            let mut ws = open_workspace(global)?;
            remove_record::<Stage>(&mut ws, &id, global)
        }
        StageCommands::Start(args) => run_transition(args, Transition::Start, global),
        StageCommands::Finish(args) => run_transition(args, Transition::Finish, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let store = ws.store();
    let stages = store.list::<Stage>();
    let format = effective_format(global, OutputFormat::Tsv);

    if print_serialized(stages, format)? {
        return Ok(());
    }
    if stages.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No stages found.");
        }
        return Ok(());
    }

    let rows = stages.iter().map(|s| {
        TableRow::new(s.id)
            .cell("id", CellValue::Id(s.id.to_string()))
            .cell("name", CellValue::Text(s.name.clone()))
            .cell("due", CellValue::Date(s.due))
            .cell("status", CellValue::Status(s.status))
            .cell(
                "employees",
                CellValue::Number(store.employees_for(s.id).len() as u64),
            )
    });
    TableFormatter::new(COLUMNS, "stage")
        .quiet(global.quiet)
        .output(rows, format);
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let draft = NewStage {
        name: require_non_empty("name", &args.name)?,
        due: args.due,
    };
    let title = draft.name.clone();

    let mut ws = open_workspace(global)?;
    let id = ws.create(draft);
    print_created(global, "stage", &id, &title);
    Ok(())
}

fn run_transition(args: StageIdArgs, transition: Transition, global: &GlobalOpts) -> Result<()> {
    let id = parse_record_id(&args.id)?;
    let mut ws = open_workspace(global)?;
    let status = ws.transition_stage(id, transition)?;

    if !global.quiet {
        let name = ws
            .store()
            .get::<Stage>(&id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        println!(
            "{} Stage {} ({}) is now {}",
            style("✓").green(),
            style(id).cyan(),
            name,
            style(status).yellow()
        );
    }
    Ok(())
}
