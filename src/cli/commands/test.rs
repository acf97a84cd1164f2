//! `aero test` command - Quality test management

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{print_created, print_serialized, remove_record};
use crate::cli::helpers::{effective_format, open_workspace, parse_record_id};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Entity;
use crate::entities::{NewTest, Test, TestCategory, TestResult};

#[derive(Subcommand, Debug)]
pub enum TestCommands {
    /// List tests
    List,

    /// Record a test
    New(NewArgs),

    /// Delete a test (associations are kept)
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// electrical, hydraulic or aerodynamic
    #[arg(long, short = 'c')]
    pub category: TestCategory,

    /// approved or rejected
    #[arg(long, short = 'r')]
    pub result: TestResult,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Test id
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 16),
    ColumnDef::new("category", "CATEGORY", 14),
    ColumnDef::new("result", "RESULT", 10),
];

/// Run a test subcommand
pub fn run(cmd: TestCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TestCommands::List => run_list(global),
        TestCommands::New(args) => {
            let draft = NewTest {
                category: args.category,
                result: args.result,
            };
            let mut ws = open_workspace(global)?;
            let id = ws.create(draft);
            let title = ws
                .store()
                .get::<Test>(&id)
                .map(Entity::title)
                .unwrap_or_default();
            print_created(global, "test", &id, &title);
            Ok(())
        }
        TestCommands::Rm(args) => {
            let id = parse_record_id(&args.id)?;
            let mut ws = open_workspace(global)?;
            remove_record::<Test>(&mut ws, &id, global)
        }
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let tests = ws.store().list::<Test>();
    let format = effective_format(global, OutputFormat::Tsv);

    if print_serialized(tests, format)? {
        return Ok(());
    }
    if tests.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No tests found.");
        }
        return Ok(());
    }

    let rows = tests.iter().map(|t| {
        TableRow::new(t.id)
            .cell("id", CellValue::Id(t.id.to_string()))
            .cell("category", CellValue::Text(t.category.to_string()))
            .cell("result", CellValue::Verdict(t.result))
    });
    TableFormatter::new(COLUMNS, "test")
        .quiet(global.quiet)
        .output(rows, format);
    Ok(())
}
