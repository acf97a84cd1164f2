//! `aero employee` command - Employee management

use clap::Subcommand;
use miette::Result;
use serde::Serialize;

use crate::cli::commands::utils::{print_created, print_serialized, remove_record};
use crate::cli::helpers::{effective_format, mask_secret, open_workspace, require_non_empty};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::EmployeeId;
use crate::entities::{AccessLevel, Employee};

#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List employees
    List(ListArgs),

    /// Register a new employee
    New(NewArgs),

    /// Delete an employee (assignments are kept)
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print stored passwords instead of a mask
    #[arg(long)]
    pub show_passwords: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Employee id (chosen by you, must be unique)
    #[arg(long)]
    pub id: String,

    #[arg(long, short = 'n')]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    #[arg(long, short = 'u')]
    pub username: String,

    #[arg(long, short = 'p')]
    pub password: String,

    /// admin (1), engineer (2) or operator (3)
    #[arg(long, short = 'l')]
    pub level: AccessLevel,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Employee id
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 12),
    ColumnDef::new("name", "NAME", 24),
    ColumnDef::new("phone", "PHONE", 16),
    ColumnDef::new("address", "ADDRESS", 24),
    ColumnDef::new("username", "USERNAME", 14),
    ColumnDef::new("password", "PASSWORD", 12),
    ColumnDef::new("level", "LEVEL", 16),
    ColumnDef::new("stages", "STAGES", 8),
];

/// Run an employee subcommand
pub fn run(cmd: EmployeeCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        EmployeeCommands::List(args) => run_list(args, global),
        EmployeeCommands::New(args) => run_new(args, global),
        EmployeeCommands::Rm(args) => {
            let id = EmployeeId::new(require_non_empty("id", &args.id)?);
            let mut ws = open_workspace(global)?;
            remove_record::<Employee>(&mut ws, &id, global)
        }
    }
}

/// Employee as shown in list output, with the password possibly masked
#[derive(Serialize)]
struct EmployeeView<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    stages: usize,
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let ws = open_workspace(global)?;
    let store = ws.store();
    let format = effective_format(global, OutputFormat::Tsv);

    let employees: Vec<Employee> = store
        .list::<Employee>()
        .iter()
        .map(|e| {
            let mut e = e.clone();
            if !args.show_passwords {
                e.password = mask_secret(&e.password);
            }
            e
        })
        .collect();
    let views: Vec<EmployeeView> = employees
        .iter()
        .map(|e| EmployeeView {
            employee: e,
            stages: store.stages_for_employee(&e.id).len(),
        })
        .collect();

    if print_serialized(&views, format)? {
        return Ok(());
    }
    if views.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No employees found.");
        }
        return Ok(());
    }

    let rows = views.iter().map(|v| {
        let e = v.employee;
        TableRow::new(&e.id)
            .cell("id", CellValue::Id(e.id.to_string()))
            .cell("name", CellValue::Text(e.name.clone()))
            .cell("phone", CellValue::Text(e.phone.clone()))
            .cell("address", CellValue::Text(e.address.clone()))
            .cell("username", CellValue::Text(e.username.clone()))
            .cell("password", CellValue::Text(e.password.clone()))
            .cell("level", CellValue::Text(e.level.label().to_string()))
            .cell("stages", CellValue::Number(v.stages as u64))
    });
    TableFormatter::new(COLUMNS, "employee")
        .quiet(global.quiet)
        .output(rows, format);
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let employee = Employee {
        id: EmployeeId::new(require_non_empty("id", &args.id)?),
        name: require_non_empty("name", &args.name)?,
        phone: require_non_empty("phone", &args.phone)?,
        address: require_non_empty("address", &args.address)?,
        username: require_non_empty("username", &args.username)?,
        password: require_non_empty("password", &args.password)?,
        level: args.level,
    };
    let title = format!("{} ({})", employee.name, employee.level.label());

    let mut ws = open_workspace(global)?;
    let id = ws.register_employee(employee)?;
    print_created(global, "employee", &id, &title);
    Ok(())
}
