//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    aircraft::AircraftCommands, completions::CompletionsArgs, config::ConfigCommands,
    employee::EmployeeCommands, line::LineArgs, link::LinkCommands, part::PartCommands,
    report::ReportArgs, stage::StageCommands, test::TestCommands,
};

#[derive(Parser)]
#[command(name = "aero")]
#[command(author, version, about = "Aircraft production tracking")]
#[command(long_about = "Register aircraft, parts, production stages, quality tests and employees, link them together, and generate the final production report for an aircraft.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// State file (default: platform data dir, or AERO_DATA)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aircraft management
    #[command(subcommand)]
    Aircraft(AircraftCommands),

    /// Part management
    #[command(subcommand)]
    Part(PartCommands),

    /// Production stage management
    #[command(subcommand)]
    Stage(StageCommands),

    /// Quality test management
    #[command(subcommand)]
    Test(TestCommands),

    /// Employee management
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Manage associations between entities
    #[command(subcommand)]
    Link(LinkCommands),

    /// Show the production line of an aircraft
    Line(LineArgs),

    /// Generate the final production report for an aircraft
    Report(ReportArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
