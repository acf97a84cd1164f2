//! `aero report` command - Final production report

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::helpers::{open_workspace, require_non_empty, resolve_aircraft};
use crate::cli::GlobalOpts;
use crate::core::report::generate_report;

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Aircraft id or code
    pub aircraft: String,

    /// Customer name
    #[arg(long, short = 'c')]
    pub customer: String,

    /// Delivery date (YYYY-MM-DD is printed as DD/MM/YYYY)
    #[arg(long, short = 'd')]
    pub delivery: String,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs, global: &GlobalOpts) -> Result<()> {
    let customer = require_non_empty("customer", &args.customer)?;
    let delivery = require_non_empty("delivery", &args.delivery)?;

    let ws = open_workspace(global)?;
    let aircraft = resolve_aircraft(ws.store(), &args.aircraft)?;
    let content = generate_report(ws.store(), aircraft, &customer, &delivery)?;

    write_output(&content, args.output, global.quiet)
}

fn write_output(content: &str, output_path: Option<PathBuf>, quiet: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
            if !quiet {
                println!(
                    "{} Report written to {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
        }
        None => println!("{}", content),
    }
    Ok(())
}
