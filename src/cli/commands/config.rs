//! `aero config` command - Configuration inspection

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::print_serialized;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show,

    /// Show paths to the config and state files
    Path,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let effective = Config {
        data_file: config.data_path(global.data.clone()),
        default_format: config.default_format.clone(),
    };

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_serialized(&effective, format)? {
        return Ok(());
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();
    print_config_value(
        "data_file",
        effective
            .data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .as_deref(),
    );
    print_config_value("default_format", effective.default_format.as_deref());

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Command line (--data, --format)");
    println!("  2. Environment variables (AERO_DATA, AERO_FORMAT)");
    println!("  3. Global config (~/.config/aerocode/config.yaml)");
    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    println!("{}", style("Configuration file paths:").bold());
    println!();
    match Config::global_config_path() {
        Some(path) => {
            println!("  {} {}", style("Config:").cyan(), path.display());
            print_exists(path.exists());
        }
        None => println!("  {} {}", style("Config:").cyan(), style("(unavailable)").dim()),
    }

    println!();
    match config.data_path(global.data.clone()) {
        Some(path) => {
            println!("  {} {}", style("State:").cyan(), path.display());
            print_exists(path.exists());
        }
        None => println!("  {} {}", style("State:").cyan(), style("(unavailable)").dim()),
    }
    Ok(())
}

fn print_exists(exists: bool) {
    if exists {
        println!("          {}", style("(exists)").green());
    } else {
        println!("          {}", style("(not created)").dim());
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {} = {}", style(key).cyan(), style(v).yellow()),
        None => println!("  {} = {}", style(key).cyan(), style("(not set)").dim()),
    }
}
