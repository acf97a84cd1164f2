//! Shared utilities for CLI commands

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Entity;
use crate::core::slot::FileSlot;
use crate::core::store::Stored;
use crate::core::workspace::Workspace;

/// Print a value as JSON or YAML.
///
/// Returns `false` for any other format so the caller can fall through to
/// its table or text rendering.
pub fn print_serialized<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).into_diagnostic()?;
            println!("{}", json);
            Ok(true)
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(value).into_diagnostic()?;
            print!("{}", yaml);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Confirmation line for a newly created record
pub fn print_created(global: &GlobalOpts, kind: &str, id: &dyn std::fmt::Display, title: &str) {
    if global.format == OutputFormat::Id {
        println!("{}", id);
        return;
    }
    if global.quiet {
        return;
    }
    println!(
        "{} Created {} {}",
        style("✓").green(),
        kind,
        style(id).cyan()
    );
    println!("   {}", style(title).yellow());
}

/// Delete one record and report the outcome.
///
/// An unknown id is not an error; it is reported and nothing changes.
pub fn remove_record<T: Stored>(
    ws: &mut Workspace<FileSlot>,
    id: &T::Id,
    global: &GlobalOpts,
) -> Result<()> {
    let title = ws.store().get::<T>(id).map(Entity::title);
    let removed = ws.delete::<T>(id);

    if global.quiet {
        return Ok(());
    }
    match title {
        Some(title) if removed => println!(
            "{} Removed {} {} ({})",
            style("✓").green(),
            T::KIND,
            style(id).cyan(),
            title
        ),
        _ => println!(
            "{} No {} with id {}; nothing removed",
            style("!").yellow(),
            T::KIND,
            id
        ),
    }
    Ok(())
}
