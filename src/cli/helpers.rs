//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use clap::ValueEnum;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::RecordId;
use crate::core::slot::FileSlot;
use crate::core::store::Store;
use crate::core::workspace::Workspace;
use crate::core::Config;
use crate::entities::Aircraft;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Counts characters, not bytes, so accented names are safe to cut.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Reject blank text fields before anything is stored
pub fn require_non_empty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(miette::miette!("{} cannot be empty", field));
    }
    Ok(trimmed.to_string())
}

/// Replace a secret with a fixed-width mask
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

/// Parse a numeric record id given on the command line
pub fn parse_record_id(s: &str) -> Result<RecordId> {
    RecordId::parse(s).map_err(|e| miette::miette!("{}", e))
}

/// Resolve an aircraft reference: numeric id first, then exact code
pub fn resolve_aircraft(store: &Store, reference: &str) -> Result<RecordId> {
    if let Ok(id) = RecordId::parse(reference) {
        if store.contains::<Aircraft>(&id) {
            return Ok(id);
        }
    }

    let reference = reference.trim();
    store
        .list::<Aircraft>()
        .iter()
        .find(|a| a.code == reference)
        .map(|a| a.id)
        .ok_or_else(|| {
            miette::miette!(
                "No aircraft found matching '{}'. Use 'aero aircraft list' to see registered aircraft",
                reference
            )
        })
}

/// Open the workspace named by `--data`, the config file, or the platform default
pub fn open_workspace(global: &GlobalOpts) -> Result<Workspace<FileSlot>> {
    let config = Config::load();
    let path = config.data_path(global.data.clone()).ok_or_else(|| {
        miette::miette!("Could not determine a location for the state file. Pass --data or set AERO_DATA")
    })?;
    tracing::debug!(path = %path.display(), "opening workspace");
    Ok(Workspace::open(FileSlot::new(path)))
}

/// Resolve `auto` against the configured default, then against `fallback`
pub fn effective_format(global: &GlobalOpts, fallback: OutputFormat) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    Config::load()
        .default_format
        .and_then(|f| OutputFormat::from_str(&f, true).ok())
        .filter(|f| *f != OutputFormat::Auto)
        .unwrap_or(fallback)
}
