//! Table formatting utilities for CLI list commands
//!
//! Every `list` command builds [`TableRow`]s and hands them to a
//! [`TableFormatter`], which renders TSV, CSV, markdown or bare ids.

use std::fmt::Write;

use chrono::NaiveDate;
use console::style;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;
use crate::entities::{StageStatus, TestResult};

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Record id (cyan)
    Id(String),
    /// Plain text, truncated to the column width in TSV
    Text(String),
    /// Stage status with color coding
    Status(StageStatus),
    /// Test verdict with color coding
    Verdict(TestResult),
    Date(NaiveDate),
    Number(u64),
    /// Placeholder for an unresolved reference
    Missing,
}

impl CellValue {
    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => format!("{:<width$}", style(id).cyan(), width = width),
            CellValue::Text(s) => {
                format!("{:<width$}", truncate_str(s, width), width = width)
            }
            CellValue::Status(status) => {
                let s = status.to_string();
                let styled = match status {
                    StageStatus::Pending => style(s).dim(),
                    StageStatus::InProgress => style(s).yellow(),
                    StageStatus::Completed => style(s).green(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Verdict(result) => {
                let s = result.to_string();
                let styled = match result {
                    TestResult::Approved => style(s).green(),
                    TestResult::Rejected => style(s).red().bold(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Date(d) => format!("{:<width$}", d.format("%Y-%m-%d"), width = width),
            CellValue::Number(n) => format!("{:>width$}", n, width = width),
            CellValue::Missing => {
                format!("{:<width$}", style("(missing)").red().dim(), width = width)
            }
        }
    }

    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            other => escape_csv(&other.raw()),
        }
    }

    pub fn format_md(&self) -> String {
        match self {
            CellValue::Missing => "*(missing)*".to_string(),
            other => other.raw().replace('|', "\\|"),
        }
    }

    /// Unstyled text
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(id) => id.clone(),
            CellValue::Text(s) => s.clone(),
            CellValue::Status(status) => status.to_string(),
            CellValue::Verdict(result) => result.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Missing => "(missing)".to_string(),
        }
    }

    pub fn display_width(&self) -> usize {
        self.raw().chars().count()
    }
}

/// Column definition: key, header, maximum width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// One row of a list table
pub struct TableRow {
    pub id: String,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
    show_summary: bool,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
            show_summary: true,
        }
    }

    /// Drop the trailing "N found" line
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_summary = !quiet;
        self
    }

    pub fn output<I>(&self, rows: I, format: OutputFormat)
    where
        I: IntoIterator<Item = TableRow>,
    {
        let rows: Vec<TableRow> = rows.into_iter().collect();
        print!("{}", self.render(&rows, format));
    }

    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> String {
        match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => self.render_md(rows),
            OutputFormat::Id => rows.iter().map(|r| format!("{}\n", r.id)).collect(),
            _ => self.render_tsv(rows),
        }
    }

    fn widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                col.header.len().max(content).min(col.width)
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[TableRow]) -> String {
        let widths = self.widths(rows);
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", style(col.header).bold(), width = *w))
            .collect();
        let _ = writeln!(out, "{}", header.join(" ").trim_end());

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(total));

        for row in rows {
            let parts: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, w)| match row.get(col.key) {
                    Some(value) => value.format_tsv(*w),
                    None => format!("{:<width$}", "-", width = *w),
                })
                .collect();
            let _ = writeln!(out, "{}", parts.join(" ").trim_end());
        }

        if self.show_summary {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} {}(s) found.",
                style(rows.len()).cyan(),
                self.entity_name
            );
        }
        out
    }

    fn render_csv(&self, rows: &[TableRow]) -> String {
        let mut out = String::new();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.key).collect();
        let _ = writeln!(out, "{}", headers.join(","));

        for row in rows {
            let values: Vec<String> = self
                .columns
                .iter()
                .map(|col| row.get(col.key).map(|v| v.format_csv()).unwrap_or_default())
                .collect();
            let _ = writeln!(out, "{}", values.join(","));
        }
        out
    }

    fn render_md(&self, rows: &[TableRow]) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().map(|c| c.header.to_string()));
        for row in rows {
            builder.push_record(self.columns.iter().map(|col| {
                row.get(col.key)
                    .map(|v| v.format_md())
                    .unwrap_or_else(|| "-".to_string())
            }));
        }
        format!("{}\n", builder.build().with(Style::markdown()))
    }
}
