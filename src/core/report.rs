//! Final production report
//!
//! Pure text rendering over a [`Store`]; writing the result anywhere is the
//! caller's business.

use std::fmt::Write;

use miette::Diagnostic;
use thiserror::Error;

use crate::core::identity::RecordId;
use crate::core::store::Store;
use crate::entities::Aircraft;

const RULE: &str = "=========================================";

/// Errors raised while building a report
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ReportError {
    #[error("aircraft {0} not found")]
    #[diagnostic(
        code(aero::report::aircraft_not_found),
        help("use 'aero aircraft list' to see registered aircraft")
    )]
    AircraftNotFound(RecordId),
}

/// Reorder a `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Anything that does not split into exactly three `-` separated parts is
/// returned unchanged.
pub fn format_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => date.to_string(),
    }
}

/// Render the final production report for one aircraft
pub fn generate_report(
    store: &Store,
    aircraft: RecordId,
    customer: &str,
    delivery: &str,
) -> Result<String, ReportError> {
    let record = store
        .get::<Aircraft>(&aircraft)
        .ok_or(ReportError::AircraftNotFound(aircraft))?;

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render(&mut out, store, record, customer, delivery);
    Ok(out)
}

fn render(
    out: &mut String,
    store: &Store,
    aircraft: &Aircraft,
    customer: &str,
    delivery: &str,
) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "    RELATÓRIO FINAL DE PRODUÇÃO")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Cliente: {}", customer)?;
    writeln!(out, "Data de Entrega: {}", format_date(delivery))?;
    writeln!(out)?;

    writeln!(out, "--- Ficha Técnica da Aeronave ---")?;
    writeln!(out, "Código: {}", aircraft.code)?;
    writeln!(out, "Modelo: {}", aircraft.model)?;
    writeln!(out, "Tipo: {}", aircraft.category.label())?;
    writeln!(out, "Capacidade: {} passageiros", aircraft.capacity)?;
    writeln!(out, "Alcance: {} km", aircraft.range_km)?;
    writeln!(out)?;

    writeln!(out, "--- Peças Associadas ---")?;
    let parts = store.parts_for(aircraft.id);
    if parts.is_empty() {
        writeln!(out, "Nenhuma peça associada.")?;
    }
    for part in parts {
        writeln!(
            out,
            "- {} (Fornecedor: {}) - Status: Em Produção",
            part.name, part.supplier
        )?;
    }
    writeln!(out)?;

    writeln!(out, "--- Plano de Produção (Etapas) ---")?;
    let stages = store.stages_for(aircraft.id);
    if stages.is_empty() {
        writeln!(out, "Nenhuma etapa associada.")?;
    }
    for stage in stages {
        writeln!(
            out,
            "- {} (Prazo: {}) - Status: {}",
            stage.name,
            format_date(&stage.due.to_string()),
            stage.status.label()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "--- Testes Realizados ---")?;
    let tests = store.tests_for(aircraft.id);
    if tests.is_empty() {
        writeln!(out, "Nenhum teste associado.")?;
    }
    for test in tests {
        writeln!(
            out,
            "- Teste {}: {}",
            test.category.label(),
            test.result.label()
        )?;
    }

    write!(out, "\n{}", RULE)
}
