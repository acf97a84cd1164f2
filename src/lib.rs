//! Aerocode: aircraft production tracking
//!
//! Registers aircraft, parts, production stages, quality tests and employees,
//! links them together, and renders the final production report for an
//! aircraft. State lives in a single JSON file.

pub mod cli;
pub mod core;
pub mod entities;
