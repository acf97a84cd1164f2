//! CLI command implementations

pub mod utils;

pub mod aircraft;
pub mod completions;
pub mod config;
pub mod employee;
pub mod line;
pub mod link;
pub mod part;
pub mod report;
pub mod stage;
pub mod test;
