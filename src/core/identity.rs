//! Entity identity system
//!
//! Aircraft, parts, stages and tests carry a numeric [`RecordId`] drawn from a
//! clock-like source (milliseconds since the Unix epoch). Employees carry a
//! caller-supplied [`EmployeeId`] (badge number, registration code, ...).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric identity of an aircraft, part, stage or test
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw numeric id
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse a RecordId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }

    /// Generate the next id after `floor`.
    ///
    /// Uses the current time in milliseconds, bumped past `floor` so ids stay
    /// strictly increasing even when two records are created in the same
    /// millisecond or the clock steps backwards.
    pub fn next_after(floor: Option<RecordId>) -> Self {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match floor {
            Some(last) if last.0 >= now => Self(last.0 + 1),
            _ => Self(now),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdParseError::Empty);
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdParseError::NotNumeric(s.to_string()))
    }
}

/// Caller-supplied identity of an employee
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for EmployeeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdParseError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Errors that can occur when parsing entity IDs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("entity ID is empty")]
    Empty,

    #[error("invalid entity ID '{0}': expected a number")]
    NotNumeric(String),
}
