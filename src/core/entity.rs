//! Entity trait - common interface for all entity types

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Common trait for all Aerocode entities
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Identity type (numeric for most kinds, caller-supplied for employees)
    type Id: Clone + Eq + fmt::Display + fmt::Debug;

    /// Which collection this entity lives in
    const KIND: EntityKind;

    /// Get the entity's unique ID
    fn id(&self) -> &Self::Id;

    /// Short human-readable label used in joined listings
    fn title(&self) -> String;
}

/// The five entity kinds held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Aircraft,
    Part,
    Stage,
    Test,
    Employee,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Aircraft => "aircraft",
            EntityKind::Part => "part",
            EntityKind::Stage => "stage",
            EntityKind::Test => "test",
            EntityKind::Employee => "employee",
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Aircraft,
            EntityKind::Part,
            EntityKind::Stage,
            EntityKind::Test,
            EntityKind::Employee,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aircraft" => Ok(EntityKind::Aircraft),
            "part" => Ok(EntityKind::Part),
            "stage" => Ok(EntityKind::Stage),
            "test" => Ok(EntityKind::Test),
            "employee" => Ok(EntityKind::Employee),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_parse() {
        for kind in EntityKind::all() {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!("wing".parse::<EntityKind>().is_err());
    }
}
