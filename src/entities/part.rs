//! Part entity type - Components built in-house or sourced abroad

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};
use crate::core::identity::RecordId;
use crate::core::store::Draft;

/// Where a part comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOrigin {
    Domestic,
    Imported,
}

impl PartOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            PartOrigin::Domestic => "Nacional",
            PartOrigin::Imported => "Importada",
        }
    }
}

impl std::fmt::Display for PartOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartOrigin::Domestic => write!(f, "domestic"),
            PartOrigin::Imported => write!(f, "imported"),
        }
    }
}

impl std::str::FromStr for PartOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "domestic" | "nacional" => Ok(PartOrigin::Domestic),
            "imported" | "importada" => Ok(PartOrigin::Imported),
            _ => Err(format!(
                "Invalid part origin: {}. Use 'domestic' or 'imported'",
                s
            )),
        }
    }
}

/// A Part entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: RecordId,
    pub name: String,
    pub origin: PartOrigin,
    /// Supplier name
    pub supplier: String,
}

impl Entity for Part {
    type Id = RecordId;
    const KIND: EntityKind = EntityKind::Part;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

/// Fields of a part about to be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPart {
    pub name: String,
    pub origin: PartOrigin,
    pub supplier: String,
}

impl Draft for NewPart {
    type Record = Part;

    fn into_record(self, id: RecordId) -> Part {
        Part {
            id,
            name: self.name,
            origin: self.origin,
            supplier: self.supplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_creation() {
        let part = NewPart {
            name: "Wing".to_string(),
            origin: PartOrigin::Domestic,
            supplier: "Acme".to_string(),
        }
        .into_record(RecordId::new(9));

        assert_eq!(part.id, RecordId::new(9));
        assert_eq!(part.title(), "Wing");
        assert_eq!(Part::KIND, EntityKind::Part);
    }

    #[test]
    fn test_origin_parse() {
        assert_eq!("imported".parse::<PartOrigin>().unwrap(), PartOrigin::Imported);
        assert_eq!("Nacional".parse::<PartOrigin>().unwrap(), PartOrigin::Domestic);
        assert!("local".parse::<PartOrigin>().is_err());
    }
}
