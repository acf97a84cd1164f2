//! Aircraft entity type - An airframe under production

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};
use crate::core::identity::RecordId;
use crate::core::store::Draft;

/// Aircraft category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftCategory {
    Commercial,
    Military,
}

impl AircraftCategory {
    /// Label used on production reports
    pub fn label(&self) -> &'static str {
        match self {
            AircraftCategory::Commercial => "Comercial",
            AircraftCategory::Military => "Militar",
        }
    }
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AircraftCategory::Commercial => write!(f, "commercial"),
            AircraftCategory::Military => write!(f, "military"),
        }
    }
}

impl std::str::FromStr for AircraftCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commercial" | "comercial" => Ok(AircraftCategory::Commercial),
            "military" | "militar" => Ok(AircraftCategory::Military),
            _ => Err(format!(
                "Invalid aircraft category: {}. Use 'commercial' or 'military'",
                s
            )),
        }
    }
}

/// An Aircraft entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Unique identifier
    pub id: RecordId,

    /// Registration code (intended unique, not enforced)
    pub code: String,

    /// Aircraft model
    pub model: String,

    pub category: AircraftCategory,

    /// Passenger capacity
    pub capacity: u32,

    /// Range in kilometres
    pub range_km: u32,
}

impl Entity for Aircraft {
    type Id = RecordId;
    const KIND: EntityKind = EntityKind::Aircraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} ({})", self.code, self.model)
    }
}

/// Fields of an aircraft about to be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAircraft {
    pub code: String,
    pub model: String,
    pub category: AircraftCategory,
    pub capacity: u32,
    pub range_km: u32,
}

impl Draft for NewAircraft {
    type Record = Aircraft;

    fn into_record(self, id: RecordId) -> Aircraft {
        Aircraft {
            id,
            code: self.code,
            model: self.model,
            category: self.category,
            capacity: self.capacity,
            range_km: self.range_km,
        }
    }
}
