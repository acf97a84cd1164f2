//! Employee entity type - Staff assigned to production stages

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};
use crate::core::identity::EmployeeId;

/// Access level
///
/// Recorded for display only; no command is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Admin,
    Engineer,
    Operator,
}

impl AccessLevel {
    /// Numbered label as shown on the employee roster
    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::Admin => "1 - Admin",
            AccessLevel::Engineer => "2 - Engenheiro",
            AccessLevel::Operator => "3 - Operador",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Admin => write!(f, "admin"),
            AccessLevel::Engineer => write!(f, "engineer"),
            AccessLevel::Operator => write!(f, "operator"),
        }
    }
}

impl std::str::FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" | "1" => Ok(AccessLevel::Admin),
            "engineer" | "engenheiro" | "2" => Ok(AccessLevel::Engineer),
            "operator" | "operador" | "3" => Ok(AccessLevel::Operator),
            _ => Err(format!(
                "Invalid access level: {}. Use admin, engineer, or operator",
                s
            )),
        }
    }
}

/// An Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-supplied identifier
    pub id: EmployeeId,
    pub name: String,
    pub phone: String,
    pub address: String,

    /// Login name
    pub username: String,

    /// Login secret, stored in plaintext
    pub password: String,

    pub level: AccessLevel,
}

impl Entity for Employee {
    type Id = EmployeeId;
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> &EmployeeId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_roundtrip() {
        let employee = Employee {
            id: EmployeeId::new("E-7"),
            name: "Ana".to_string(),
            phone: "555-0101".to_string(),
            address: "Hangar 2".to_string(),
            username: "ana".to_string(),
            password: "secret".to_string(),
            level: AccessLevel::Engineer,
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"level\":\"engineer\""));
        let parsed: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, employee);
        assert_eq!(parsed.title(), "Ana");
    }

    #[test]
    fn test_access_level_parse() {
        assert_eq!("2".parse::<AccessLevel>().unwrap(), AccessLevel::Engineer);
        assert_eq!("Operador".parse::<AccessLevel>().unwrap(), AccessLevel::Operator);
        assert!("root".parse::<AccessLevel>().is_err());
        assert_eq!(AccessLevel::Admin.label(), "1 - Admin");
    }
}
