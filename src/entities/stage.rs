//! Stage entity type - A production step with a deadline and a status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};
use crate::core::identity::RecordId;
use crate::core::store::Draft;

/// Production status of a stage
///
/// Progresses `Pending -> InProgress -> Completed`; see [`crate::core::workflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum StageStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl StageStatus {
    /// Label used on production reports
    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Pending => "Pendente",
            StageStatus::InProgress => "Em Andamento",
            StageStatus::Completed => "Concluída",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Pending => write!(f, "pending"),
            StageStatus::InProgress => write!(f, "in_progress"),
            StageStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for StageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(StageStatus::Pending),
            "in_progress" => Ok(StageStatus::InProgress),
            "completed" => Ok(StageStatus::Completed),
            _ => Err(format!("Unknown stage status: {}", s)),
        }
    }
}

/// A Stage entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: RecordId,
    pub name: String,

    /// Completion deadline
    pub due: NaiveDate,

    /// The only field that changes after creation
    #[serde(default)]
    pub status: StageStatus,
}

impl Entity for Stage {
    type Id = RecordId;
    const KIND: EntityKind = EntityKind::Stage;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

/// Fields of a stage about to be registered; new stages always start pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStage {
    pub name: String,
    pub due: NaiveDate,
}

impl Draft for NewStage {
    type Record = Stage;

    fn into_record(self, id: RecordId) -> Stage {
        Stage {
            id,
            name: self.name,
            due: self.due,
            status: StageStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_new_stage_is_pending() {
        let stage = NewStage {
            name: "Assembly".to_string(),
            due: due(),
        }
        .into_record(RecordId::new(3));

        assert_eq!(stage.status, StageStatus::Pending);
        assert_eq!(stage.title(), "Assembly");
    }

    #[test]
    fn test_stage_serialization() {
        let stage = Stage {
            id: RecordId::new(3),
            name: "Paint".to_string(),
            due: due(),
            status: StageStatus::InProgress,
        };

        let json = serde_json::to_string(&stage).unwrap();
        assert!(json.contains("\"due\":\"2024-03-05\""));
        assert!(json.contains("\"status\":\"in_progress\""));

        let parsed: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stage);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let parsed: Stage =
            serde_json::from_str(r#"{"id":1,"name":"Wiring","due":"2024-01-01"}"#).unwrap();
        assert_eq!(parsed.status, StageStatus::Pending);
    }

    #[test]
    fn test_status_parse_and_labels() {
        assert_eq!(
            "in-progress".parse::<StageStatus>().unwrap(),
            StageStatus::InProgress
        );
        assert_eq!(StageStatus::Completed.label(), "Concluída");
        assert_eq!(StageStatus::InProgress.to_string(), "in_progress");
    }
}
