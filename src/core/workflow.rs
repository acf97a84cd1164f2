//! Stage status workflow
//!
//! ```text
//! Pending --start--> InProgress --finish--> Completed
//! ```
//!
//! There is no way back and no way to skip `InProgress`. Every other request
//! is rejected with [`WorkflowError::IllegalTransition`].

use clap::ValueEnum;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::identity::RecordId;
use crate::core::store::{Store, Stored};
use crate::entities::{Stage, StageStatus};

/// A stage transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Pending -> InProgress
    Start,
    /// InProgress -> Completed
    Finish,
}

impl Transition {
    /// Status a stage must be in for this transition
    pub fn source(&self) -> StageStatus {
        match self {
            Transition::Start => StageStatus::Pending,
            Transition::Finish => StageStatus::InProgress,
        }
    }

    /// Status a stage ends up in
    pub fn target(&self) -> StageStatus {
        match self {
            Transition::Start => StageStatus::InProgress,
            Transition::Finish => StageStatus::Completed,
        }
    }

    /// Apply this transition to a status
    pub fn apply(&self, from: StageStatus) -> Result<StageStatus, WorkflowError> {
        if from == self.source() {
            Ok(self.target())
        } else {
            Err(WorkflowError::IllegalTransition {
                from,
                to: self.target(),
            })
        }
    }

    /// The single legal next action for a stage, if any
    pub fn next_for(status: StageStatus) -> Option<Transition> {
        match status {
            StageStatus::Pending => Some(Transition::Start),
            StageStatus::InProgress => Some(Transition::Finish),
            StageStatus::Completed => None,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Start => write!(f, "start"),
            Transition::Finish => write!(f, "finish"),
        }
    }
}

/// Errors that can occur during stage transitions
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Invalid status transition: {from} → {to}")]
    #[diagnostic(
        code(aero::stage::illegal_transition),
        help("stages move pending → in_progress → completed, one step at a time")
    )]
    IllegalTransition { from: StageStatus, to: StageStatus },

    #[error("stage {0} not found")]
    #[diagnostic(code(aero::stage::not_found))]
    StageNotFound(RecordId),
}

impl Store {
    /// Move a stage along the workflow, touching only its status.
    ///
    /// Returns the new status.
    pub fn transition_stage(
        &mut self,
        id: RecordId,
        transition: Transition,
    ) -> Result<StageStatus, WorkflowError> {
        let stage = Stage::records_mut(self)
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(WorkflowError::StageNotFound(id))?;

        let next = transition.apply(stage.status)?;
        debug!(%id, from = %stage.status, to = %next, "stage transition");
        stage.status = next;
        Ok(next)
    }

    /// Pending -> InProgress
    pub fn start_stage(&mut self, id: RecordId) -> Result<StageStatus, WorkflowError> {
        self.transition_stage(id, Transition::Start)
    }

    /// InProgress -> Completed
    pub fn finish_stage(&mut self, id: RecordId) -> Result<StageStatus, WorkflowError> {
        self.transition_stage(id, Transition::Finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewStage;
    use chrono::NaiveDate;

    fn store_with_stages(n: usize) -> (Store, Vec<RecordId>) {
        let mut store = Store::new();
        let ids = (0..n)
            .map(|i| {
                store.create(NewStage {
                    name: format!("Stage {}", i),
                    due: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                })
            })
            .collect();
        (store, ids)
    }

    #[test]
    fn test_start_then_finish_completes() {
        let (mut store, ids) = store_with_stages(1);

        assert_eq!(store.start_stage(ids[0]).unwrap(), StageStatus::InProgress);
        assert_eq!(store.finish_stage(ids[0]).unwrap(), StageStatus::Completed);
        assert_eq!(
            store.get::<Stage>(&ids[0]).unwrap().status,
            StageStatus::Completed
        );
    }

    #[test]
    fn test_finish_pending_is_rejected() {
        let (mut store, ids) = store_with_stages(1);
        let before = store.clone();

        let err = store.finish_stage(ids[0]).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::IllegalTransition {
                from: StageStatus::Pending,
                to: StageStatus::Completed,
            }
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_restart_is_rejected() {
        let (mut store, ids) = store_with_stages(1);
        store.start_stage(ids[0]).unwrap();
        assert!(store.start_stage(ids[0]).is_err());

        store.finish_stage(ids[0]).unwrap();
        assert!(store.start_stage(ids[0]).is_err());
        assert!(store.finish_stage(ids[0]).is_err());
    }

    #[test]
    fn test_transition_touches_only_target_stage() {
        let (mut store, ids) = store_with_stages(3);
        store.start_stage(ids[1]).unwrap();

        let statuses: Vec<StageStatus> =
            store.list::<Stage>().iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StageStatus::Pending,
                StageStatus::InProgress,
                StageStatus::Pending
            ]
        );
        assert_eq!(store.get::<Stage>(&ids[1]).unwrap().name, "Stage 1");
    }

    #[test]
    fn test_unknown_stage() {
        let (mut store, _) = store_with_stages(0);
        assert_eq!(
            store.start_stage(RecordId::new(99)).unwrap_err(),
            WorkflowError::StageNotFound(RecordId::new(99))
        );
    }

    #[test]
    fn test_next_action() {
        assert_eq!(
            Transition::next_for(StageStatus::Pending),
            Some(Transition::Start)
        );
        assert_eq!(
            Transition::next_for(StageStatus::InProgress),
            Some(Transition::Finish)
        );
        assert_eq!(Transition::next_for(StageStatus::Completed), None);
    }
}
