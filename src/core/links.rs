//! Associations between entities and the views derived from them
//!
//! Four independent many-to-many link sets connect the entity collections:
//!
//! | Kind | Left | Right |
//! |---|---|---|
//! | `part-aircraft` | Part | Aircraft |
//! | `stage-aircraft` | Stage | Aircraft |
//! | `test-aircraft` | Test | Aircraft |
//! | `employee-stage` | Employee | Stage |
//!
//! Links reference ids by value. Deleting an entity never touches the link
//! sets; resolved views simply drop pairs whose endpoint no longer exists.

use clap::ValueEnum;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::core::entity::{Entity, EntityKind};
use crate::core::identity::{EmployeeId, RecordId};
use crate::core::store::{Store, Stored};
use crate::entities::{Aircraft, Employee, Part, Stage, Test};

/// The four association kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Part used on an aircraft
    PartAircraft,
    /// Stage in an aircraft's production plan
    StageAircraft,
    /// Test performed on an aircraft
    TestAircraft,
    /// Employee assigned to a stage
    EmployeeStage,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::PartAircraft => "part-aircraft",
            LinkKind::StageAircraft => "stage-aircraft",
            LinkKind::TestAircraft => "test-aircraft",
            LinkKind::EmployeeStage => "employee-stage",
        }
    }

    pub fn all() -> &'static [LinkKind] {
        &[
            LinkKind::PartAircraft,
            LinkKind::StageAircraft,
            LinkKind::TestAircraft,
            LinkKind::EmployeeStage,
        ]
    }

    /// Entity kinds on the (left, right) side of this link
    pub fn endpoints(&self) -> (EntityKind, EntityKind) {
        match self {
            LinkKind::PartAircraft => (EntityKind::Part, EntityKind::Aircraft),
            LinkKind::StageAircraft => (EntityKind::Stage, EntityKind::Aircraft),
            LinkKind::TestAircraft => (EntityKind::Test, EntityKind::Aircraft),
            LinkKind::EmployeeStage => (EntityKind::Employee, EntityKind::Stage),
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when associating entities
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum LinkError {
    #[error("this association already exists: {kind} {left} → {right}")]
    #[diagnostic(code(aero::link::duplicate))]
    DuplicateAssociation {
        kind: LinkKind,
        left: String,
        right: String,
    },
}

/// An insertion-ordered set of (left, right) id pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet<L, R> {
    pairs: Vec<(L, R)>,
}

impl<L, R> Default for LinkSet<L, R> {
    fn default() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl<L: PartialEq, R: PartialEq> LinkSet<L, R> {
    pub fn contains(&self, left: &L, right: &R) -> bool {
        self.pairs.iter().any(|(l, r)| l == left && r == right)
    }

    /// Append a pair unless an identical one is already stored.
    ///
    /// Returns `false` when the pair was a duplicate.
    pub fn insert(&mut self, left: L, right: R) -> bool {
        if self.contains(&left, &right) {
            return false;
        }
        self.pairs.push((left, right));
        true
    }

    pub fn pairs(&self) -> &[(L, R)] {
        &self.pairs
    }

    /// Left ids paired with `right`, in insertion order
    pub fn lefts_for(&self, right: &R) -> Vec<&L> {
        self.pairs
            .iter()
            .filter(|(_, r)| r == right)
            .map(|(l, _)| l)
            .collect()
    }

    /// Right ids paired with `left`, in insertion order
    pub fn rights_for(&self, left: &L) -> Vec<&R> {
        self.pairs
            .iter()
            .filter(|(l, _)| l == left)
            .map(|(_, r)| r)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The four link sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Associations {
    pub parts_aircraft: LinkSet<RecordId, RecordId>,
    pub stages_aircraft: LinkSet<RecordId, RecordId>,
    pub tests_aircraft: LinkSet<RecordId, RecordId>,
    pub employees_stages: LinkSet<EmployeeId, RecordId>,
}

impl Associations {
    pub fn len(&self, kind: LinkKind) -> usize {
        match kind {
            LinkKind::PartAircraft => self.parts_aircraft.len(),
            LinkKind::StageAircraft => self.stages_aircraft.len(),
            LinkKind::TestAircraft => self.tests_aircraft.len(),
            LinkKind::EmployeeStage => self.employees_stages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        LinkKind::all().iter().all(|k| self.len(*k) == 0)
    }

    /// Every numeric id referenced by a stored pair, resolved or not
    pub fn record_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        let aircraft_links = [
            &self.parts_aircraft,
            &self.stages_aircraft,
            &self.tests_aircraft,
        ];
        aircraft_links
            .into_iter()
            .flat_map(|set| set.pairs().iter().flat_map(|(l, r)| [*l, *r]))
            .chain(self.employees_stages.pairs().iter().map(|(_, stage)| *stage))
    }
}

/// One stored association joined with both endpoints
///
/// `left`/`right` hold the endpoint titles, or `None` when the referenced
/// entity has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRow {
    pub kind: LinkKind,
    pub left_id: String,
    pub left: Option<String>,
    pub right_id: String,
    pub right: Option<String>,
}

impl LinkRow {
    /// True when at least one endpoint no longer exists
    pub fn is_dangling(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }
}

/// Everything linked to one aircraft
#[derive(Debug, Clone, Serialize)]
pub struct ProductionLine<'a> {
    pub aircraft: &'a Aircraft,
    pub parts: Vec<&'a Part>,
    pub stages: Vec<&'a Stage>,
    pub tests: Vec<&'a Test>,
}

impl Store {
    /// Link a part to an aircraft
    pub fn associate_part(&mut self, part: RecordId, aircraft: RecordId) -> Result<(), LinkError> {
        let inserted = self.links.parts_aircraft.insert(part, aircraft);
        link_outcome(LinkKind::PartAircraft, inserted, &part, &aircraft)
    }

    /// Add a stage to an aircraft's production plan
    pub fn associate_stage(
        &mut self,
        stage: RecordId,
        aircraft: RecordId,
    ) -> Result<(), LinkError> {
        let inserted = self.links.stages_aircraft.insert(stage, aircraft);
        link_outcome(LinkKind::StageAircraft, inserted, &stage, &aircraft)
    }

    /// Record a test against an aircraft
    pub fn associate_test(&mut self, test: RecordId, aircraft: RecordId) -> Result<(), LinkError> {
        let inserted = self.links.tests_aircraft.insert(test, aircraft);
        link_outcome(LinkKind::TestAircraft, inserted, &test, &aircraft)
    }

    /// Assign an employee to a stage
    pub fn associate_employee(
        &mut self,
        employee: EmployeeId,
        stage: RecordId,
    ) -> Result<(), LinkError> {
        let inserted = self
            .links
            .employees_stages
            .insert(employee.clone(), stage);
        link_outcome(LinkKind::EmployeeStage, inserted, &employee, &stage)
    }

    pub fn parts_for(&self, aircraft: RecordId) -> Vec<&Part> {
        self.resolve::<Part>(self.links.parts_aircraft.lefts_for(&aircraft))
    }

    pub fn stages_for(&self, aircraft: RecordId) -> Vec<&Stage> {
        self.resolve::<Stage>(self.links.stages_aircraft.lefts_for(&aircraft))
    }

    pub fn tests_for(&self, aircraft: RecordId) -> Vec<&Test> {
        self.resolve::<Test>(self.links.tests_aircraft.lefts_for(&aircraft))
    }

    pub fn aircraft_for_part(&self, part: RecordId) -> Vec<&Aircraft> {
        self.resolve::<Aircraft>(self.links.parts_aircraft.rights_for(&part))
    }

    pub fn aircraft_for_stage(&self, stage: RecordId) -> Vec<&Aircraft> {
        self.resolve::<Aircraft>(self.links.stages_aircraft.rights_for(&stage))
    }

    pub fn aircraft_for_test(&self, test: RecordId) -> Vec<&Aircraft> {
        self.resolve::<Aircraft>(self.links.tests_aircraft.rights_for(&test))
    }

    /// Employees assigned to a stage
    pub fn employees_for(&self, stage: RecordId) -> Vec<&Employee> {
        self.resolve::<Employee>(self.links.employees_stages.lefts_for(&stage))
    }

    /// Stages an employee is assigned to
    pub fn stages_for_employee(&self, employee: &EmployeeId) -> Vec<&Stage> {
        self.resolve::<Stage>(self.links.employees_stages.rights_for(employee))
    }

    /// Per-aircraft rollup of parts, stages and tests.
    ///
    /// Returns `None` when the aircraft does not exist.
    pub fn production_line(&self, aircraft: RecordId) -> Option<ProductionLine<'_>> {
        let record = self.get::<Aircraft>(&aircraft)?;
        Some(ProductionLine {
            aircraft: record,
            parts: self.parts_for(aircraft),
            stages: self.stages_for(aircraft),
            tests: self.tests_for(aircraft),
        })
    }

    /// Every stored pair of one kind joined with its endpoints, in insertion order
    pub fn link_rows(&self, kind: LinkKind) -> Vec<LinkRow> {
        match kind {
            LinkKind::PartAircraft => {
                self.join::<Part, Aircraft>(kind, self.links.parts_aircraft.pairs())
            }
            LinkKind::StageAircraft => {
                self.join::<Stage, Aircraft>(kind, self.links.stages_aircraft.pairs())
            }
            LinkKind::TestAircraft => {
                self.join::<Test, Aircraft>(kind, self.links.tests_aircraft.pairs())
            }
            LinkKind::EmployeeStage => {
                self.join::<Employee, Stage>(kind, self.links.employees_stages.pairs())
            }
        }
    }

    /// Association rows whose endpoint has been deleted, across all kinds
    pub fn dangling_links(&self) -> Vec<LinkRow> {
        LinkKind::all()
            .iter()
            .flat_map(|kind| self.link_rows(*kind))
            .filter(LinkRow::is_dangling)
            .collect()
    }

    /// Map ids to records, silently skipping ids that no longer resolve
    fn resolve<'a, T: Stored>(&'a self, ids: Vec<&T::Id>) -> Vec<&'a T> {
        ids.into_iter().filter_map(|id| self.get::<T>(id)).collect()
    }

    fn join<L: Stored, R: Stored>(&self, kind: LinkKind, pairs: &[(L::Id, R::Id)]) -> Vec<LinkRow> {
        pairs
            .iter()
            .map(|(left_id, right_id)| LinkRow {
                kind,
                left_id: left_id.to_string(),
                left: self.get::<L>(left_id).map(Entity::title),
                right_id: right_id.to_string(),
                right: self.get::<R>(right_id).map(Entity::title),
            })
            .collect()
    }
}

fn link_outcome(
    kind: LinkKind,
    inserted: bool,
    left: &dyn fmt::Display,
    right: &dyn fmt::Display,
) -> Result<(), LinkError> {
    if inserted {
        debug!(%kind, %left, %right, "associated");
        Ok(())
    } else {
        Err(LinkError::DuplicateAssociation {
            kind,
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}
