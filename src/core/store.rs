//! Entity store - the five entity collections and the association sets
//!
//! [`Store`] is pure data plus the CRUD primitives over it. It does not know
//! about persistence; [`crate::core::workspace::Workspace`] owns a store and
//! saves it after every accepted mutation.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::entity::Entity;
use crate::core::identity::{EmployeeId, RecordId};
use crate::core::links::Associations;
use crate::entities::{Aircraft, Employee, Part, Stage, Test};

/// An entity that lives in one of the [`Store`] collections
pub trait Stored: Entity {
    fn records(store: &Store) -> &Vec<Self>;
    fn records_mut(store: &mut Store) -> &mut Vec<Self>;
}

/// The fields of a numeric-id entity before the store assigns its id
pub trait Draft {
    type Record: Stored<Id = RecordId>;

    fn into_record(self, id: RecordId) -> Self::Record;
}

/// Errors raised by the store itself
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum StoreError {
    #[error("an employee with id '{0}' is already registered")]
    #[diagnostic(
        code(aero::store::duplicate_employee),
        help("employee ids are chosen by you and must be unique; pick another id")
    )]
    DuplicateEmployee(EmployeeId),
}

/// Full state of the production database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    aircraft: Vec<Aircraft>,
    parts: Vec<Part>,
    stages: Vec<Stage>,
    tests: Vec<Test>,
    employees: Vec<Employee>,
    #[serde(flatten)]
    pub(crate) links: Associations,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All records of one kind, in insertion order
    pub fn list<T: Stored>(&self) -> &[T] {
        T::records(self)
    }

    /// Look up a record by identity
    pub fn get<T: Stored>(&self, id: &T::Id) -> Option<&T> {
        T::records(self).iter().find(|r| r.id() == id)
    }

    pub fn contains<T: Stored>(&self, id: &T::Id) -> bool {
        self.get::<T>(id).is_some()
    }

    /// Register a new numeric-id entity and return its id
    pub fn create<D: Draft>(&mut self, draft: D) -> RecordId {
        let id = self.next_id();
        let record = draft.into_record(id);
        let kind = <D::Record as Entity>::KIND;
        debug!(%kind, %id, "created record");
        <D::Record as Stored>::records_mut(self).push(record);
        id
    }

    /// Register an employee under its caller-supplied id
    pub fn register_employee(&mut self, employee: Employee) -> Result<EmployeeId, StoreError> {
        if self.contains::<Employee>(&employee.id) {
            return Err(StoreError::DuplicateEmployee(employee.id));
        }
        let id = employee.id.clone();
        debug!(kind = "employee", %id, "created record");
        self.employees.push(employee);
        Ok(id)
    }

    /// Remove a record by identity.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown. Association
    /// rows that reference the record are left in place.
    pub fn delete<T: Stored>(&mut self, id: &T::Id) -> bool {
        let records = T::records_mut(self);
        let before = records.len();
        records.retain(|r| r.id() != id);
        let removed = records.len() != before;
        if removed {
            let kind = T::KIND;
            debug!(%kind, %id, "deleted record");
        }
        removed
    }

    /// The association sets
    pub fn links(&self) -> &Associations {
        &self.links
    }

    /// Next numeric id: the current clock, bumped past every id already issued.
    ///
    /// Ids still named by a link pair count as issued even after their record
    /// is deleted, so a new record never inherits stale associations.
    pub fn next_id(&self) -> RecordId {
        let floor = self
            .aircraft
            .iter()
            .map(|r| r.id)
            .chain(self.parts.iter().map(|r| r.id))
            .chain(self.stages.iter().map(|r| r.id))
            .chain(self.tests.iter().map(|r| r.id))
            .chain(self.links.record_ids())
            .max();
        RecordId::next_after(floor)
    }

    /// True when no entity and no association is stored
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
            && self.parts.is_empty()
            && self.stages.is_empty()
            && self.tests.is_empty()
            && self.employees.is_empty()
            && self.links.is_empty()
    }
}

impl Stored for Aircraft {
    fn records(store: &Store) -> &Vec<Self> {
        &store.aircraft
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.aircraft
    }
}

impl Stored for Part {
    fn records(store: &Store) -> &Vec<Self> {
        &store.parts
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.parts
    }
}

impl Stored for Stage {
    fn records(store: &Store) -> &Vec<Self> {
        &store.stages
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.stages
    }
}

impl Stored for Test {
    fn records(store: &Store) -> &Vec<Self> {
        &store.tests
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.tests
    }
}

impl Stored for Employee {
    fn records(store: &Store) -> &Vec<Self> {
        &store.employees
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.employees
    }
}
