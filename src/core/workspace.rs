//! Workspace - a store bound to the slot it is persisted in
//!
//! Every mutation runs against a copy of the store. The copy replaces the live
//! store only when the operation succeeds, and is written to the slot only when
//! it actually differs, so a rejected operation never reaches disk.

use tracing::{debug, warn};

use crate::core::identity::{EmployeeId, RecordId};
use crate::core::links::LinkError;
use crate::core::slot::{load_store, save_store, Slot, SlotError};
use crate::core::store::{Draft, Store, StoreError, Stored};
use crate::core::workflow::{Transition, WorkflowError};
use crate::entities::{Employee, StageStatus};

pub struct Workspace<S: Slot> {
    slot: S,
    store: Store,
    last_persist_error: Option<SlotError>,
}

impl<S: Slot> Workspace<S> {
    /// Load whatever the slot holds (an empty store if nothing usable)
    pub fn open(slot: S) -> Self {
        let store = load_store(&slot);
        Self {
            slot,
            store,
            last_persist_error: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// The most recent persistence failure, cleared by the next successful save
    pub fn last_persist_error(&self) -> Option<&SlotError> {
        self.last_persist_error.as_ref()
    }

    /// Run a fallible mutation copy-on-write and persist the result
    pub fn apply<T, E>(&mut self, op: impl FnOnce(&mut Store) -> Result<T, E>) -> Result<T, E> {
        let mut next = self.store.clone();
        let value = op(&mut next)?;
        if next != self.store {
            self.store = next;
            self.persist();
        }
        Ok(value)
    }

    /// Run an infallible mutation and persist the result
    pub fn mutate<T>(&mut self, op: impl FnOnce(&mut Store) -> T) -> T {
        let result: Result<T, std::convert::Infallible> = self.apply(|store| Ok(op(store)));
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    fn persist(&mut self) {
        match save_store(&self.slot, &self.store) {
            Ok(()) => {
                debug!("state saved");
                self.last_persist_error = None;
            }
            Err(e) => {
                warn!(error = %e, "failed to save state; changes are kept in memory only");
                self.last_persist_error = Some(e);
            }
        }
    }

    pub fn create<D: Draft>(&mut self, draft: D) -> RecordId {
        self.mutate(|store| store.create(draft))
    }

    pub fn register_employee(&mut self, employee: Employee) -> Result<EmployeeId, StoreError> {
        self.apply(|store| store.register_employee(employee))
    }

    pub fn delete<T: Stored>(&mut self, id: &T::Id) -> bool {
        self.mutate(|store| store.delete::<T>(id))
    }

    pub fn transition_stage(
        &mut self,
        id: RecordId,
        transition: Transition,
    ) -> Result<StageStatus, WorkflowError> {
        self.apply(|store| store.transition_stage(id, transition))
    }

    pub fn associate_part(&mut self, part: RecordId, aircraft: RecordId) -> Result<(), LinkError> {
        self.apply(|store| store.associate_part(part, aircraft))
    }

    pub fn associate_stage(&mut self, stage: RecordId, aircraft: RecordId) -> Result<(), LinkError> {
        self.apply(|store| store.associate_stage(stage, aircraft))
    }

    pub fn associate_test(&mut self, test: RecordId, aircraft: RecordId) -> Result<(), LinkError> {
        self.apply(|store| store.associate_test(test, aircraft))
    }

    pub fn associate_employee(
        &mut self,
        employee: EmployeeId,
        stage: RecordId,
    ) -> Result<(), LinkError> {
        self.apply(|store| store.associate_employee(employee, stage))
    }
}
