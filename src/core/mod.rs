//! Core module - fundamental types and the production data core

pub mod config;
pub mod entity;
pub mod identity;
pub mod links;
pub mod report;
pub mod slot;
pub mod store;
pub mod workflow;
pub mod workspace;

pub use config::Config;
pub use entity::{Entity, EntityKind};
pub use identity::{EmployeeId, IdParseError, RecordId};
pub use links::{Associations, LinkError, LinkKind, LinkRow, LinkSet, ProductionLine};
pub use report::{format_date, generate_report, ReportError};
pub use slot::{FileSlot, MemorySlot, Slot, SlotError};
pub use store::{Draft, Store, StoreError, Stored};
pub use workflow::{Transition, WorkflowError};
pub use workspace::Workspace;
