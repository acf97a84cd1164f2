//! Entity type definitions
//!
//! Aerocode tracks five entity kinds:
//!
//! - [`Aircraft`] - Airframes under production
//! - [`Part`] - Domestic or imported parts with their supplier
//! - [`Stage`] - Production steps with a deadline and a status workflow
//! - [`Test`] - Electrical, hydraulic and aerodynamic qualification tests
//! - [`Employee`] - Staff assigned to stages

pub mod aircraft;
pub mod employee;
pub mod part;
pub mod stage;

pub use aircraft::{Aircraft, AircraftCategory, NewAircraft};
pub use employee::{AccessLevel, Employee};
pub use part::{NewPart, Part, PartOrigin};
pub use stage::{NewStage, Stage, StageStatus};
pub use test::{NewTest, Test, TestCategory, TestResult};
