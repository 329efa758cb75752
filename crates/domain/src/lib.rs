//! Domain layer - Pure business logic with no storage dependencies
//!
//! This crate contains:
//! - Entities (Machine, Reading)
//! - Value Objects (MachineStatus, ReadingValues, Limits)
//! - Reading validation and warning classification
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod error;
pub mod machine;
pub mod reading;
pub mod schema;

// Re-export commonly used types
pub use error::{DomainError, Measurement};
pub use machine::{Machine, MachineId, MachineRepository, MachineStatus, NewMachine};
pub use reading::{NewReading, Reading, ReadingId, ReadingRepository, ReadingValues, ReadingWarning};
pub use schema::SchemaMigrator;
