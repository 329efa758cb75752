//! Application layer - Use cases and report rendering

pub mod reading;
pub mod setup;
pub mod simulation;
pub mod status;
pub mod table;

pub use reading::{AddedReading, ReadingService};
pub use setup::{SetupOutcome, SetupService};
pub use simulation::{ReadingGenerator, SimulationCount, SimulationReport, SimulationService};
pub use status::{StatusReport, StatusReporter, StatusRow};
