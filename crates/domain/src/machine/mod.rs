mod entity;
mod repository;
mod status;

pub use entity::{Machine, MachineId, NewMachine};
pub use repository::MachineRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockMachineRepository;
pub use status::MachineStatus;
