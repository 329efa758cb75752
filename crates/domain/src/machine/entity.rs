use super::MachineStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MachineId = i32;

/// A monitored physical unit.
///
/// Readings reference a machine by id; the machine itself never holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub location: String,
    pub status: MachineStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attributes of a machine that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMachine {
    /// Fixed identifier for seeded machines, `None` lets the store allocate one
    pub id: Option<MachineId>,
    pub name: String,
    pub location: String,
    pub status: MachineStatus,
}

impl NewMachine {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            status: MachineStatus::Active,
        }
    }

    pub fn with_id(mut self, id: MachineId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: MachineStatus) -> Self {
        self.status = status;
        self
    }

    /// The three machines installed by setup: ids 1-3, all active.
    pub fn baseline() -> Vec<NewMachine> {
        (1..=3)
            .map(|n| NewMachine::new(format!("Machine {n}"), format!("Location {n}")).with_id(n))
            .collect()
    }
}
