use super::ReadingValues;
use crate::machine::MachineId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReadingId = i64;

/// A single timestamped measurement attributed to one machine. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    pub machine_id: MachineId,
    pub temperature: f64,
    pub conveyor_speed: f64,
    /// When the physical measurement happened
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reading {
    pub fn values(&self) -> ReadingValues {
        ReadingValues::new(self.temperature, self.conveyor_speed)
    }
}

/// A reading that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub machine_id: MachineId,
    pub values: ReadingValues,
    pub recorded_at: DateTime<Utc>,
}

impl NewReading {
    pub fn new(machine_id: MachineId, values: ReadingValues, recorded_at: DateTime<Utc>) -> Self {
        Self {
            machine_id,
            values,
            recorded_at,
        }
    }
}

/// Latest reading: maximum `recorded_at`, ties broken by highest `id`.
pub fn latest_reading<'a, I>(readings: I) -> Option<&'a Reading>
where
    I: IntoIterator<Item = &'a Reading>,
{
    readings
        .into_iter()
        .max_by(|a, b| a.recorded_at.cmp(&b.recorded_at).then(a.id.cmp(&b.id)))
}
