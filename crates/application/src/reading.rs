use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::error::Result;
use domain::machine::{Machine, MachineId, MachineRepository};
use domain::reading::{NewReading, Reading, ReadingRepository, ReadingValues, ReadingWarning};
use domain::DomainError;
use tracing::{info, warn};

/// Records operator-entered readings
pub struct ReadingService {
    machines: Arc<dyn MachineRepository>,
    readings: Arc<dyn ReadingRepository>,
}

impl ReadingService {
    pub fn new(machines: Arc<dyn MachineRepository>, readings: Arc<dyn ReadingRepository>) -> Self {
        Self { machines, readings }
    }

    /// Resolve a machine before asking the operator for values.
    pub async fn machine(&self, machine_id: MachineId) -> Result<Machine> {
        self.machines
            .find_by_id(machine_id)
            .await?
            .ok_or(DomainError::MachineNotFound(machine_id))
    }

    /// Resolve the machine, validate both values, then persist.
    ///
    /// Nothing is written unless the machine exists and both hard bounds hold.
    /// `recorded_at` defaults to now.
    pub async fn add_reading(
        &self,
        machine_id: MachineId,
        values: ReadingValues,
        recorded_at: Option<DateTime<Utc>>,
    ) -> Result<AddedReading> {
        let machine = self.machine(machine_id).await?;

        let (values, warnings) = values.validated().inspect_err(|e| {
            warn!(machine_id, error = %e, "Reading rejected");
        })?;

        let new_reading = NewReading::new(
            machine.id,
            values,
            recorded_at.unwrap_or_else(Utc::now),
        );
        let reading = self.readings.create(&new_reading).await?;

        info!(
            machine_id,
            reading_id = reading.id,
            warnings = warnings.len(),
            "Reading added"
        );

        Ok(AddedReading {
            machine,
            reading,
            warnings,
        })
    }
}

/// Confirmation for a stored reading, with any soft-bound warnings
#[derive(Debug, Clone)]
pub struct AddedReading {
    pub machine: Machine,
    pub reading: Reading,
    pub warnings: Vec<ReadingWarning>,
}

impl std::fmt::Display for AddedReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reading #{} added for machine {} ({}): {:.1} °C, {:.2} m/min at {}",
            self.reading.id,
            self.machine.id,
            self.machine.name,
            self.reading.temperature,
            self.reading.conveyor_speed,
            crate::table::format_timestamp(&self.reading.recorded_at),
        )?;
        for warning in &self.warnings {
            write!(f, "\nWARNING: {}", warning)?;
        }
        Ok(())
    }
}
