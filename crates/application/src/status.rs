use std::sync::Arc;

use domain::error::Result;
use domain::machine::{Machine, MachineRepository};
use domain::reading::{Reading, ReadingRepository, ReadingValues, ReadingWarning};
use serde::Serialize;
use tracing::debug;

use crate::table::{PLACEHOLDER, Table, format_timestamp};

/// Read-only snapshot of every machine with its latest reading
pub struct StatusReporter {
    machines: Arc<dyn MachineRepository>,
    readings: Arc<dyn ReadingRepository>,
}

impl StatusReporter {
    pub fn new(machines: Arc<dyn MachineRepository>, readings: Arc<dyn ReadingRepository>) -> Self {
        Self { machines, readings }
    }

    pub async fn report(&self) -> Result<StatusReport> {
        let machines = self.machines.find_all().await?;

        let mut rows = Vec::with_capacity(machines.len());
        for machine in machines {
            let latest = self.readings.latest_for(machine.id).await?;
            rows.push(StatusRow::new(machine, latest));
        }

        debug!(machines = rows.len(), "Status report built");
        Ok(StatusReport { rows })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    pub machine: Machine,
    pub latest: Option<Reading>,
    /// Recomputed from the latest reading, empty when there is none
    pub warnings: Vec<ReadingWarning>,
}

impl StatusRow {
    pub fn new(machine: Machine, latest: Option<Reading>) -> Self {
        let warnings = latest
            .as_ref()
            .map(|r| r.values().warnings())
            .unwrap_or_default();
        Self {
            machine,
            latest,
            warnings,
        }
    }

    fn cells(&self) -> Vec<String> {
        let (temperature, speed, recorded_at) = match &self.latest {
            Some(reading) => {
                let values = reading.values();
                (
                    temperature_cell(&values),
                    speed_cell(&values),
                    format_timestamp(&reading.recorded_at),
                )
            }
            None => (
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
            ),
        };

        vec![
            self.machine.id.to_string(),
            self.machine.name.clone(),
            self.machine.location.clone(),
            self.machine.status.to_string(),
            temperature,
            speed,
            recorded_at,
            format_timestamp(&self.machine.created_at),
            format_timestamp(&self.machine.updated_at),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub rows: Vec<StatusRow>,
}

impl StatusReport {
    pub fn table(&self) -> Table {
        let mut table = Table::new([
            "ID",
            "Name",
            "Location",
            "Status",
            "Temperature",
            "Speed",
            "Recorded At",
            "Created At",
            "Updated At",
        ]);
        for row in &self.rows {
            table.push_row(row.cells());
        }
        table
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("No machines found. Run --setup first.\n");
        }
        write!(f, "{}", self.table())
    }
}

fn with_marker(text: String, values: &ReadingValues, warning: ReadingWarning) -> String {
    if values.has_warning(warning) {
        format!("{} {}", text, warning.marker())
    } else {
        text
    }
}

pub(crate) fn temperature_cell(values: &ReadingValues) -> String {
    with_marker(
        format!("{:.1} °C", values.temperature),
        values,
        ReadingWarning::HighTemperature,
    )
}

pub(crate) fn speed_cell(values: &ReadingValues) -> String {
    with_marker(
        format!("{:.2} m/min", values.conveyor_speed),
        values,
        ReadingWarning::UnsafeSpeed,
    )
}
