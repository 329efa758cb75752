use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::error::Result;
use domain::machine::{Machine, MachineRepository};
use domain::reading::{NewReading, Reading, ReadingRepository, ReadingValues};
use domain::DomainError;
use rand::Rng;
use tracing::info;

use crate::table::{Table, format_timestamp};

/// Readings generated per machine when no count is given
pub const DEFAULT_SIMULATION_COUNT: u32 = 10;

/// Number of readings to generate per machine. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationCount(u32);

impl SimulationCount {
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(DomainError::InvalidArgument(
                "simulation count must be a positive integer".to_string(),
            ));
        }
        Ok(Self(count))
    }

    /// Missing or blank input means the default count.
    pub fn parse_optional(input: Option<&str>) -> Result<Self> {
        match input.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => s.parse(),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for SimulationCount {
    fn default() -> Self {
        Self(DEFAULT_SIMULATION_COUNT)
    }
}

impl FromStr for SimulationCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let count = s.trim().parse::<u32>().map_err(|_| {
            DomainError::InvalidArgument(format!(
                "simulation count must be a positive integer, got '{}'",
                s
            ))
        })?;
        Self::new(count)
    }
}

/// Draws synthetic reading values inside the hard bounds.
///
/// Temperature is a whole degree in [20, 100]; conveyor speed has two
/// decimals in [0.50, 5.00]. Soft bounds are not respected.
pub struct ReadingGenerator;

impl ReadingGenerator {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> ReadingValues {
        let temperature: u32 = rng.gen_range(20..=100);
        let speed_hundredths: u32 = rng.gen_range(50..=500);
        ReadingValues::new(temperature as f64, speed_hundredths as f64 / 100.0)
    }
}

/// Generates and stores batches of synthetic readings
pub struct SimulationService {
    machines: Arc<dyn MachineRepository>,
    readings: Arc<dyn ReadingRepository>,
}

impl SimulationService {
    pub fn new(machines: Arc<dyn MachineRepository>, readings: Arc<dyn ReadingRepository>) -> Self {
        Self { machines, readings }
    }

    /// Generate `count` readings for every machine and store them in one batch.
    pub async fn simulate<R: Rng + ?Sized>(
        &self,
        count: SimulationCount,
        rng: &mut R,
    ) -> Result<SimulationReport> {
        let machines = self.machines.find_all().await?;
        if machines.is_empty() {
            return Err(DomainError::NoMachines);
        }

        let recorded_at = Utc::now();
        let batch = Self::build_batch(&machines, count, recorded_at, rng);
        let readings = self.readings.create_many(&batch).await?;

        info!(
            machines = machines.len(),
            per_machine = count.get(),
            total = readings.len(),
            "Simulation stored"
        );

        Ok(SimulationReport {
            count,
            machines,
            readings,
        })
    }

    fn build_batch<R: Rng + ?Sized>(
        machines: &[Machine],
        count: SimulationCount,
        recorded_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<NewReading> {
        machines
            .iter()
            .flat_map(|m| std::iter::repeat(m.id).take(count.get() as usize))
            .map(|machine_id| {
                NewReading::new(machine_id, ReadingGenerator::generate(rng), recorded_at)
            })
            .collect()
    }
}

/// Stored simulation batch, renderable as a row-per-reading table
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub count: SimulationCount,
    pub machines: Vec<Machine>,
    pub readings: Vec<Reading>,
}

impl SimulationReport {
    pub fn table(&self) -> Table {
        let mut table = Table::new([
            "Machine",
            "Location",
            "Temperature",
            "Speed",
            "Recorded At",
            "Created At",
        ]);

        for reading in &self.readings {
            let machine = self.machines.iter().find(|m| m.id == reading.machine_id);
            let values = reading.values();
            table.push_row([
                machine
                    .map(|m| format!("{} ({})", m.name, m.id))
                    .unwrap_or_else(|| reading.machine_id.to_string()),
                machine.map(|m| m.location.clone()).unwrap_or_default(),
                crate::status::temperature_cell(&values),
                crate::status::speed_cell(&values),
                format_timestamp(&reading.recorded_at),
                format_timestamp(&reading.created_at),
            ]);
        }
        table
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())?;
        write!(
            f,
            "Simulation complete: {} readings per machine ({} total).",
            self.count.get(),
            self.readings.len()
        )
    }
}
