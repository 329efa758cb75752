use chrono::{DateTime, Utc};
use clap::Parser;
use domain::machine::MachineId;

#[derive(Parser, Debug)]
#[command(
    name = "machine-monitor",
    author,
    version,
    about = "Record machine sensor readings and report their status",
    long_about = None
)]
pub struct Args {
    /// Reset the database to the three baseline machines (deletes all readings)
    #[arg(long)]
    pub setup: bool,

    /// Add a reading for a machine, prompting for values not given as flags
    #[arg(long, value_name = "MACHINE_ID")]
    pub add_reading: Option<MachineId>,

    /// Temperature in °C for --add-reading
    #[arg(long, requires = "add_reading", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Conveyor speed in m/min for --add-reading
    #[arg(long, requires = "add_reading", allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Measurement time for --add-reading (RFC 3339, defaults to now)
    #[arg(long, requires = "add_reading", value_name = "TIMESTAMP")]
    pub recorded_at: Option<DateTime<Utc>>,

    /// Generate random readings for every machine
    #[arg(
        long,
        value_name = "COUNT",
        num_args = 0..=1,
        default_missing_value = "10"
    )]
    pub simulate: Option<String>,

    /// Show every machine with its latest reading
    #[arg(long)]
    pub status: bool,

    /// Print --status as JSON
    #[arg(long, requires = "status")]
    pub json: bool,

    /// Print usage examples
    #[arg(long)]
    pub usage: bool,

    /// Path to config directory
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Override the configured database URL
    #[arg(long)]
    pub database_url: Option<String>,
}

/// The single operation one invocation performs
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Setup,
    AddReading {
        machine_id: MachineId,
        temperature: Option<f64>,
        speed: Option<f64>,
        recorded_at: Option<DateTime<Utc>>,
    },
    Simulate {
        count: Option<String>,
    },
    Status {
        json: bool,
    },
    Usage,
}

impl Args {
    /// First match wins: setup, add-reading, simulate, status, else usage.
    pub fn command(&self) -> Command {
        if self.setup {
            Command::Setup
        } else if let Some(machine_id) = self.add_reading {
            Command::AddReading {
                machine_id,
                temperature: self.temperature,
                speed: self.speed,
                recorded_at: self.recorded_at,
            }
        } else if let Some(count) = &self.simulate {
            Command::Simulate {
                count: Some(count.clone()),
            }
        } else if self.status {
            Command::Status { json: self.json }
        } else {
            Command::Usage
        }
    }
}
