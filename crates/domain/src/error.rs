use crate::machine::MachineId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measured quantity a bound applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    Temperature,
    ConveyorSpeed,
}

impl Measurement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::ConveyorSpeed => "conveyor speed",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::ConveyorSpeed => "m/min",
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid {field}: {value} is outside the allowed range [{min}, {max}] {unit}", unit = .field.unit())]
    Validation {
        field: Measurement,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Machine not found: {0}")]
    MachineNotFound(MachineId),

    #[error("No machines found. Run --setup first.")]
    NoMachines,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
