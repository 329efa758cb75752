use super::limits::{
    Limits, SAFE_SPEED_LIMITS, SPEED_LIMITS, TEMPERATURE_LIMITS, TEMPERATURE_WARNING_ABOVE,
};
use crate::error::{DomainError, Measurement, Result};
use serde::{Deserialize, Serialize};

/// Advisory annotation for an accepted reading. Never persisted, always
/// recomputed from the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingWarning {
    HighTemperature,
    UnsafeSpeed,
}

impl ReadingWarning {
    /// Short marker used in table cells
    pub fn marker(&self) -> &'static str {
        match self {
            Self::HighTemperature => "[HIGH]",
            Self::UnsafeSpeed => "[UNSAFE]",
        }
    }

    pub fn measurement(&self) -> Measurement {
        match self {
            Self::HighTemperature => Measurement::Temperature,
            Self::UnsafeSpeed => Measurement::ConveyorSpeed,
        }
    }
}

impl std::fmt::Display for ReadingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighTemperature => write!(
                f,
                "high temperature (above {} °C)",
                TEMPERATURE_WARNING_ABOVE
            ),
            Self::UnsafeSpeed => write!(
                f,
                "unsafe speed (outside {:.1}-{:.1} m/min)",
                SAFE_SPEED_LIMITS.min, SAFE_SPEED_LIMITS.max
            ),
        }
    }
}

/// The two measured quantities of a reading
///
/// Rules:
/// - temperature must lie in [20, 100] °C
/// - conveyor speed must lie in [0.5, 5.0] m/min
/// - temperature above 80 °C is flagged
/// - conveyor speed outside [1.0, 4.0] m/min is flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingValues {
    pub temperature: f64,
    pub conveyor_speed: f64,
}

impl ReadingValues {
    pub fn new(temperature: f64, conveyor_speed: f64) -> Self {
        Self {
            temperature,
            conveyor_speed,
        }
    }

    /// Check both hard bounds, temperature first.
    pub fn validate(&self) -> Result<()> {
        check(Measurement::Temperature, self.temperature, TEMPERATURE_LIMITS)?;
        check(Measurement::ConveyorSpeed, self.conveyor_speed, SPEED_LIMITS)?;
        Ok(())
    }

    /// Validate, then return the values with their warnings.
    pub fn validated(self) -> Result<(Self, Vec<ReadingWarning>)> {
        self.validate()?;
        Ok((self, self.warnings()))
    }

    /// Soft-bound classification, identical for entry and reporting.
    pub fn warnings(&self) -> Vec<ReadingWarning> {
        let mut warnings = Vec::new();
        if self.temperature > TEMPERATURE_WARNING_ABOVE {
            warnings.push(ReadingWarning::HighTemperature);
        }
        if !SAFE_SPEED_LIMITS.contains(self.conveyor_speed) {
            warnings.push(ReadingWarning::UnsafeSpeed);
        }
        warnings
    }

    pub fn has_warning(&self, warning: ReadingWarning) -> bool {
        self.warnings().contains(&warning)
    }
}

fn check(field: Measurement, value: f64, limits: Limits) -> Result<()> {
    if limits.contains(value) {
        Ok(())
    } else {
        Err(DomainError::Validation {
            field,
            value,
            min: limits.min,
            max: limits.max,
        })
    }
}
