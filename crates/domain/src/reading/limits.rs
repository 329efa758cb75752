use serde::{Deserialize, Serialize};

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Hard bound: temperatures outside are rejected (°C)
pub const TEMPERATURE_LIMITS: Limits = Limits::new(20.0, 100.0);

/// Hard bound: conveyor speeds outside are rejected (m/min)
pub const SPEED_LIMITS: Limits = Limits::new(0.5, 5.0);

/// Soft bound: temperatures strictly above this are flagged
pub const TEMPERATURE_WARNING_ABOVE: f64 = 80.0;

/// Soft bound: conveyor speeds outside this range are flagged
pub const SAFE_SPEED_LIMITS: Limits = Limits::new(1.0, 4.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        assert!(TEMPERATURE_LIMITS.contains(20.0));
        assert!(TEMPERATURE_LIMITS.contains(100.0));
        assert!(!TEMPERATURE_LIMITS.contains(19.99));
        assert!(!TEMPERATURE_LIMITS.contains(100.01));
    }

    #[test]
    fn test_nan_is_outside() {
        assert!(!SPEED_LIMITS.contains(f64::NAN));
    }

    #[test]
    fn test_soft_bounds_nested_in_hard_bounds() {
        assert!(TEMPERATURE_LIMITS.contains(TEMPERATURE_WARNING_ABOVE));
        assert!(SPEED_LIMITS.contains(SAFE_SPEED_LIMITS.min));
        assert!(SPEED_LIMITS.contains(SAFE_SPEED_LIMITS.max));
    }
}
