mod entity;
mod limits;
mod repository;
mod values;

pub use entity::{NewReading, Reading, ReadingId, latest_reading};
pub use limits::{
    Limits, SAFE_SPEED_LIMITS, SPEED_LIMITS, TEMPERATURE_LIMITS, TEMPERATURE_WARNING_ABOVE,
};
pub use repository::ReadingRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockReadingRepository;
pub use values::{ReadingValues, ReadingWarning};
