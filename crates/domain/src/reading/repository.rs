use super::{NewReading, Reading};
use crate::DomainError;
use crate::machine::MachineId;
use async_trait::async_trait;

/// Repository interface for Reading persistence
///
/// Readings are append-only: there is no update or single delete.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Store one reading. Fails if the owning machine does not exist.
    async fn create(&self, reading: &NewReading) -> Result<Reading, DomainError>;

    /// Store a batch in a single transaction
    async fn create_many(&self, readings: &[NewReading]) -> Result<Vec<Reading>, DomainError>;

    /// All readings for a machine, newest first
    async fn find_by_machine(&self, machine_id: MachineId) -> Result<Vec<Reading>, DomainError>;

    /// Latest reading for a machine (max recorded_at, then max id)
    async fn latest_for(&self, machine_id: MachineId) -> Result<Option<Reading>, DomainError>;

    /// Total number of stored readings
    async fn count(&self) -> Result<u64, DomainError>;
}
