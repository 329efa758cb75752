use super::{Machine, MachineId, NewMachine};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for Machine persistence
///
/// Implementations live in the infrastructure layer.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MachineRepository: Send + Sync {
    /// Insert a single machine
    async fn create(&self, machine: &NewMachine) -> Result<Machine, DomainError>;

    /// Find machine by ID
    async fn find_by_id(&self, id: MachineId) -> Result<Option<Machine>, DomainError>;

    /// Find all machines ordered by id
    async fn find_all(&self) -> Result<Vec<Machine>, DomainError>;

    /// Atomically replace every machine (and every reading they own) with `baseline`.
    async fn reset(&self, baseline: &[NewMachine]) -> Result<Vec<Machine>, DomainError>;
}
