use crate::DomainError;
use async_trait::async_trait;

/// Brings the store's schema up to date before first use.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SchemaMigrator: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), DomainError>;
}
