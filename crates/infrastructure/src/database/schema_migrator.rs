use super::storage_error;
use async_trait::async_trait;
use domain::{DomainError, SchemaMigrator};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

/// Applies the `migration` crate's pending migrations
pub struct SeaOrmSchemaMigrator {
    db: DatabaseConnection,
}

impl SeaOrmSchemaMigrator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaMigrator for SeaOrmSchemaMigrator {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        let pending = Migrator::get_pending_migrations(&self.db)
            .await
            .map_err(storage_error)?;

        if pending.is_empty() {
            debug!("Schema is up to date");
            return Ok(());
        }

        info!(pending = pending.len(), "Applying schema migrations");
        Migrator::up(&self.db, None).await.map_err(storage_error)?;
        Ok(())
    }
}
