use std::sync::Arc;

use domain::machine::MachineRepository;
use domain::reading::ReadingRepository;
use domain::{DomainError, SchemaMigrator};
use infrastructure::database;
use infrastructure::{SeaOrmMachineRepository, SeaOrmReadingRepository, SeaOrmSchemaMigrator};
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Storage gateway handle plus the repositories built on it.
///
/// Acquired once per process and released with [`AppContext::close`].
pub struct AppContext {
    db: DatabaseConnection,
    pub schema: Arc<dyn SchemaMigrator>,
    pub machines: Arc<dyn MachineRepository>,
    pub readings: Arc<dyn ReadingRepository>,
}

impl AppContext {
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        let db = database::connect(database_url).await?;
        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            schema: Arc::new(SeaOrmSchemaMigrator::new(db.clone())),
            machines: Arc::new(SeaOrmMachineRepository::new(db.clone())),
            readings: Arc::new(SeaOrmReadingRepository::new(db.clone())),
            db,
        }
    }

    pub async fn close(self) -> Result<(), DomainError> {
        debug!("Closing database connection");
        self.db
            .close()
            .await
            .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))
    }
}
