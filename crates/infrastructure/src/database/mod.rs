pub mod entities;
mod machine_repository;
mod reading_repository;
mod schema_migrator;

pub use machine_repository::SeaOrmMachineRepository;
pub use reading_repository::SeaOrmReadingRepository;
pub use schema_migrator::SeaOrmSchemaMigrator;

use domain::DomainError;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Open the storage gateway. The handle is shared by every repository and
/// should be closed once the command has finished.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    // Each pooled connection would otherwise see its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await.map_err(storage_error)?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

pub(crate) fn storage_error(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}
