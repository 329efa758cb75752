//! Integration tests for the SeaOrm repositories
//!
//! Each test runs against its own in-memory SQLite database, migrated with
//! the `migration` crate, so no external server is required.

use chrono::{Duration, TimeZone, Utc};
use domain::machine::{MachineRepository, MachineStatus, NewMachine};
use domain::reading::{NewReading, ReadingRepository, ReadingValues};
use domain::{DomainError, SchemaMigrator};
use infrastructure::database::connect;
use infrastructure::{SeaOrmMachineRepository, SeaOrmReadingRepository, SeaOrmSchemaMigrator};
use sea_orm::DatabaseConnection;

/// Helper to create a migrated in-memory database
async fn create_test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    SeaOrmSchemaMigrator::new(db.clone())
        .ensure_schema()
        .await
        .expect("Failed to migrate test database");
    db
}

async fn seeded_repositories() -> (SeaOrmMachineRepository, SeaOrmReadingRepository) {
    let db = create_test_db().await;
    let machines = SeaOrmMachineRepository::new(db.clone());
    machines
        .reset(&NewMachine::baseline())
        .await
        .expect("Failed to seed machines");
    (machines, SeaOrmReadingRepository::new(db))
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let db = create_test_db().await;
    let migrator = SeaOrmSchemaMigrator::new(db);

    migrator
        .ensure_schema()
        .await
        .expect("Second migration run should be a no-op");
}

#[tokio::test]
async fn test_missing_schema_is_storage_error() {
    let db = connect("sqlite::memory:").await.unwrap();
    let repo = SeaOrmMachineRepository::new(db);

    let result = repo.find_all().await;
    assert!(matches!(result, Err(DomainError::Storage(_))));
}

#[tokio::test]
async fn test_reset_seeds_baseline() {
    let (machines, _) = seeded_repositories().await;

    let all = machines.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    let ids: Vec<_> = all.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(all[1].name, "Machine 2");
    assert_eq!(all[1].location, "Location 2");
    assert_eq!(all[1].status, MachineStatus::Active);
}

#[tokio::test]
async fn test_reset_twice_cascades_readings() {
    let (machines, readings) = seeded_repositories().await;

    readings
        .create(&NewReading::new(1, ReadingValues::new(50.0, 2.0), Utc::now()))
        .await
        .unwrap();
    readings
        .create(&NewReading::new(3, ReadingValues::new(60.0, 3.0), Utc::now()))
        .await
        .unwrap();
    assert_eq!(readings.count().await.unwrap(), 2);

    let seeded = machines.reset(&NewMachine::baseline()).await.unwrap();

    assert_eq!(seeded.len(), 3);
    assert_eq!(machines.find_all().await.unwrap().len(), 3);
    assert_eq!(readings.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_find_nonexistent_machine() {
    let (machines, _) = seeded_repositories().await;

    let result = machines.find_by_id(9999).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_machine_allocates_id() {
    let db = create_test_db().await;
    let machines = SeaOrmMachineRepository::new(db);

    let created = machines
        .create(&NewMachine::new("Lathe", "Hall C").with_status(MachineStatus::Inactive))
        .await
        .unwrap();

    let found = machines.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Lathe");
    assert_eq!(found.status, MachineStatus::Inactive);
}

#[tokio::test]
async fn test_reading_for_unknown_machine_rejected() {
    let (_, readings) = seeded_repositories().await;

    let result = readings
        .create(&NewReading::new(42, ReadingValues::new(50.0, 2.0), Utc::now()))
        .await;

    assert!(matches!(result, Err(DomainError::Storage(_))));
    assert_eq!(readings.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_latest_for_uses_recorded_at() {
    let (_, readings) = seeded_repositories().await;
    let t1 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let t2 = t1 + Duration::minutes(10);

    // Newer measurement inserted first
    readings
        .create(&NewReading::new(1, ReadingValues::new(75.0, 3.5), t2))
        .await
        .unwrap();
    readings
        .create(&NewReading::new(1, ReadingValues::new(40.0, 1.5), t1))
        .await
        .unwrap();

    let latest = readings.latest_for(1).await.unwrap().unwrap();
    assert_eq!(latest.temperature, 75.0);
    assert_eq!(latest.recorded_at, t2);
}

#[tokio::test]
async fn test_latest_for_tie_broken_by_id() {
    let (_, readings) = seeded_repositories().await;
    let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let first = readings
        .create(&NewReading::new(2, ReadingValues::new(30.0, 2.0), t))
        .await
        .unwrap();
    let second = readings
        .create(&NewReading::new(2, ReadingValues::new(35.0, 2.5), t))
        .await
        .unwrap();
    assert!(second.id > first.id);

    let latest = readings.latest_for(2).await.unwrap().unwrap();
    assert_eq!(latest.id, second.id);
}

#[tokio::test]
async fn test_latest_for_machine_without_readings() {
    let (_, readings) = seeded_repositories().await;
    assert!(readings.latest_for(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_many_and_find_by_machine() {
    let (_, readings) = seeded_repositories().await;
    let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let batch: Vec<NewReading> = (0..4)
        .map(|i| {
            NewReading::new(
                1 + (i % 2),
                ReadingValues::new(20.0 + i as f64, 1.0),
                t + Duration::seconds(i as i64),
            )
        })
        .collect();

    let stored = readings.create_many(&batch).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(readings.count().await.unwrap(), 4);

    let for_machine_1 = readings.find_by_machine(1).await.unwrap();
    let temps: Vec<_> = for_machine_1.iter().map(|r| r.temperature).collect();
    assert_eq!(temps, vec![22.0, 20.0]);
}

#[tokio::test]
async fn test_create_many_is_atomic() {
    let (_, readings) = seeded_repositories().await;

    let batch = vec![
        NewReading::new(1, ReadingValues::new(50.0, 2.0), Utc::now()),
        NewReading::new(404, ReadingValues::new(50.0, 2.0), Utc::now()),
    ];

    assert!(readings.create_many(&batch).await.is_err());
    assert_eq!(readings.count().await.unwrap(), 0);
}
