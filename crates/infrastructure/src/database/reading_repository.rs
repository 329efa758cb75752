use super::entities::readings;
use super::storage_error;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use domain::DomainError;
use domain::machine::MachineId;
use domain::reading::{NewReading, Reading, ReadingRepository};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use tracing::debug;

pub struct SeaOrmReadingRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_reading(model: readings::Model) -> Reading {
        Reading {
            id: model.id,
            machine_id: model.machine_id,
            temperature: model.temperature,
            conveyor_speed: model.conveyor_speed,
            recorded_at: model.recorded_at.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn to_active_model(reading: &NewReading, now: DateTime<FixedOffset>) -> readings::ActiveModel {
        readings::ActiveModel {
            id: NotSet,
            machine_id: Set(reading.machine_id),
            temperature: Set(reading.values.temperature),
            conveyor_speed: Set(reading.values.conveyor_speed),
            recorded_at: Set(reading.recorded_at.fixed_offset()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Newest first: recorded_at DESC, id DESC
    fn newest_first(machine_id: MachineId) -> Select<readings::Entity> {
        readings::Entity::find()
            .filter(readings::Column::MachineId.eq(machine_id))
            .order_by_desc(readings::Column::RecordedAt)
            .order_by_desc(readings::Column::Id)
    }
}

#[async_trait]
impl ReadingRepository for SeaOrmReadingRepository {
    async fn create(&self, reading: &NewReading) -> Result<Reading, DomainError> {
        let model = Self::to_active_model(reading, Utc::now().fixed_offset())
            .insert(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(reading_id = model.id, machine_id = model.machine_id, "Reading stored");
        Ok(Self::model_to_reading(model))
    }

    async fn create_many(&self, readings: &[NewReading]) -> Result<Vec<Reading>, DomainError> {
        let txn = self.db.begin().await.map_err(storage_error)?;
        let now = Utc::now().fixed_offset();

        let mut stored = Vec::with_capacity(readings.len());
        for reading in readings {
            let model = Self::to_active_model(reading, now)
                .insert(&txn)
                .await
                .map_err(storage_error)?;
            stored.push(Self::model_to_reading(model));
        }

        txn.commit().await.map_err(storage_error)?;

        debug!(count = stored.len(), "Reading batch stored");
        Ok(stored)
    }

    async fn find_by_machine(&self, machine_id: MachineId) -> Result<Vec<Reading>, DomainError> {
        let models = Self::newest_first(machine_id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(Self::model_to_reading).collect())
    }

    async fn latest_for(&self, machine_id: MachineId) -> Result<Option<Reading>, DomainError> {
        let model = Self::newest_first(machine_id)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(Self::model_to_reading))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        readings::Entity::find()
            .count(&self.db)
            .await
            .map_err(storage_error)
    }
}
