use super::entities::{machines, readings};
use super::storage_error;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use domain::DomainError;
use domain::machine::{Machine, MachineId, MachineRepository, MachineStatus, NewMachine};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, DbBackend,
    EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

pub struct SeaOrmMachineRepository {
    db: DatabaseConnection,
}

impl SeaOrmMachineRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_machine(model: machines::Model) -> Machine {
        Machine {
            id: model.id,
            name: model.name,
            location: model.location,
            status: MachineStatus::from(model.status),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn to_active_model(machine: &NewMachine, now: DateTime<FixedOffset>) -> machines::ActiveModel {
        machines::ActiveModel {
            id: match machine.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(machine.name.clone()),
            location: Set(machine.location.clone()),
            status: Set(machine.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[async_trait]
impl MachineRepository for SeaOrmMachineRepository {
    async fn create(&self, machine: &NewMachine) -> Result<Machine, DomainError> {
        let model = Self::to_active_model(machine, Utc::now().fixed_offset())
            .insert(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(machine_id = model.id, name = %model.name, "Machine stored");
        Ok(Self::model_to_machine(model))
    }

    async fn find_by_id(&self, id: MachineId) -> Result<Option<Machine>, DomainError> {
        let model = machines::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(Self::model_to_machine))
    }

    async fn find_all(&self) -> Result<Vec<Machine>, DomainError> {
        let models = machines::Entity::find()
            .order_by_asc(machines::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(Self::model_to_machine).collect())
    }

    async fn reset(&self, baseline: &[NewMachine]) -> Result<Vec<Machine>, DomainError> {
        // Clear and reseed in one transaction; dropping `txn` early rolls back.
        let txn = self.db.begin().await.map_err(storage_error)?;

        // Every reading belongs to a machine being removed.
        let removed_readings = readings::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(storage_error)?
            .rows_affected;
        let removed_machines = machines::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(storage_error)?
            .rows_affected;

        let now = Utc::now().fixed_offset();
        let mut seeded = Vec::with_capacity(baseline.len());
        for machine in baseline {
            let model = Self::to_active_model(machine, now)
                .insert(&txn)
                .await
                .map_err(storage_error)?;
            seeded.push(Self::model_to_machine(model));
        }

        // Explicit ids do not advance the Postgres sequence
        if txn.get_database_backend() == DbBackend::Postgres {
            txn.execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('machines', 'id'), \
                 COALESCE((SELECT MAX(id) FROM machines), 0) + 1, false)",
            )
            .await
            .map_err(storage_error)?;
        }

        txn.commit().await.map_err(storage_error)?;

        info!(
            removed_machines,
            removed_readings,
            seeded = seeded.len(),
            "Machine population reset"
        );
        Ok(seeded)
    }
}
