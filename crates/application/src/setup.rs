use std::sync::Arc;

use domain::error::Result;
use domain::machine::{Machine, MachineRepository, NewMachine};
use domain::SchemaMigrator;
use tracing::info;

/// (Re)initializes the machine population to the fixed baseline.
pub struct SetupService {
    schema: Arc<dyn SchemaMigrator>,
    machines: Arc<dyn MachineRepository>,
}

impl SetupService {
    pub fn new(schema: Arc<dyn SchemaMigrator>, machines: Arc<dyn MachineRepository>) -> Self {
        Self { schema, machines }
    }

    /// Ensure the schema exists, then replace all machines (cascading to
    /// their readings) with the baseline. Not additive: running it twice
    /// yields the same three machines.
    pub async fn run(&self) -> Result<SetupOutcome> {
        self.schema.ensure_schema().await?;

        let machines = self.machines.reset(&NewMachine::baseline()).await?;
        info!(count = machines.len(), "Baseline machines seeded");

        Ok(SetupOutcome { machines })
    }
}

#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub machines: Vec<Machine>,
}

impl std::fmt::Display for SetupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Database set up successfully with {} machines.",
            self.machines.len()
        )
    }
}
