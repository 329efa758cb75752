//! Infrastructure layer - Storage and configuration

pub mod config;
pub mod database;

pub use config::MonitorConfig;
pub use database::{SeaOrmMachineRepository, SeaOrmReadingRepository, SeaOrmSchemaMigrator};
