use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://machine_monitor.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "warn,machine_monitor=info,application=info";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MonitorConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl MonitorConfig {
    /// Layered configuration, later sources win:
    /// defaults, `<dir>/default.*`, `<dir>/<RUN_MODE>.*`, `MONITOR__*` env vars,
    /// and finally a plain `DATABASE_URL` (also read from `.env`).
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // e.g. MONITOR__DATABASE_URL=postgres://...
            .add_source(Environment::with_prefix("MONITOR").separator("__"))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        s.try_deserialize()
    }

    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        self
    }
}
