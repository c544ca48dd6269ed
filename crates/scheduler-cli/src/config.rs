use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use scheduler_core::recurrence::RecurrenceConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "scheduler.toml";
pub const ENV_PREFIX: &str = "SCHEDULER_";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// SQLite database file, created on first use
    pub database_path: String,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    pub recurrence: RecurrenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "scheduler.db".to_string(),
            log_level: "warn".to_string(),
            recurrence: RecurrenceConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `SCHEDULER_*` variables.
    /// Nested keys use `__`, e.g. `SCHEDULER_RECURRENCE__MAX_SCAN_DAYS`.
    pub fn new() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}
