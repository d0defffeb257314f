use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the catalog snapshot file
    pub data_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Built-in defaults so the binary runs without any config files
            .set_default("store.data_path", "catalog.dat")?
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific file, selected via RUN_MODE
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ELECTRA_STORE__DATA_PATH=/tmp/catalog.dat`
            .add_source(config::Environment::with_prefix("ELECTRA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
