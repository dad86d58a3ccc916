use config::{Config, ConfigError, Environment, File};
use infrastructure::{DatabaseConfig, HttpServerConfig, MonitoringConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub http_server: HttpServerConfig,
    pub monitoring: MonitoringConfig,
    pub device: DeviceSettings,
    pub monitor: crate::adapter::monitor::MonitorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    pub id: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::default().separator("_").list_separator(","));

        let s = builder.build()?;
        s.try_deserialize()
    }
}
