pub mod defaults;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    /// Layered load: shipped TOML defaults, then `APP_`/`LOGGING_` prefixed
    /// environment overrides (double underscore as section separator).
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(Env::prefixed("LOGGING_").split("__").map(|key| {
                match key.as_str().to_lowercase().as_str() {
                    "level" => "logging.level".into(),
                    "json_format" => "logging.json_format".into(),
                    _ => key.into(),
                }
            }))
            .extract()
            .map_err(Box::new)
    }
}
