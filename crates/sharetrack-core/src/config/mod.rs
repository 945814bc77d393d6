//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `SHARETRACK__*` environment variables. Every field has a
//! default, so the service starts without any configuration file.

pub mod app;
pub mod logging;
pub mod tracking;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::tracking::{RateLimitConfig, TrackingConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    /// Share tracking settings.
    #[serde(default)]
    #[validate(nested)]
    pub tracking: TrackingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `SHARETRACK`, in increasing priority. Both
    /// files are optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHARETRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
