use std::env;

use ::config::Config as ConfigBuilder;
use ::config::ConfigError;
use ::config::Environment;
use ::config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

/// Authentication settings, loaded once at process start and shared
/// read-only across all requests.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret for tokens
    pub secret: String,

    /// Access token lifetime in hours
    #[serde(default = "default_access_token_hours")]
    pub access_token_hours: i64,

    /// Refresh token lifetime in days
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: i64,

    /// Password hashing work factor (Argon2 iteration count)
    #[serde(default = "default_work_factor")]
    pub work_factor: u32,
}

fn default_access_token_hours() -> i64 {
    24
}

fn default_refresh_token_days() -> i64 {
    7
}

fn default_work_factor() -> u32 {
    2
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, AUTH__WORK_FACTOR, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
