use std::env;
use std::time::Duration;

use auth::AuthSettings;
use auth::SettingsError;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
}

/// Flat environment variable names mapped onto their configuration keys.
const FLAT_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("DATABASE_URL", "database.url"),
    ("SECRET_KEY", "jwt.secret"),
    ("ALGORITHM", "jwt.algorithm"),
    ("ACCESS_TOKEN_EXPIRE_MINUTES", "jwt.access_token_expire_minutes"),
];

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat variables (DATABASE_URL, SECRET_KEY, ALGORITHM, ACCESS_TOKEN_EXPIRE_MINUTES)
    /// 2. Nested environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// A `.env` file in the working directory is loaded into the environment first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = Self::builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"));

        for (variable, key) in FLAT_ENV_OVERRIDES {
            builder = builder.set_override_option(key, env::var(variable).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("jwt.algorithm", "HS256")?
            .set_default("jwt.access_token_expire_minutes", 30)
    }

    /// Validated signing settings for the authenticator and access guard.
    pub fn auth_settings(&self) -> Result<AuthSettings, SettingsError> {
        AuthSettings::new(
            self.jwt.secret.as_bytes(),
            &self.jwt.algorithm,
            self.jwt.access_token_expire_minutes,
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}
