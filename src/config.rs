//! Configuration management for the catalog core

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Database used for CREATE/DROP DATABASE statements
    #[serde(default = "default_maintenance_db")]
    pub maintenance_db: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Route CRUD through the provisioned stored routines instead of
    /// direct statements
    #[serde(default)]
    pub use_routines: bool,
    /// When set, provisioning also creates a read-only database role
    pub guest: Option<GuestConfig>,
}

/// Credentials for the optional read-only guest role
#[derive(Debug, Deserialize, Clone)]
pub struct GuestConfig {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

fn default_maintenance_db() -> String {
    "postgres".to_string()
}

impl DatabaseConfig {
    /// Connect options for the catalog database
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Connect options for the maintenance database
    pub fn maintenance_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.maintenance_db)
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRIS_)
            .add_source(
                Environment::with_prefix("LIBRIS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database password from LIBRIS_DB_PASSWORD env var if present
            .set_override_option(
                "database.password",
                env::var("LIBRIS_DB_PASSWORD").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "library_db".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            maintenance_db: default_maintenance_db(),
            max_connections: 10,
            min_connections: 2,
            use_routines: false,
            guest: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
