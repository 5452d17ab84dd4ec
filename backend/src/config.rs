//! Configuration management for the Seed Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with SEED_ADVISOR__ prefix

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared::ScoringRules;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Where the seed and location catalogue is read from
    pub catalogue: CatalogueConfig,

    /// Recommender point values and thresholds
    #[serde(default)]
    pub scoring: ScoringRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host, an IP literal or a resolvable name such as `localhost`
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogueConfig {
    pub source: CatalogueSource,
}

/// Backing store for the catalogue
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogueSource {
    Postgres,
    /// Built-in reference catalogue held in memory
    Memory,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SEED_ADVISOR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "postgres://localhost:5432/seed_advisor")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("catalogue.source", "postgres")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SEED_ADVISOR__ prefix)
            .add_source(
                Environment::with_prefix("SEED_ADVISOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Whether migrations should run at startup
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            catalogue: CatalogueConfig {
                source: CatalogueSource::Postgres,
            },
            scoring: ScoringRules::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/seed_advisor".to_string(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_partial_scoring_section_keeps_defaults() {
        let toml = r#"
            environment = "demo"

            [server]
            port = 8080
            host = "127.0.0.1"

            [database]
            url = "postgres://localhost/test"
            max_connections = 4
            min_connections = 1
            acquire_timeout_secs = 5

            [catalogue]
            source = "memory"

            [scoring]
            base_score = 60
        "#;

        let config: Config = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalogue.source, CatalogueSource::Memory);
        assert!(!config.is_development());
        assert_eq!(config.scoring.base_score, 60);
        assert_eq!(config.scoring.region_bonus, 15);
        assert_eq!(config.scoring.max_score, 100);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_development());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalogue.source, CatalogueSource::Postgres);
    }
}
