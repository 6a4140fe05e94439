use axum_helpers::RateLimitStrategy;
use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Catalog collection settings
#[derive(Clone, Debug)]
pub struct CatalogSettings {
    /// Name of the MongoDB collection holding products
    pub collection: String,
}

impl FromEnv for CatalogSettings {
    /// Reads CATALOG_COLLECTION_NAME, defaulting to "products"
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            collection: env_or_default("CATALOG_COLLECTION_NAME", "products"),
        })
    }
}

/// Rate limiting settings
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// How requests are bucketed (ip | user | api-key)
    pub strategy: RateLimitStrategy,
    /// Allowed requests per bucket per minute
    pub per_minute: u32,
}

impl FromEnv for RateLimitConfig {
    /// Reads RATE_LIMIT_STRATEGY (default "ip") and
    /// RATE_LIMIT_PER_MINUTE (default 60)
    fn from_env() -> Result<Self, ConfigError> {
        let strategy = env_or_default("RATE_LIMIT_STRATEGY", "ip")
            .parse()
            .map_err(|e: String| ConfigError::ParseError {
                key: "RATE_LIMIT_STRATEGY".to_string(),
                details: e,
            })?;

        let per_minute = env_or_default("RATE_LIMIT_PER_MINUTE", "60")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "RATE_LIMIT_PER_MINUTE".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            strategy,
            per_minute,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the core libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub catalog: CatalogSettings,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let catalog = CatalogSettings::from_env()?;
        let server = ServerConfig::from_env()?;
        let rate_limit = RateLimitConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            catalog,
            server,
            rate_limit,
            environment,
        })
    }
}
