//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis configuration for verification codes
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `housekeeping` - Periodic sweep of abandoned registrations
//! - `notification` - SMS and e-mail delivery providers
//! - `verification` - Verification code length, lifetime and subject rules

pub mod cache;
pub mod database;
pub mod environment;
pub mod housekeeping;
pub mod notification;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, FileLoggingConfig, LogFormat, LoggingConfig};
pub use housekeeping::HousekeepingConfig;
pub use notification::{MailProviderConfig, NotificationConfig, SmsProviderConfig};
pub use verification::{StoreBackend, VerificationConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis configuration
    pub cache: CacheConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Outbound notification configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Housekeeping configuration
    #[serde(default)]
    pub housekeeping: HousekeepingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            notification: NotificationConfig::default(),
            housekeeping: HousekeepingConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::new("mysql://localhost:3306/mentorconnect_dev"),
            cache: CacheConfig::default(),
            verification: VerificationConfig {
                store_backend: StoreBackend::Memory,
                ..Default::default()
            },
            notification: NotificationConfig::default(),
            housekeeping: HousekeepingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig::new("mysql://prod-db:3306/mentorconnect")
                .with_max_connections(50),
            cache: CacheConfig::new("redis://prod-cache:6379").with_prefix("mentorconnect"),
            verification: VerificationConfig::default(),
            notification: NotificationConfig::default(),
            housekeeping: HousekeepingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the preset of the detected environment and lets the
    /// per-section environment variables override it.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        if std::env::var("DATABASE_URL").is_ok() {
            config.database = DatabaseConfig::from_env();
        }
        if std::env::var("REDIS_URL").is_ok() {
            config.cache = CacheConfig::from_env();
        }
        config.verification = VerificationConfig::from_env_or(config.verification);
        config.notification = NotificationConfig::from_env();
        config.housekeeping = HousekeepingConfig::from_env();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_uses_memory_store() {
        let config = AppConfig::development();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.verification.store_backend, StoreBackend::Memory);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_production_uses_redis_store() {
        let config = AppConfig::production();
        assert_eq!(config.verification.store_backend, StoreBackend::Redis);
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.cache.make_key("k"), "mentorconnect:k");
    }
}
