//! Housekeeping configuration module

use serde::{Deserialize, Serialize};

/// Periodic sweep of registrations that never completed phone verification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HousekeepingConfig {
    /// Whether the sweep runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Seconds between two sweeps
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,

    /// Minutes an unverified registration is kept after its last update
    #[serde(default = "default_grace_period_minutes")]
    pub grace_period_minutes: i64,
}

impl Default for HousekeepingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_seconds: default_interval_seconds(),
            grace_period_minutes: default_grace_period_minutes(),
        }
    }
}

impl HousekeepingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("HOUSEKEEPING_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            interval_seconds: std::env::var("HOUSEKEEPING_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
            grace_period_minutes: std::env::var("HOUSEKEEPING_GRACE_PERIOD_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.grace_period_minutes),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval_seconds() -> u64 {
    43_200 // 12 hours
}

fn default_grace_period_minutes() -> i64 {
    60
}
