//! Verification code configuration module

use serde::{Deserialize, Serialize};

/// Where issued verification codes are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Redis with native key expiry
    Redis,
    /// Process-local map, for development and tests
    Memory,
}

/// Verification code configuration shared by the phone and university e-mail flows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: u32,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: u64,

    /// Pattern a normalized (digits only) phone number must match
    #[serde(default = "default_phone_pattern")]
    pub phone_pattern: String,

    /// Storage backend for issued codes
    #[serde(default = "default_store_backend")]
    pub store_backend: StoreBackend,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            code_ttl_seconds: default_code_ttl_seconds(),
            phone_pattern: default_phone_pattern(),
            store_backend: default_store_backend(),
        }
    }
}

impl VerificationConfig {
    /// Override `base` with any `VERIFICATION_*` environment variables that are set
    pub fn from_env_or(base: Self) -> Self {
        let code_length = std::env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|len| (1..=9).contains(len))
            .unwrap_or(base.code_length);
        let code_ttl_seconds = std::env::var("VERIFICATION_CODE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.code_ttl_seconds);
        let store_backend = match std::env::var("VERIFICATION_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            Ok("redis") => StoreBackend::Redis,
            _ => base.store_backend,
        };

        Self {
            code_length,
            code_ttl_seconds,
            store_backend,
            ..base
        }
    }
}

fn default_code_length() -> u32 {
    4
}

fn default_code_ttl_seconds() -> u64 {
    300 // 5 minutes
}

fn default_phone_pattern() -> String {
    String::from(r"^010\d{8}$")
}

fn default_store_backend() -> StoreBackend {
    StoreBackend::Redis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.store_backend, StoreBackend::Redis);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: VerificationConfig =
            serde_json::from_str(r#"{"code_length": 6, "store_backend": "memory"}"#).unwrap();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.store_backend, StoreBackend::Memory);
    }
}
