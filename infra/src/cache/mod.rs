//! Verification code storage
//!
//! Two interchangeable backends behind the core `VerificationCodeStore` trait:
//! Redis for shared deployments and a process-local map for development.

pub mod memory_store;
pub mod redis_client;
pub mod redis_store;

pub use memory_store::MemoryVerificationStore;
pub use redis_client::RedisClient;
pub use redis_store::RedisVerificationStore;

// Re-export commonly used types
pub use mc_shared::config::CacheConfig;

use async_trait::async_trait;
use std::time::Duration;

use mc_core::domain::entities::verification::VerificationChannel;
use mc_core::errors::DomainResult;
use mc_core::repositories::VerificationCodeStore;
use mc_shared::config::{StoreBackend, VerificationConfig};

use crate::InfrastructureError;

/// Storage key for a subject's code, e.g. `verification:phone:01012345678`
pub fn code_key(channel: VerificationChannel, subject: &str) -> String {
    format!("verification:{}:{}", channel.as_str(), subject)
}

/// Store selected at startup from `VerificationConfig::store_backend`
pub enum VerificationStoreBackend {
    Redis(RedisVerificationStore),
    Memory(MemoryVerificationStore),
}

impl VerificationStoreBackend {
    pub async fn from_config(
        verification: &VerificationConfig,
        cache: &CacheConfig,
    ) -> Result<Self, InfrastructureError> {
        match verification.store_backend {
            StoreBackend::Redis => {
                let client = RedisClient::new(cache.clone()).await?;
                Ok(Self::Redis(RedisVerificationStore::new(client)))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory verification store; codes are not shared between instances");
                Ok(Self::Memory(MemoryVerificationStore::new()))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Redis(_) => "redis",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl VerificationCodeStore for VerificationStoreBackend {
    async fn put(
        &self,
        channel: VerificationChannel,
        subject: &str,
        code: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        match self {
            Self::Redis(store) => store.put(channel, subject, code, ttl).await,
            Self::Memory(store) => store.put(channel, subject, code, ttl).await,
        }
    }

    async fn get(&self, channel: VerificationChannel, subject: &str) -> DomainResult<Option<String>> {
        match self {
            Self::Redis(store) => store.get(channel, subject).await,
            Self::Memory(store) => store.get(channel, subject).await,
        }
    }

    async fn delete(&self, channel: VerificationChannel, subject: &str) -> DomainResult<bool> {
        match self {
            Self::Redis(store) => store.delete(channel, subject).await,
            Self::Memory(store) => store.delete(channel, subject).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_key_format() {
        assert_eq!(
            code_key(VerificationChannel::Phone, "01012345678"),
            "verification:phone:01012345678"
        );
        assert_eq!(
            code_key(VerificationChannel::UniversityEmail, "jane@snu.ac.kr"),
            "verification:university_email:jane@snu.ac.kr"
        );
    }

    #[tokio::test]
    async fn test_memory_backend_selected_without_redis() {
        let verification = VerificationConfig {
            store_backend: StoreBackend::Memory,
            ..VerificationConfig::default()
        };
        let backend = VerificationStoreBackend::from_config(&verification, &CacheConfig::default())
            .await
            .unwrap();
        assert_eq!(backend.backend_name(), "memory");
    }
}
