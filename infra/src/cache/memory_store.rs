//! Process-local verification code store
//!
//! Used in development and single-instance deployments. Expired entries are
//! invisible to `get` immediately and physically removed by `purge_expired`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use mc_core::domain::entities::verification::VerificationChannel;
use mc_core::errors::DomainResult;
use mc_core::repositories::VerificationCodeStore;

use super::code_key;

#[derive(Debug, Clone)]
struct StoredCode {
    code: String,
    expires_at: Instant,
}

impl StoredCode {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Clone, Default)]
pub struct MemoryVerificationStore {
    entries: Arc<RwLock<HashMap<String, StoredCode>>>,
}

impl MemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every expired entry; returns how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, stored| stored.is_live(now));
        let removed = before - entries.len();

        if removed > 0 {
            tracing::debug!(removed, "Purged expired verification codes");
        }
        removed
    }

    /// Number of entries held, live or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationCodeStore for MemoryVerificationStore {
    async fn put(
        &self,
        channel: VerificationChannel,
        subject: &str,
        code: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        self.entries.write().await.insert(
            code_key(channel, subject),
            StoredCode {
                code: code.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, channel: VerificationChannel, subject: &str) -> DomainResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(&code_key(channel, subject))
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.code.clone()))
    }

    async fn delete(&self, channel: VerificationChannel, subject: &str) -> DomainResult<bool> {
        Ok(self
            .entries
            .write()
            .await
            .remove(&code_key(channel, subject))
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: VerificationChannel = VerificationChannel::Phone;

    #[tokio::test(start_paused = true)]
    async fn test_code_expires_after_ttl() {
        let store = MemoryVerificationStore::new();
        store.put(PHONE, "01012345678", "4821", Duration::from_secs(300)).await.unwrap();

        tokio::time::advance(Duration::from_secs(299)).await;
        assert_eq!(store.get(PHONE, "01012345678").await.unwrap().as_deref(), Some("4821"));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(store.get(PHONE, "01012345678").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_removes_only_expired() {
        let store = MemoryVerificationStore::new();
        store.put(PHONE, "01011112222", "1111", Duration::from_secs(10)).await.unwrap();
        store.put(PHONE, "01033334444", "3333", Duration::from_secs(600)).await.unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(store.purge_expired().await, 1);
        assert_eq!(store.len().await, 1);
        assert!(store.get(PHONE, "01033334444").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_channels_do_not_collide() {
        let store = MemoryVerificationStore::new();
        let ttl = Duration::from_secs(60);
        store.put(PHONE, "same", "1234", ttl).await.unwrap();
        store.put(VerificationChannel::UniversityEmail, "same", "5678", ttl).await.unwrap();

        assert_eq!(store.get(PHONE, "same").await.unwrap().as_deref(), Some("1234"));
        assert_eq!(
            store.get(VerificationChannel::UniversityEmail, "same").await.unwrap().as_deref(),
            Some("5678")
        );
    }

    #[tokio::test]
    async fn test_last_write_wins_and_delete_reports_removal() {
        let store = MemoryVerificationStore::new();
        let ttl = Duration::from_secs(60);
        store.put(PHONE, "01012345678", "1111", ttl).await.unwrap();
        store.put(PHONE, "01012345678", "2222", ttl).await.unwrap();
        assert_eq!(store.get(PHONE, "01012345678").await.unwrap().as_deref(), Some("2222"));

        assert!(store.delete(PHONE, "01012345678").await.unwrap());
        assert!(!store.delete(PHONE, "01012345678").await.unwrap());
        assert!(store.is_empty().await);
    }
}
