//! In-memory VerificationCodeStore for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::entities::verification::VerificationChannel;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::VerificationCodeStore;

/// Mock store honoring TTLs against tokio's clock, so paused-time tests can expire codes
#[derive(Clone, Default)]
pub struct MockVerificationCodeStore {
    codes: Arc<RwLock<HashMap<(VerificationChannel, String), (String, Instant)>>>,
    should_fail: bool,
    read_delay: Option<Duration>,
}

impl MockVerificationCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every call fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Store whose `get` takes `delay`, like a network round trip
    pub fn with_read_delay(delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Raw stored code, ignoring expiry
    pub async fn peek(&self, channel: VerificationChannel, subject: &str) -> Option<String> {
        self.codes
            .read()
            .await
            .get(&(channel, subject.to_string()))
            .map(|(code, _)| code.clone())
    }

    fn check(&self) -> DomainResult<()> {
        if self.should_fail {
            return Err(DomainError::Internal {
                message: "Store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VerificationCodeStore for MockVerificationCodeStore {
    async fn put(
        &self,
        channel: VerificationChannel,
        subject: &str,
        code: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        self.check()?;
        self.codes.write().await.insert(
            (channel, subject.to_string()),
            (code.to_string(), Instant::now() + ttl),
        );
        Ok(())
    }

    async fn get(&self, channel: VerificationChannel, subject: &str) -> DomainResult<Option<String>> {
        self.check()?;
        let now = Instant::now();
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        let codes = self.codes.read().await;
        Ok(codes
            .get(&(channel, subject.to_string()))
            .filter(|(_, expires_at)| now < *expires_at)
            .map(|(code, _)| code.clone()))
    }

    async fn delete(&self, channel: VerificationChannel, subject: &str) -> DomainResult<bool> {
        self.check()?;
        Ok(self
            .codes
            .write()
            .await
            .remove(&(channel, subject.to_string()))
            .is_some())
    }
}
