//! Redis-backed verification code store
//!
//! One key per (channel, subject) with a native TTL, so expiry needs no sweeping.

use async_trait::async_trait;
use std::time::Duration;

use mc_core::domain::entities::verification::VerificationChannel;
use mc_core::errors::DomainResult;
use mc_core::repositories::VerificationCodeStore;

use super::code_key;
use super::redis_client::RedisClient;

pub struct RedisVerificationStore {
    client: RedisClient,
}

impl RedisVerificationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl VerificationCodeStore for RedisVerificationStore {
    async fn put(
        &self,
        channel: VerificationChannel,
        subject: &str,
        code: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        // SET EX rejects 0; a sub-second TTL still gets one second
        let seconds = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(&code_key(channel, subject), code, seconds)
            .await?;
        Ok(())
    }

    async fn get(&self, channel: VerificationChannel, subject: &str) -> DomainResult<Option<String>> {
        Ok(self.client.get(&code_key(channel, subject)).await?)
    }

    async fn delete(&self, channel: VerificationChannel, subject: &str) -> DomainResult<bool> {
        // DEL is atomic; only one concurrent caller gets a removed count of 1
        Ok(self.client.delete(&code_key(channel, subject)).await?)
    }
}
