//! Short-lived storage for issued verification codes.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::verification::VerificationChannel;
use crate::errors::DomainResult;

/// Holds one live code per (channel, subject)
///
/// A `get` after the TTL has elapsed must report the code as absent, whether
/// or not the backend has physically removed it yet.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// Store `code` for `subject`, replacing any previous one (last write wins)
    async fn put(
        &self,
        channel: VerificationChannel,
        subject: &str,
        code: &str,
        ttl: Duration,
    ) -> DomainResult<()>;

    /// Live code for `subject`, if any
    async fn get(&self, channel: VerificationChannel, subject: &str) -> DomainResult<Option<String>>;

    /// Remove the code for `subject`; returns whether a record was removed
    ///
    /// Removal is atomic: when several callers delete the same record, exactly
    /// one of them sees `true`. A missing record is not an error.
    async fn delete(&self, channel: VerificationChannel, subject: &str) -> DomainResult<bool>;
}
