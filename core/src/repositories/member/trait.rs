//! Member repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainResult;

/// Read access to members plus the cleanup used by housekeeping
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>>;

    /// Members for the given ids; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> DomainResult<Vec<Member>>;

    /// Whether a member already registered this normalized phone number
    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool>;

    /// Delete members without a verified phone number last updated before `cutoff`
    ///
    /// # Returns
    /// Number of members removed
    async fn delete_unregistered_before(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;
}
