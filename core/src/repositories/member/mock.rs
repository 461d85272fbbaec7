//! In-memory MemberRepository for tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainResult;

use super::r#trait::MemberRepository;

#[derive(Clone, Default)]
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, member: Member) -> Member {
        self.members.write().await.insert(member.id, member.clone());
        member
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.members.read().await.contains_key(&id)
    }

    pub async fn remove(&self, id: Uuid) -> Option<Member> {
        self.members.write().await.remove(&id)
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>> {
        Ok(self.members.read().await.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> DomainResult<Vec<Member>> {
        let members = self.members.read().await;
        Ok(ids.iter().filter_map(|id| members.get(id).cloned()).collect())
    }

    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool> {
        let members = self.members.read().await;
        Ok(members
            .values()
            .any(|m| m.phone_number.as_deref() == Some(phone_number)))
    }

    async fn delete_unregistered_before(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let mut members = self.members.write().await;
        let before = members.len();
        members.retain(|_, m| m.is_registered() || m.updated_at >= cutoff);
        Ok((before - members.len()) as u64)
    }
}
