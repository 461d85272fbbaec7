//! Sweeper for members that never finished phone verification

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use mc_shared::HousekeepingConfig;

use crate::errors::DomainResult;
use crate::repositories::MemberRepository;

/// Deletes members without a verified phone number once their grace period is over
pub struct RegistrationSweeper<M: MemberRepository> {
    members: Arc<M>,
    config: HousekeepingConfig,
}

impl<M: MemberRepository + 'static> RegistrationSweeper<M> {
    pub fn new(members: Arc<M>, config: HousekeepingConfig) -> Self {
        Self { members, config }
    }

    /// Run a single sweep
    ///
    /// # Returns
    /// Number of members removed
    pub async fn run_once(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - chrono::Duration::minutes(self.config.grace_period_minutes);
        let removed = self.members.delete_unregistered_before(cutoff).await?;

        info!(
            removed = removed,
            cutoff = %cutoff,
            event = "unregistered_members_swept",
            "Registration sweep completed"
        );
        Ok(removed)
    }

    /// Run the sweep every `interval_seconds` on a background task
    ///
    /// Returns `None` when housekeeping is disabled.
    pub fn spawn(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Registration sweeper is disabled");
            return None;
        }

        let period = Duration::from_secs(self.config.interval_seconds.max(1));
        Some(tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Registration sweeper started"
            );
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                if let Err(e) = self.run_once().await {
                    error!(error = %e, "Registration sweep failed");
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::member::Member;
    use crate::repositories::MockMemberRepository;

    fn config() -> HousekeepingConfig {
        HousekeepingConfig {
            enabled: true,
            interval_seconds: 60,
            grace_period_minutes: 60,
        }
    }

    #[tokio::test]
    async fn test_run_once_removes_only_stale_unregistered() {
        let members = MockMemberRepository::new();

        let mut stale = Member::new("stale", "Art");
        stale.updated_at = Utc::now() - chrono::Duration::hours(3);
        let stale = members.insert(stale).await;

        let fresh = members.insert(Member::new("fresh", "Art")).await;

        let mut registered = Member::new("registered", "Art").with_phone("01012345678");
        registered.updated_at = Utc::now() - chrono::Duration::days(30);
        let registered = members.insert(registered).await;

        let sweeper = RegistrationSweeper::new(Arc::new(members.clone()), config());
        assert_eq!(sweeper.run_once().await.unwrap(), 1);

        assert!(!members.contains(stale.id).await);
        assert!(members.contains(fresh.id).await);
        assert!(members.contains(registered.id).await);
    }

    #[tokio::test]
    async fn test_disabled_sweeper_does_not_spawn() {
        let mut config = config();
        config.enabled = false;
        let sweeper = Arc::new(RegistrationSweeper::new(
            Arc::new(MockMemberRepository::new()),
            config,
        ));

        assert!(sweeper.spawn().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_sweeper_runs_on_interval() {
        let members = MockMemberRepository::new();
        let mut stale = Member::new("stale", "Art");
        stale.updated_at = Utc::now() - chrono::Duration::hours(3);
        let stale = members.insert(stale).await;

        let sweeper = Arc::new(RegistrationSweeper::new(Arc::new(members.clone()), config()));
        let handle = sweeper.spawn().unwrap();

        // First tick fires immediately
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!members.contains(stale.id).await);

        handle.abort();
    }
}
