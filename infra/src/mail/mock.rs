//! Mock mail service: logs instead of sending

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use mc_shared::email::{mask_email, split_address};

use super::service::MailService;
use crate::InfrastructureError;

/// A mail captured by [`MockMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct MockMailService {
    sent: Arc<RwLock<Vec<SentMail>>>,
    simulate_failure: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub async fn sent_mails(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        if split_address(to).is_none() {
            return Err(InfrastructureError::Mail(format!("Invalid address: {}", mask_email(to))));
        }

        if self.simulate_failure {
            warn!(to = %mask_email(to), "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail("Simulated mail sending failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.sent.write().await.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        info!(
            target: "mail_service",
            provider = "mock",
            to = %mask_email(to),
            message_id = %message_id,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
