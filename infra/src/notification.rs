//! Adapters from the SMS and mail services to the core `NotificationGateway`
//!
//! The core only sees `Result<message_id, reason>`; provider errors are
//! flattened to their display text here.

use async_trait::async_trait;

use mc_core::services::notification::NotificationGateway;

use crate::mail::MailService;
use crate::sms::SmsService;

/// Delivers notifications to phone numbers by SMS
pub struct SmsNotificationGateway {
    service: Box<dyn SmsService>,
}

impl SmsNotificationGateway {
    pub fn new(service: Box<dyn SmsService>) -> Self {
        Self { service }
    }

    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }
}

#[async_trait]
impl NotificationGateway for SmsNotificationGateway {
    async fn send(&self, destination: &str, text: &str) -> Result<String, String> {
        self.service
            .send_sms(destination, text)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Delivers notifications to e-mail addresses, all under one subject line
pub struct MailNotificationGateway {
    service: Box<dyn MailService>,
    subject: String,
}

impl MailNotificationGateway {
    pub fn new(service: Box<dyn MailService>, subject: impl Into<String>) -> Self {
        Self {
            service,
            subject: subject.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }
}

#[async_trait]
impl NotificationGateway for MailNotificationGateway {
    async fn send(&self, destination: &str, text: &str) -> Result<String, String> {
        self.service
            .send_mail(destination, &self.subject, text)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MockMailService;
    use crate::sms::MockSmsService;

    #[tokio::test]
    async fn test_sms_gateway_forwards_and_flattens_errors() {
        let sms = MockSmsService::with_options(false, false);
        let gateway = SmsNotificationGateway::new(Box::new(sms.clone()));

        let id = gateway.send("01012345678", "hello").await.unwrap();
        assert!(id.starts_with("mock_"));
        assert_eq!(sms.get_message_count(), 1);

        let failing = SmsNotificationGateway::new(Box::new(MockSmsService::with_options(false, true)));
        let reason = failing.send("01012345678", "hello").await.unwrap_err();
        assert!(reason.contains("Simulated"));
    }

    #[tokio::test]
    async fn test_mail_gateway_uses_configured_subject() {
        let mail = MockMailService::new();
        let gateway = MailNotificationGateway::new(Box::new(mail.clone()), "Verify your university e-mail");

        gateway.send("jane@snu.ac.kr", "[MentorConnect] code").await.unwrap();

        let sent = mail.sent_mails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Verify your university e-mail");
        assert_eq!(sent[0].to, "jane@snu.ac.kr");
    }
}
