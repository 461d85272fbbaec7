//! Mail Service Interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// E-mail service trait for plain-text messages
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a plain-text mail
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider identifier for the sent mail
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError>;

    fn provider_name(&self) -> &str;
}
