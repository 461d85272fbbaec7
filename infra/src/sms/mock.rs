//! Mock SMS Service Implementation
//!
//! Logs messages instead of sending them. Used in development and by tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use mc_shared::phone::{is_valid_mobile, mask_phone_number};

use super::service::SmsService;
use crate::InfrastructureError;

/// Mock SMS service for development and testing
///
/// - Logs SMS messages
/// - Validates phone numbers
/// - Generates mock message IDs
/// - Tracks sent messages for assertions
#[derive(Clone)]
pub struct MockSmsService {
    message_count: Arc<AtomicU64>,
    sent: Arc<RwLock<Vec<(String, String)>>>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(RwLock::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// `(phone, text)` pairs accepted so far
    pub async fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }

    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked_phone = mask_phone_number(phone_number);

        if !is_valid_mobile(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                masked_phone
            )));
        }

        if self.simulate_failure {
            warn!(phone = %masked_phone, "Mock SMS service simulating failure");
            return Err(InfrastructureError::Sms("Simulated SMS sending failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.sent
            .write()
            .await
            .push((phone_number.to_string(), message.to_string()));

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS #{} to {}", count, phone_number);
            println!("{}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_and_counts() {
        let service = MockSmsService::with_options(false, false);
        let id = service.send_sms("01012345678", "[MentorConnect] hi").await.unwrap();

        assert!(id.starts_with("mock_"));
        assert_eq!(service.get_message_count(), 1);
        assert_eq!(
            service.sent_messages().await,
            vec![("01012345678".to_string(), "[MentorConnect] hi".to_string())]
        );
    }

    #[tokio::test]
    async fn test_mock_rejects_malformed_number() {
        let service = MockSmsService::with_options(false, false);
        assert!(service.send_sms("12345", "hi").await.is_err());
        assert_eq!(service.get_message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let service = MockSmsService::with_options(false, true);
        assert!(!service.is_available().await);
        assert!(matches!(
            service.send_sms("01012345678", "hi").await,
            Err(InfrastructureError::Sms(_))
        ));
    }
}
