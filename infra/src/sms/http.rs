//! SMS delivery through a generic HTTP provider
//!
//! Messages are POSTed as JSON with basic auth. A send is retried only when
//! the provider clearly did not take the message (connection refused, 429,
//! 503), so a message is never delivered twice.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use mc_shared::config::SmsProviderConfig;
use mc_shared::phone::mask_phone_number;

use super::service::SmsService;
use crate::InfrastructureError;

const DEFAULT_RETRY_DELAY_MS: u64 = 200;
const MAX_RETRY_DELAY_MS: u64 = 5000;

#[derive(Debug, Serialize)]
struct SendSmsRequest<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendSmsResponse {
    #[serde(default, alias = "id", alias = "sid")]
    message_id: Option<String>,
}

/// Outcome of one attempt
enum Attempt {
    Sent(String),
    Retry(String),
    Fail(String),
}

pub struct HttpSmsService {
    client: Client,
    config: SmsProviderConfig,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl HttpSmsService {
    /// Build a client for `config`
    ///
    /// # Returns
    /// * `Err(InfrastructureError::Config)` - No endpoint configured
    pub fn new(
        config: SmsProviderConfig,
        request_timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, InfrastructureError> {
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "SMS_API_URL must be set for the http SMS provider".to_string(),
            ));
        }

        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            config,
            max_retries: max_retries.max(1),
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        })
    }

    /// Override the initial backoff between attempts
    pub fn with_retry_delay(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    async fn attempt(&self, to: &str, message: &str) -> Attempt {
        let body = SendSmsRequest {
            from: &self.config.from_number,
            to,
            text: message,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_connect() => return Attempt::Retry(e.to_string()),
            Err(e) => return Attempt::Fail(e.to_string()),
        };

        let status = response.status();
        if status.is_success() {
            let parsed = response.json::<SendSmsResponse>().await.unwrap_or_default();
            let message_id = parsed
                .message_id
                .unwrap_or_else(|| format!("sms_{}", Uuid::new_v4()));
            return Attempt::Sent(message_id);
        }

        let reason = format!("provider responded with {}", status);
        if is_retriable_status(status) {
            Attempt::Retry(reason)
        } else {
            Attempt::Fail(reason)
        }
    }
}

/// Statuses meaning the provider did not accept the message
pub(crate) fn is_retriable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::SERVICE_UNAVAILABLE
}

#[async_trait]
impl SmsService for HttpSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked = mask_phone_number(phone_number);
        let mut delay = self.retry_delay_ms;
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, max_retries = self.max_retries, phone = %masked, "Sending SMS");

            match self.attempt(phone_number, message).await {
                Attempt::Sent(message_id) => {
                    info!(
                        target: "sms_service",
                        provider = "http",
                        phone = %masked,
                        message_id = %message_id,
                        "SMS sent"
                    );
                    return Ok(message_id);
                }
                Attempt::Retry(reason) if attempts < self.max_retries => {
                    warn!(
                        attempt = attempts,
                        phone = %masked,
                        reason = %reason,
                        "SMS not accepted, retrying in {}ms",
                        delay
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
                }
                Attempt::Retry(reason) | Attempt::Fail(reason) => {
                    return Err(InfrastructureError::Sms(format!(
                        "Failed to send SMS after {} attempt(s): {}",
                        attempts, reason
                    )));
                }
            }
        }
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> SmsProviderConfig {
        SmsProviderConfig {
            provider: "http".to_string(),
            api_url: api_url.to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            from_number: "0212345678".to_string(),
        }
    }

    #[test]
    fn test_requires_endpoint() {
        let result = HttpSmsService::new(config(""), Duration::from_secs(5), 3);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_only_unaccepted_statuses_are_retried() {
        assert!(is_retriable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retriable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retriable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_retriable_status(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_response_id_aliases() {
        let parsed: SendSmsResponse = serde_json::from_str(r#"{"sid":"SM123"}"#).unwrap();
        assert_eq!(parsed.message_id.as_deref(), Some("SM123"));

        let parsed: SendSmsResponse = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
        assert!(parsed.message_id.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_provider_fails_after_retries() {
        let service = HttpSmsService::new(config("http://127.0.0.1:9/sms"), Duration::from_secs(2), 2)
            .unwrap()
            .with_retry_delay(1);

        let result = service.send_sms("01012345678", "hello").await;
        assert!(matches!(result, Err(InfrastructureError::Sms(_))));
    }
}
