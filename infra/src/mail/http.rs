//! Mail delivery through a generic HTTP provider (JSON POST, bearer auth)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use mc_shared::config::MailProviderConfig;
use mc_shared::email::mask_email;

use super::service::MailService;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendMailResponse {
    #[serde(default, alias = "id")]
    message_id: Option<String>,
}

pub struct HttpMailService {
    client: Client,
    config: MailProviderConfig,
}

impl HttpMailService {
    pub fn new(config: MailProviderConfig, request_timeout: Duration) -> Result<Self, InfrastructureError> {
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL must be set for the http mail provider".to_string(),
            ));
        }

        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl MailService for HttpMailService {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let request = SendMailRequest {
            from: &self.config.from_address,
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::Mail(format!(
                "provider responded with {}",
                status
            )));
        }

        let parsed = response.json::<SendMailResponse>().await.unwrap_or_default();
        let message_id = parsed
            .message_id
            .unwrap_or_else(|| format!("mail_{}", Uuid::new_v4()));

        info!(
            target: "mail_service",
            provider = "http",
            to = %mask_email(to),
            message_id = %message_id,
            "Mail sent"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_endpoint() {
        let result = HttpMailService::new(MailProviderConfig::default(), Duration::from_secs(5));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        let config = MailProviderConfig {
            provider: "http".to_string(),
            api_url: "http://127.0.0.1:9/mail".to_string(),
            ..MailProviderConfig::default()
        };
        let service = HttpMailService::new(config, Duration::from_secs(2)).unwrap();

        let result = service.send_mail("jane@snu.ac.kr", "code", "1234").await;
        assert!(matches!(result, Err(InfrastructureError::Http(_))));
    }
}
