//! Mail Service Module
//!
//! Provider clients for e-mail: a generic HTTP provider and a mock.

use std::time::Duration;

pub mod http;
pub mod mock;
pub mod service;

pub use http::HttpMailService;
pub use mock::{MockMailService, SentMail};
pub use service::MailService;

use mc_shared::config::NotificationConfig;

/// Create a mail service based on configuration, falling back to the mock
pub fn create_mail_service(config: &NotificationConfig) -> Box<dyn MailService> {
    match config.mail.provider.as_str() {
        "mock" => Box::new(MockMailService::new()),
        "http" => match HttpMailService::new(
            config.mail.clone(),
            Duration::from_secs(config.request_timeout_secs),
        ) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize HTTP mail service");
                tracing::warn!("Falling back to mock mail service");
                Box::new(MockMailService::new())
            }
        },
        other => {
            tracing::error!(provider = %other, "Unknown mail provider");
            tracing::warn!("Falling back to mock mail service");
            Box::new(MockMailService::new())
        }
    }
}
