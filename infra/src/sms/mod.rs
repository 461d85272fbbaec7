//! SMS Service Module
//!
//! Provider clients for text messages: a generic HTTP provider and a mock
//! for development. [`create_sms_service`] picks one from configuration.

use std::time::Duration;

pub mod http;
pub mod mock;
pub mod service;

pub use http::HttpSmsService;
pub use mock::MockSmsService;
pub use service::SmsService;

use mc_shared::config::NotificationConfig;

/// Create an SMS service based on configuration
///
/// Unknown providers and a misconfigured HTTP provider fall back to the mock
/// with an error log, so a bad deployment is loud but still starts.
pub fn create_sms_service(config: &NotificationConfig) -> Box<dyn SmsService> {
    match config.sms.provider.as_str() {
        "mock" => Box::new(MockSmsService::new()),
        "http" => {
            match HttpSmsService::new(
                config.sms.clone(),
                Duration::from_secs(config.request_timeout_secs),
                config.max_retries,
            ) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize HTTP SMS service");
                    tracing::warn!("Falling back to mock SMS service");
                    Box::new(MockSmsService::new())
                }
            }
        }
        other => {
            tracing::error!(provider = %other, "Unknown SMS provider");
            tracing::warn!("Falling back to mock SMS service");
            Box::new(MockSmsService::new())
        }
    }
}
