//! Outbound notification configuration module

use serde::{Deserialize, Serialize};

/// SMS provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsProviderConfig {
    /// Provider name ("http", "mock")
    pub provider: String,
    /// Endpoint messages are POSTed to
    #[serde(default)]
    pub api_url: String,
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// API secret
    #[serde(default)]
    pub api_secret: String,
    /// Registered sender number
    pub from_number: String,
}

impl Default for SmsProviderConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            from_number: String::from("01000000000"),
        }
    }
}

/// E-mail provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailProviderConfig {
    /// Provider name ("http", "mock")
    pub provider: String,
    /// Endpoint messages are POSTed to
    #[serde(default)]
    pub api_url: String,
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: String,
    /// Sender address
    pub from_address: String,
    /// Subject line for verification mails
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for MailProviderConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@mentorconnect.app"),
            subject: default_subject(),
        }
    }
}

/// Outbound notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Tag prefixed to every outgoing text, e.g. "[MentorConnect]"
    #[serde(default = "default_sender_tag")]
    pub sender_tag: String,

    /// SMS provider
    #[serde(default)]
    pub sms: SmsProviderConfig,

    /// E-mail provider
    #[serde(default)]
    pub mail: MailProviderConfig,

    /// Per-request timeout for provider calls in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Attempts per message before a delivery is reported as failed
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sender_tag: default_sender_tag(),
            sms: SmsProviderConfig::default(),
            mail: MailProviderConfig::default(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl NotificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, fallback: String| std::env::var(key).unwrap_or(fallback);

        Self {
            sender_tag: var("NOTIFICATION_SENDER_TAG", defaults.sender_tag),
            sms: SmsProviderConfig {
                provider: var("SMS_PROVIDER", defaults.sms.provider),
                api_url: var("SMS_API_URL", defaults.sms.api_url),
                api_key: var("SMS_API_KEY", defaults.sms.api_key),
                api_secret: var("SMS_API_SECRET", defaults.sms.api_secret),
                from_number: var("SMS_FROM_NUMBER", defaults.sms.from_number),
            },
            mail: MailProviderConfig {
                provider: var("MAIL_PROVIDER", defaults.mail.provider),
                api_url: var("MAIL_API_URL", defaults.mail.api_url),
                api_key: var("MAIL_API_KEY", defaults.mail.api_key),
                from_address: var("MAIL_FROM_ADDRESS", defaults.mail.from_address),
                subject: var("MAIL_SUBJECT", defaults.mail.subject),
            },
            request_timeout_secs: std::env::var("NOTIFICATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            max_retries: defaults.max_retries,
        }
    }
}

fn default_sender_tag() -> String {
    String::from("[MentorConnect]")
}

fn default_subject() -> String {
    String::from("MentorConnect verification code")
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}
