//! Integration tests for provider selection and the notification adapters

use mc_core::services::notification::NotificationGateway;
use mc_infra::config::NotificationConfig;
use mc_infra::mail::{create_mail_service, MailService, MockMailService};
use mc_infra::notification::{MailNotificationGateway, SmsNotificationGateway};
use mc_infra::sms::{create_sms_service, MockSmsService, SmsService};

#[tokio::test]
async fn test_default_config_selects_mock_providers() {
    let config = NotificationConfig::default();

    let sms = create_sms_service(&config);
    let mail = create_mail_service(&config);

    assert_eq!(sms.provider_name(), "mock");
    assert_eq!(mail.provider_name(), "mock");
    assert!(sms.is_available().await);
}

#[tokio::test]
async fn test_http_provider_without_endpoint_falls_back_to_mock() {
    let mut config = NotificationConfig::default();
    config.sms.provider = "http".to_string();
    config.sms.api_url = String::new();
    config.mail.provider = "http".to_string();
    config.mail.api_url = String::new();

    assert_eq!(create_sms_service(&config).provider_name(), "mock");
    assert_eq!(create_mail_service(&config).provider_name(), "mock");
}

#[tokio::test]
async fn test_http_provider_with_endpoint_is_selected() {
    let mut config = NotificationConfig::default();
    config.sms.provider = "http".to_string();
    config.sms.api_url = "https://sms.example.com/v1/messages".to_string();
    config.mail.provider = "http".to_string();
    config.mail.api_url = "https://mail.example.com/v1/send".to_string();

    assert_eq!(create_sms_service(&config).provider_name(), "http");
    assert_eq!(create_mail_service(&config).provider_name(), "http");
}

#[tokio::test]
async fn test_unknown_provider_falls_back_to_mock() {
    let mut config = NotificationConfig::default();
    config.sms.provider = "carrier-pigeon".to_string();

    assert_eq!(create_sms_service(&config).provider_name(), "mock");
}

#[tokio::test]
async fn test_gateways_deliver_through_mocks() {
    let sms = MockSmsService::with_options(false, false);
    let sms_gateway = SmsNotificationGateway::new(Box::new(sms.clone()));
    sms_gateway
        .send("01012345678", "[MentorConnect] 'jane' requested an appointment.")
        .await
        .unwrap();
    assert_eq!(sms.sent_messages().await.len(), 1);

    let mail = MockMailService::new();
    let mail_gateway = MailNotificationGateway::new(Box::new(mail.clone()), "Your code");
    mail_gateway.send("kim@kaist.ac.kr", "[MentorConnect] code").await.unwrap();
    assert_eq!(mail.sent_mails().await[0].to, "kim@kaist.ac.kr");
}

#[tokio::test]
async fn test_mail_mock_rejects_malformed_address() {
    let mail = MockMailService::new();
    assert!(mail.send_mail("not-an-address", "s", "b").await.is_err());
    assert!(mail.sent_mails().await.is_empty());
}
