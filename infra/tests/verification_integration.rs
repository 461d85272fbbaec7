//! End-to-end verification flows over the in-memory store and mock gateways

use std::sync::Arc;
use std::time::Duration;

use mc_core::domain::entities::member::Member;
use mc_core::errors::{DomainError, VerificationError};
use mc_core::repositories::{MockInstitutionDirectory, MockMemberRepository};
use mc_core::services::notification::NotificationMessages;
use mc_core::services::verification::{
    IdentityVerificationFlow, PhonePolicy, UniversityEmailPolicy, VerificationFlowConfig,
};
use mc_infra::cache::MemoryVerificationStore;
use mc_infra::mail::MockMailService;
use mc_infra::notification::{MailNotificationGateway, SmsNotificationGateway};
use mc_infra::sms::MockSmsService;

const PHONE_PATTERN: &str = r"^010\d{8}$";

fn flow_config() -> VerificationFlowConfig {
    VerificationFlowConfig {
        code_length: 4,
        code_ttl: Duration::from_secs(300),
    }
}

/// Last bracketed code in a message, e.g. "... is [4821]."
fn code_in(text: &str) -> String {
    let start = text.rfind('[').expect("code start") + 1;
    let end = text.rfind(']').expect("code end");
    text[start..end].to_string()
}

#[tokio::test(start_paused = true)]
async fn test_phone_code_round_trip_and_expiry() {
    let members = Arc::new(MockMemberRepository::new());
    let store = Arc::new(MemoryVerificationStore::new());
    let sms = MockSmsService::with_options(false, false);

    let flow = IdentityVerificationFlow::new(
        PhonePolicy::new(members, PHONE_PATTERN).unwrap(),
        store.clone(),
        Arc::new(SmsNotificationGateway::new(Box::new(sms.clone()))),
        flow_config(),
        NotificationMessages::new("[MentorConnect]"),
    );

    let issued = flow.request_code("010-1234-5678").await.unwrap();
    assert_eq!(issued.subject, "01012345678");

    let sent = sms.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "01012345678");
    let code = code_in(&sent[0].1);
    assert_eq!(code.len(), 4);

    let verified = flow.verify_code("01012345678", &code).await.unwrap();
    assert_eq!(verified.subject, "01012345678");

    // Single use
    let again = flow.verify_code("01012345678", &code).await.unwrap_err();
    assert!(matches!(again, DomainError::Verification(VerificationError::NoPendingRequest)));

    // A fresh code expires after its TTL
    flow.request_code("01012345678").await.unwrap();
    let code = code_in(&sms.sent_messages().await[1].1);
    tokio::time::advance(Duration::from_secs(301)).await;

    let expired = flow.verify_code("01012345678", &code).await.unwrap_err();
    assert!(matches!(expired, DomainError::Verification(VerificationError::NoPendingRequest)));
    assert_eq!(store.purge_expired().await, 1);
}

#[tokio::test]
async fn test_phone_already_registered_is_rejected_after_match() {
    let members = Arc::new(MockMemberRepository::new());
    members
        .insert(Member::new("jane", "Engineering").with_phone("01012345678"))
        .await;
    let sms = MockSmsService::with_options(false, false);

    let flow = IdentityVerificationFlow::new(
        PhonePolicy::new(members, PHONE_PATTERN).unwrap(),
        Arc::new(MemoryVerificationStore::new()),
        Arc::new(SmsNotificationGateway::new(Box::new(sms.clone()))),
        flow_config(),
        NotificationMessages::new("[MentorConnect]"),
    );

    flow.request_code("01012345678").await.unwrap();
    let code = code_in(&sms.sent_messages().await[0].1);

    let err = flow.verify_code("01012345678", &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Verification(VerificationError::DuplicateSubject)));
}

#[tokio::test]
async fn test_sms_failure_surfaces_as_delivery_error() {
    let flow = IdentityVerificationFlow::new(
        PhonePolicy::new(Arc::new(MockMemberRepository::new()), PHONE_PATTERN).unwrap(),
        Arc::new(MemoryVerificationStore::new()),
        Arc::new(SmsNotificationGateway::new(Box::new(MockSmsService::with_options(false, true)))),
        flow_config(),
        NotificationMessages::new("[MentorConnect]"),
    );

    let err = flow.request_code("01012345678").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::DeliveryFailed { .. })
    ));
}

#[tokio::test]
async fn test_university_email_round_trip() {
    let directory = Arc::new(MockInstitutionDirectory::new().with("Seoul National University", "snu.ac.kr"));
    let mail = MockMailService::new();

    let flow = IdentityVerificationFlow::new(
        UniversityEmailPolicy::new(directory),
        Arc::new(MemoryVerificationStore::new()),
        Arc::new(MailNotificationGateway::new(Box::new(mail.clone()), "Verification code")),
        flow_config(),
        NotificationMessages::new("[MentorConnect]"),
    );

    let mismatch = flow
        .request_university_code("Seoul National University", "jane@kaist.ac.kr")
        .await
        .unwrap_err();
    assert!(matches!(mismatch, DomainError::Verification(VerificationError::DomainMismatch)));

    flow.request_university_code("Seoul National University", "  Jane@SNU.ac.kr ")
        .await
        .unwrap();

    let sent = mail.sent_mails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@snu.ac.kr");

    let code = code_in(&sent[0].body);
    let verified = flow.verify_code("jane@snu.ac.kr", &code).await.unwrap();
    assert_eq!(verified.subject, "jane@snu.ac.kr");
}
