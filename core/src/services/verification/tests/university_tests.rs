//! University e-mail channel tests

use crate::domain::entities::verification::VerificationChannel;
use crate::errors::{DomainError, VerificationError};
use crate::repositories::MockVerificationCodeStore;
use crate::services::notification::MockNotificationGateway;

use super::mocks::university_flow;

const EMAIL: &str = "jane@snu.ac.kr";

fn verification_error(err: DomainError) -> VerificationError {
    match err {
        DomainError::Verification(e) => e,
        other => panic!("Expected verification error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_university_code_round_trip() {
    let gateway = MockNotificationGateway::new();
    let flow = university_flow(MockVerificationCodeStore::new(), gateway.clone());

    let issued = flow
        .request_university_code("Seoul National University", "  Jane@SNU.ac.kr ")
        .await
        .unwrap();
    assert_eq!(issued.subject, EMAIL);
    assert_eq!(issued.channel, VerificationChannel::UniversityEmail);

    let code = gateway.last_code_for(EMAIL).unwrap();
    let verified = flow.verify_code("JANE@snu.ac.kr", &code).await.unwrap();
    assert_eq!(verified.subject, EMAIL);
}

#[tokio::test]
async fn test_unknown_institution() {
    let flow = university_flow(MockVerificationCodeStore::new(), MockNotificationGateway::new());

    let err = flow
        .request_university_code("Hogwarts", "harry@hogwarts.ac.uk")
        .await
        .unwrap_err();

    assert!(matches!(verification_error(err), VerificationError::UnknownInstitution));
}

#[tokio::test]
async fn test_domain_of_another_institution() {
    let gateway = MockNotificationGateway::new();
    let flow = university_flow(MockVerificationCodeStore::new(), gateway.clone());

    let err = flow
        .request_university_code("Seoul National University", "jane@kaist.ac.kr")
        .await
        .unwrap_err();

    assert!(matches!(verification_error(err), VerificationError::DomainMismatch));
    assert!(gateway.sent().is_empty());
}

#[tokio::test]
async fn test_unlisted_domain_is_unknown_institution() {
    let flow = university_flow(MockVerificationCodeStore::new(), MockNotificationGateway::new());

    let err = flow.request_code("jane@gmail.com").await.unwrap_err();
    assert!(matches!(verification_error(err), VerificationError::UnknownInstitution));

    // Subdomains are not approved implicitly
    let err = flow.request_code("jane@mail.snu.ac.kr").await.unwrap_err();
    assert!(matches!(verification_error(err), VerificationError::UnknownInstitution));
}

#[tokio::test]
async fn test_malformed_email() {
    let flow = university_flow(MockVerificationCodeStore::new(), MockNotificationGateway::new());

    let err = flow.request_code("jane.snu.ac.kr").await.unwrap_err();

    assert!(matches!(verification_error(err), VerificationError::InvalidEmail));
}

#[tokio::test]
async fn test_channels_do_not_share_codes() {
    let store = MockVerificationCodeStore::new();
    let gateway = MockNotificationGateway::new();
    let flow = university_flow(store.clone(), gateway.clone());

    flow.request_code(EMAIL).await.unwrap();

    assert!(store.peek(VerificationChannel::UniversityEmail, EMAIL).await.is_some());
    assert!(store.peek(VerificationChannel::Phone, EMAIL).await.is_none());
}
