//! Fixtures for verification flow tests

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::{
    MockInstitutionDirectory, MockMemberRepository, MockVerificationCodeStore,
};
use crate::services::notification::{MockNotificationGateway, NotificationMessages};
use crate::services::verification::{
    IdentityVerificationFlow, PhonePolicy, UniversityEmailPolicy, VerificationFlowConfig,
};

pub type PhoneFlow =
    IdentityVerificationFlow<PhonePolicy<MockMemberRepository>, MockVerificationCodeStore, MockNotificationGateway>;

pub type UniversityFlow = IdentityVerificationFlow<
    UniversityEmailPolicy<MockInstitutionDirectory>,
    MockVerificationCodeStore,
    MockNotificationGateway,
>;

pub const TTL: Duration = Duration::from_secs(300);

pub fn config() -> VerificationFlowConfig {
    VerificationFlowConfig {
        code_length: 4,
        code_ttl: TTL,
    }
}

pub fn phone_flow(
    members: MockMemberRepository,
    store: MockVerificationCodeStore,
    gateway: MockNotificationGateway,
) -> PhoneFlow {
    let policy = PhonePolicy::new(Arc::new(members), r"^010\d{8}$").unwrap();
    IdentityVerificationFlow::new(
        policy,
        Arc::new(store),
        Arc::new(gateway),
        config(),
        NotificationMessages::new("[MC]"),
    )
}

pub fn directory() -> MockInstitutionDirectory {
    MockInstitutionDirectory::new()
        .with("Seoul National University", "snu.ac.kr")
        .with("KAIST", "kaist.ac.kr")
}

pub fn university_flow(
    store: MockVerificationCodeStore,
    gateway: MockNotificationGateway,
) -> UniversityFlow {
    IdentityVerificationFlow::new(
        UniversityEmailPolicy::new(Arc::new(directory())),
        Arc::new(store),
        Arc::new(gateway),
        config(),
        NotificationMessages::new("[MC]"),
    )
}
