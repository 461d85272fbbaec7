//! Per-channel rules plugged into the verification flow

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use mc_shared::email::{normalize_email, split_address};
use mc_shared::phone::normalize_phone_number;

use crate::domain::entities::verification::VerificationChannel;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{InstitutionDirectory, MemberRepository};
use crate::services::notification::NotificationMessages;

/// What differs between the phone and the university e-mail flow
#[async_trait]
pub trait SubjectPolicy: Send + Sync {
    fn channel(&self) -> VerificationChannel;

    /// Canonical form of a raw subject, or why it is unacceptable
    async fn normalize(&self, raw: &str) -> DomainResult<String>;

    /// Text carrying `code` to the subject
    fn code_message(&self, messages: &NotificationMessages, code: &str) -> String {
        messages.verification_code(code)
    }

    /// Runs after a code matched and was consumed
    async fn after_verified(&self, _subject: &str) -> DomainResult<()> {
        Ok(())
    }
}

/// Mobile numbers: digits only, matching the configured pattern, not yet registered
pub struct PhonePolicy<M: MemberRepository> {
    members: Arc<M>,
    pattern: Regex,
}

impl<M: MemberRepository> PhonePolicy<M> {
    pub fn new(members: Arc<M>, pattern: &str) -> DomainResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| DomainError::Internal {
            message: format!("Invalid phone pattern: {}", e),
        })?;
        Ok(Self { members, pattern })
    }
}

#[async_trait]
impl<M: MemberRepository> SubjectPolicy for PhonePolicy<M> {
    fn channel(&self) -> VerificationChannel {
        VerificationChannel::Phone
    }

    async fn normalize(&self, raw: &str) -> DomainResult<String> {
        let phone = normalize_phone_number(raw);
        if !self.pattern.is_match(&phone) {
            return Err(VerificationError::InvalidPhoneFormat.into());
        }
        Ok(phone)
    }

    async fn after_verified(&self, subject: &str) -> DomainResult<()> {
        if self.members.exists_by_phone(subject).await? {
            return Err(VerificationError::DuplicateSubject.into());
        }
        Ok(())
    }
}

/// Addresses on a listed university domain
pub struct UniversityEmailPolicy<I: InstitutionDirectory> {
    directory: Arc<I>,
}

impl<I: InstitutionDirectory> UniversityEmailPolicy<I> {
    pub fn new(directory: Arc<I>) -> Self {
        Self { directory }
    }

    /// Lowercase e-mail domain registered for `univ_name`
    pub async fn institution_domain(&self, univ_name: &str) -> DomainResult<String> {
        self.directory
            .find_email_domain(univ_name.trim())
            .await?
            .map(|d| d.to_lowercase())
            .ok_or_else(|| VerificationError::UnknownInstitution.into())
    }
}

#[async_trait]
impl<I: InstitutionDirectory> SubjectPolicy for UniversityEmailPolicy<I> {
    fn channel(&self) -> VerificationChannel {
        VerificationChannel::UniversityEmail
    }

    async fn normalize(&self, raw: &str) -> DomainResult<String> {
        let email = normalize_email(raw);
        let (_, domain) = split_address(&email).ok_or(VerificationError::InvalidEmail)?;
        if !self.directory.is_approved_domain(domain).await? {
            return Err(VerificationError::UnknownInstitution.into());
        }
        Ok(email)
    }
}
