//! Identity verification flow shared by the phone and university e-mail channels

use std::sync::Arc;

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};

use mc_shared::email::{mask_email, normalize_email, split_address};
use mc_shared::phone::mask_phone_number;

use crate::domain::entities::verification::VerificationChannel;
use crate::errors::{DomainResult, VerificationError};
use crate::repositories::{InstitutionDirectory, VerificationCodeStore};
use crate::services::notification::{NotificationGateway, NotificationMessages};

use super::config::VerificationFlowConfig;
use super::policy::{SubjectPolicy, UniversityEmailPolicy};
use super::types::{IssuedCode, VerifiedSubject};

/// Issues one-time codes, delivers them and consumes them on verification
///
/// The channel-specific parts (normalization, post-verification checks) come
/// from the [`SubjectPolicy`]; everything else is shared.
pub struct IdentityVerificationFlow<P, C, N>
where
    P: SubjectPolicy,
    C: VerificationCodeStore,
    N: NotificationGateway,
{
    policy: P,
    store: Arc<C>,
    gateway: Arc<N>,
    config: VerificationFlowConfig,
    messages: NotificationMessages,
}

impl<P, C, N> IdentityVerificationFlow<P, C, N>
where
    P: SubjectPolicy,
    C: VerificationCodeStore,
    N: NotificationGateway,
{
    pub fn new(
        policy: P,
        store: Arc<C>,
        gateway: Arc<N>,
        config: VerificationFlowConfig,
        messages: NotificationMessages,
    ) -> Self {
        Self {
            policy,
            store,
            gateway,
            config,
            messages,
        }
    }

    pub fn channel(&self) -> VerificationChannel {
        self.policy.channel()
    }

    /// Issue a fresh code for `subject` and send it
    ///
    /// The code is stored before dispatch. A failed dispatch returns
    /// `DeliveryFailed` but leaves the code in place; the next request for the
    /// same subject overwrites it.
    pub async fn request_code(&self, subject: &str) -> DomainResult<IssuedCode> {
        let channel = self.policy.channel();
        let subject = self.policy.normalize(subject).await?;
        let code = generate_code(self.config.code_length);

        self.store
            .put(channel, &subject, &code, self.config.code_ttl)
            .await?;

        tracing::info!(
            channel = %channel,
            subject = %mask_subject(channel, &subject),
            event = "verification_code_issued",
            "Verification code issued"
        );

        let text = self.policy.code_message(&self.messages, &code);
        let message_id = match self.gateway.send(&subject, &text).await {
            Ok(message_id) => message_id,
            Err(reason) => {
                tracing::warn!(
                    channel = %channel,
                    subject = %mask_subject(channel, &subject),
                    reason = %reason,
                    event = "verification_code_delivery_failed",
                    "Failed to deliver verification code"
                );
                return Err(VerificationError::DeliveryFailed { reason }.into());
            }
        };

        let ttl = chrono::Duration::from_std(self.config.code_ttl)
            .unwrap_or_else(|_| chrono::Duration::seconds(0));

        Ok(IssuedCode {
            subject,
            channel,
            expires_at: Utc::now() + ttl,
            message_id,
        })
    }

    /// Check `submitted` against the live code for `subject`
    ///
    /// # Errors
    /// * `NoPendingRequest` - No live code (never issued, consumed, or expired)
    /// * `CodeMismatch` - Wrong code; the stored code stays valid
    /// * `DuplicateSubject` - Phone only: the number is already registered
    pub async fn verify_code(&self, subject: &str, submitted: &str) -> DomainResult<VerifiedSubject> {
        let channel = self.policy.channel();
        let subject = self.policy.normalize(subject).await?;

        let stored = self
            .store
            .get(channel, &subject)
            .await?
            .ok_or(VerificationError::NoPendingRequest)?;

        if !constant_time_eq(stored.as_bytes(), submitted.trim().as_bytes()) {
            tracing::warn!(
                channel = %channel,
                subject = %mask_subject(channel, &subject),
                event = "verification_code_mismatch",
                "Verification code mismatch"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        // Single use: only the caller whose delete removed the record wins
        if !self.store.delete(channel, &subject).await? {
            return Err(VerificationError::NoPendingRequest.into());
        }
        self.policy.after_verified(&subject).await?;

        tracing::info!(
            channel = %channel,
            subject = %mask_subject(channel, &subject),
            event = "verification_succeeded",
            "Subject verified"
        );

        Ok(VerifiedSubject { subject, channel })
    }
}

impl<I, C, N> IdentityVerificationFlow<UniversityEmailPolicy<I>, C, N>
where
    I: InstitutionDirectory,
    C: VerificationCodeStore,
    N: NotificationGateway,
{
    /// Issue a code to `email` after checking it belongs to `univ_name`
    ///
    /// # Errors
    /// * `UnknownInstitution` - `univ_name` is not listed
    /// * `InvalidEmail` - Malformed address
    /// * `DomainMismatch` - Address is not on the institution's domain
    pub async fn request_university_code(&self, univ_name: &str, email: &str) -> DomainResult<IssuedCode> {
        let expected = self.policy.institution_domain(univ_name).await?;

        let email = normalize_email(email);
        let (_, domain) = split_address(&email).ok_or(VerificationError::InvalidEmail)?;
        if domain != expected {
            return Err(VerificationError::DomainMismatch.into());
        }

        self.request_code(&email).await
    }
}

/// Uniform random code of exactly `length` digits, no leading zero
pub(crate) fn generate_code(length: u32) -> String {
    let length = length.clamp(1, 9);
    let low = 10u32.pow(length - 1);
    let high = 10u32.pow(length);
    OsRng.gen_range(low..high).to_string()
}

fn mask_subject(channel: VerificationChannel, subject: &str) -> String {
    match channel {
        VerificationChannel::Phone => mask_phone_number(subject),
        VerificationChannel::UniversityEmail => mask_email(subject),
    }
}
