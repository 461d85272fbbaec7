//! Results of the identity verification flow

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::verification::VerificationChannel;

/// A code was stored and handed to the gateway
///
/// The code itself is deliberately absent.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedCode {
    /// Normalized subject the code was issued for
    pub subject: String,
    pub channel: VerificationChannel,
    pub expires_at: DateTime<Utc>,
    /// Provider message id
    pub message_id: String,
}

/// A subject proved it controls the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedSubject {
    pub subject: String,
    pub channel: VerificationChannel,
}
