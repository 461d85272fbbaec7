//! Verification channel shared by the phone and university e-mail flows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a verification code
pub const CODE_LENGTH: u32 = 4;

/// Lifetime of an issued code (5 minutes)
pub const CODE_TTL_SECONDS: u64 = 300;

/// Channel a subject is proven through
///
/// Stored codes are namespaced by channel so a phone number and an e-mail
/// address can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationChannel {
    /// SMS to a mobile number
    Phone,
    /// Mail to an address on an approved university domain
    UniversityEmail,
}

impl VerificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Phone => "phone",
            VerificationChannel::UniversityEmail => "university_email",
        }
    }
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
