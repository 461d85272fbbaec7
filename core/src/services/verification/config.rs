//! Configuration for the identity verification flow

use std::time::Duration;

use mc_shared::VerificationConfig;

use crate::domain::entities::verification::{CODE_LENGTH, CODE_TTL_SECONDS};

/// Code shape and lifetime used by [`super::IdentityVerificationFlow`]
#[derive(Debug, Clone)]
pub struct VerificationFlowConfig {
    /// Number of digits per code, between 1 and 9
    pub code_length: u32,
    /// How long an issued code stays verifiable
    pub code_ttl: Duration,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            code_ttl: Duration::from_secs(CODE_TTL_SECONDS),
        }
    }
}

impl From<&VerificationConfig> for VerificationFlowConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length.clamp(1, 9),
            code_ttl: Duration::from_secs(config.code_ttl_seconds),
        }
    }
}
