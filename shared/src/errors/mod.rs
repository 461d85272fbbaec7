//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body handed to whatever surface exposes the core operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes surfaced to callers, one per distinguishable failure
pub mod error_codes {
    // General
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

    // Appointments
    pub const SELF_APPOINTMENT: &str = "SELF_APPOINTMENT";
    pub const DUPLICATE_APPOINTMENT: &str = "DUPLICATE_APPOINTMENT";
    pub const TOPIC_CONFLICT: &str = "TOPIC_CONFLICT";
    pub const TOPIC_MISSING: &str = "TOPIC_MISSING";
    pub const NO_TIME_WINDOW: &str = "NO_TIME_WINDOW";
    pub const INVALID_TIME_WINDOW: &str = "INVALID_TIME_WINDOW";
    pub const NOT_PENDING: &str = "NOT_PENDING";
    pub const NOT_AUTHORIZED: &str = "NOT_AUTHORIZED";
    pub const NOT_A_MEMBER: &str = "NOT_A_MEMBER";
    pub const NO_MEETING_LINK: &str = "NO_MEETING_LINK";
    pub const NOT_SCHEDULED: &str = "NOT_SCHEDULED";

    // Verification
    pub const PHONE_INVALID: &str = "PHONE_INVALID";
    pub const EMAIL_INVALID: &str = "EMAIL_INVALID";
    pub const UNKNOWN_INSTITUTION: &str = "UNKNOWN_INSTITUTION";
    pub const DOMAIN_MISMATCH: &str = "DOMAIN_MISMATCH";
    pub const NO_PENDING_REQUEST: &str = "NO_PENDING_REQUEST";
    pub const CODE_MISMATCH: &str = "CODE_MISMATCH";
    pub const DUPLICATE_SUBJECT: &str = "DUPLICATE_SUBJECT";
    pub const DELIVERY_FAILED: &str = "DELIVERY_FAILED";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_detail() {
        let response = ErrorResponse::new(error_codes::NOT_PENDING, "Appointment is not pending")
            .add_detail("status", "SCHEDULED");

        assert_eq!(response.error, "NOT_PENDING");
        let details = response.details.unwrap();
        assert_eq!(details["status"], serde_json::json!("SCHEDULED"));
    }

    #[test]
    fn test_details_skipped_when_empty() {
        let response = ErrorResponse::new(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}
