//! Shared utilities and common types for the MentorConnect server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes
//! - Utility functions (phone and e-mail normalization, log masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, CacheConfig, VerificationConfig, NotificationConfig,
    HousekeepingConfig, LoggingConfig,
};
pub use errors::{ErrorResponse, IntoErrorResponse, error_codes};
pub use utils::{email, phone};
