//! Identity verification by one-time code
//!
//! One flow, two channels:
//! - Phone: SMS to a normalized mobile number, rejected if already registered
//! - University e-mail: mail to an address on an approved university domain

mod config;
mod policy;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationFlowConfig;
pub use policy::{PhonePolicy, SubjectPolicy, UniversityEmailPolicy};
pub use service::IdentityVerificationFlow;
pub use types::{IssuedCode, VerifiedSubject};
