//! Verification code store module.

mod r#trait;
pub use r#trait::VerificationCodeStore;

mod mock;
pub use mock::MockVerificationCodeStore;
