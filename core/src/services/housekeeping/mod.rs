//! Periodic cleanup of abandoned registrations

mod sweeper;

pub use sweeper::RegistrationSweeper;
