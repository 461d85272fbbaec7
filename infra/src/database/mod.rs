//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Repository implementations for appointments, members and institutions

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAppointmentRepository, MySqlInstitutionDirectory, MySqlMemberRepository};
