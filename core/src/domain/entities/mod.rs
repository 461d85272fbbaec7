//! Domain entities representing core business objects.

pub mod appointment;
pub mod member;
pub mod verification;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentStatus, TimeWindow, Topic};
pub use member::{Member, SeniorProfile};
pub use verification::{VerificationChannel, CODE_LENGTH, CODE_TTL_SECONDS};
