//! Business services containing domain logic and use cases.

pub mod appointment;
pub mod housekeeping;
pub mod notification;
pub mod verification;

// Re-export commonly used types
pub use appointment::{AppointmentService, NewAppointment, Acceptance, Rejection};
pub use housekeeping::RegistrationSweeper;
pub use notification::{NotificationGateway, NotificationMessages};
pub use verification::{
    IdentityVerificationFlow, IssuedCode, PhonePolicy, SubjectPolicy, UniversityEmailPolicy,
    VerificationFlowConfig, VerifiedSubject,
};
