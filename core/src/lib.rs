//! # MentorConnect Core
//!
//! Domain layer for the MentorConnect backend: appointment lifecycle between
//! juniors and seniors, one-time-code identity verification, and the
//! repository, store and gateway traits the infrastructure layer implements.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Appointment, AppointmentStatus, Member, SeniorProfile, TimeWindow, Topic, VerificationChannel,
};
pub use errors::{AppointmentError, DomainError, DomainResult, ErrorKind, VerificationError};
pub use repositories::{
    AppointmentRepository, InstitutionDirectory, MemberRepository, ParticipantRole,
    VerificationCodeStore,
};
pub use services::{
    AppointmentService, IdentityVerificationFlow, NotificationGateway, NotificationMessages,
    RegistrationSweeper,
};
