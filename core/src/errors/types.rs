//! Error types for the appointment lifecycle and identity verification
//!
//! Messages here are for logs and developers. The stable, user-facing code
//! of each variant comes from `mc_shared::error_codes`.

use mc_shared::error_codes;
use thiserror::Error;

/// Coarse classification every core error falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or contradictory input
    Validation,
    /// Caller is not the participant allowed to act
    Authorization,
    /// Current status does not permit the operation
    StateConflict,
    /// Id does not resolve
    NotFound,
    /// Downstream notification channel failed
    Delivery,
    /// Uniqueness violation
    Duplicate,
    /// Storage or other unexpected failure
    Internal,
}

/// Appointment lifecycle errors
#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Cannot request an appointment with yourself")]
    SelfAppointment,

    #[error("An active appointment already exists between these members")]
    DuplicateAppointment,

    #[error("Topic and personal topic cannot both be provided")]
    BothTopicsProvided,

    #[error("Either a topic or a personal topic is required")]
    NoTopicProvided,

    #[error("At least one time window is required")]
    NoTimeWindow,

    #[error("Time window must start before it ends")]
    InvalidTimeWindow,

    #[error("Appointment is not pending")]
    NotPending,

    #[error("Only the requested senior can answer this appointment")]
    NotAuthorized,

    #[error("Caller is not a participant of this appointment")]
    NotAMember,

    #[error("Appointment has no meeting link yet")]
    NoMeetingLink,

    #[error("Appointment is not scheduled")]
    NotScheduled,
}

impl AppointmentError {
    pub fn kind(&self) -> ErrorKind {
        use AppointmentError::*;
        match self {
            SelfAppointment | BothTopicsProvided | NoTopicProvided | NoTimeWindow
            | InvalidTimeWindow => ErrorKind::Validation,
            DuplicateAppointment => ErrorKind::Duplicate,
            NotAuthorized | NotAMember => ErrorKind::Authorization,
            NotPending | NoMeetingLink | NotScheduled => ErrorKind::StateConflict,
        }
    }

    pub fn error_code(&self) -> &'static str {
        use AppointmentError::*;
        match self {
            SelfAppointment => error_codes::SELF_APPOINTMENT,
            DuplicateAppointment => error_codes::DUPLICATE_APPOINTMENT,
            BothTopicsProvided => error_codes::TOPIC_CONFLICT,
            NoTopicProvided => error_codes::TOPIC_MISSING,
            NoTimeWindow => error_codes::NO_TIME_WINDOW,
            InvalidTimeWindow => error_codes::INVALID_TIME_WINDOW,
            NotPending => error_codes::NOT_PENDING,
            NotAuthorized => error_codes::NOT_AUTHORIZED,
            NotAMember => error_codes::NOT_A_MEMBER,
            NoMeetingLink => error_codes::NO_MEETING_LINK,
            NotScheduled => error_codes::NOT_SCHEDULED,
        }
    }
}

/// Verification code errors, shared by the phone and university e-mail flows
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Invalid phone format")]
    InvalidPhoneFormat,

    #[error("Invalid e-mail address")]
    InvalidEmail,

    #[error("Unknown institution")]
    UnknownInstitution,

    #[error("E-mail domain does not belong to the institution")]
    DomainMismatch,

    #[error("No pending verification request")]
    NoPendingRequest,

    #[error("Verification code does not match")]
    CodeMismatch,

    #[error("Subject is already registered")]
    DuplicateSubject,

    #[error("Failed to deliver verification code: {reason}")]
    DeliveryFailed { reason: String },
}

impl VerificationError {
    pub fn kind(&self) -> ErrorKind {
        use VerificationError::*;
        match self {
            InvalidPhoneFormat | InvalidEmail | UnknownInstitution | DomainMismatch
            | CodeMismatch => ErrorKind::Validation,
            NoPendingRequest => ErrorKind::StateConflict,
            DuplicateSubject => ErrorKind::Duplicate,
            DeliveryFailed { .. } => ErrorKind::Delivery,
        }
    }

    pub fn error_code(&self) -> &'static str {
        use VerificationError::*;
        match self {
            InvalidPhoneFormat => error_codes::PHONE_INVALID,
            InvalidEmail => error_codes::EMAIL_INVALID,
            UnknownInstitution => error_codes::UNKNOWN_INSTITUTION,
            DomainMismatch => error_codes::DOMAIN_MISMATCH,
            NoPendingRequest => error_codes::NO_PENDING_REQUEST,
            CodeMismatch => error_codes::CODE_MISMATCH,
            DuplicateSubject => error_codes::DUPLICATE_SUBJECT,
            DeliveryFailed { .. } => error_codes::DELIVERY_FAILED,
        }
    }
}
