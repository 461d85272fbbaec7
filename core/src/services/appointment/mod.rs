//! Appointment lifecycle between a junior requester and a senior respondent
//!
//! - Request creation with topic and time-window validation
//! - Accept / reject by the senior, exactly once per appointment
//! - Meeting link hand-out, which closes the appointment
//! - Per-member listing and detail views

mod service;
mod types;


pub use service::AppointmentService;
pub use types::{
    Acceptance, AppointmentCard, AppointmentDetail, AppointmentOverview, Counterpart, JuniorInfo,
    NewAppointment, Rejection, SeniorInfo,
};
