//! Appointment repository module.

mod r#trait;
pub use r#trait::{AppointmentRepository, ParticipantRole};

mod mock;
pub use mock::MockAppointmentRepository;
