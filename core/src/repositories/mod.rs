//! Repository and store interfaces implemented by the infrastructure layer.

pub mod appointment;
pub mod institution;
pub mod member;
pub mod verification_store;

pub use appointment::{AppointmentRepository, MockAppointmentRepository, ParticipantRole};
pub use institution::{InstitutionDirectory, MockInstitutionDirectory};
pub use member::{MemberRepository, MockMemberRepository};
pub use verification_store::{MockVerificationCodeStore, VerificationCodeStore};
