//! MySQL repository implementations

mod appointment_repository_impl;
mod institution_directory_impl;
mod member_repository_impl;

pub use appointment_repository_impl::MySqlAppointmentRepository;
pub use institution_directory_impl::MySqlInstitutionDirectory;
pub use member_repository_impl::MySqlMemberRepository;

use mc_core::errors::DomainError;

/// Wrap a driver error with what we were doing when it happened
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}
