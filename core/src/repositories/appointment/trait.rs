//! Appointment repository trait.
//!
//! Status changes go through [`AppointmentRepository::transition`], a
//! compare-and-swap on the stored status. Callers run as independent requests,
//! so the check-then-set of a transition has to be atomic in the store itself.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::appointment::{Appointment, AppointmentStatus};
use crate::errors::DomainResult;

/// Side of an appointment a member is looked up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    Requester,
    Respondent,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist a new pending appointment
    ///
    /// Fails with `AppointmentError::DuplicateAppointment` when the pair already
    /// has an active appointment. The check and the insert are atomic.
    async fn insert(&self, appointment: &Appointment) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Appointment>>;

    /// Pending or scheduled appointment between the pair, if any
    async fn find_active_by_pair(
        &self,
        requester_id: Uuid,
        respondent_id: Uuid,
    ) -> DomainResult<Option<Appointment>>;

    /// All appointments where `member_id` plays `role`, oldest first
    async fn find_all_for_participant(
        &self,
        member_id: Uuid,
        role: ParticipantRole,
    ) -> DomainResult<Vec<Appointment>>;

    /// Write `appointment` only if the stored status still equals `expected`
    ///
    /// # Returns
    /// * `Ok(true)` - The record was updated
    /// * `Ok(false)` - The stored status moved on (or the record is gone); nothing written
    async fn transition(
        &self,
        appointment: &Appointment,
        expected: AppointmentStatus,
    ) -> DomainResult<bool>;
}
