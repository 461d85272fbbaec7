//! In-memory AppointmentRepository for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::appointment::{Appointment, AppointmentStatus};
use crate::errors::{AppointmentError, DomainResult};

use super::r#trait::{AppointmentRepository, ParticipantRole};

/// Mock appointment repository
///
/// Every check-and-write happens under a single write lock, which gives the
/// same atomicity as the conditional UPDATE of the SQL implementation.
#[derive(Clone, Default)]
pub struct MockAppointmentRepository {
    appointments: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

impl MockAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record as-is, bypassing the active-pair check
    pub async fn seed(&self, appointment: Appointment) {
        self.appointments
            .write()
            .await
            .insert(appointment.id, appointment);
    }

    pub async fn get(&self, id: Uuid) -> Option<Appointment> {
        self.appointments.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.appointments.read().await.len()
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepository {
    async fn insert(&self, appointment: &Appointment) -> DomainResult<()> {
        let mut appointments = self.appointments.write().await;

        let duplicate = appointments.values().any(|a| {
            a.requester_id == appointment.requester_id
                && a.respondent_id == appointment.respondent_id
                && a.status.is_active()
        });
        if duplicate {
            return Err(AppointmentError::DuplicateAppointment.into());
        }

        appointments.insert(appointment.id, appointment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Appointment>> {
        Ok(self.appointments.read().await.get(&id).cloned())
    }

    async fn find_active_by_pair(
        &self,
        requester_id: Uuid,
        respondent_id: Uuid,
    ) -> DomainResult<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .values()
            .find(|a| {
                a.requester_id == requester_id
                    && a.respondent_id == respondent_id
                    && a.status.is_active()
            })
            .cloned())
    }

    async fn find_all_for_participant(
        &self,
        member_id: Uuid,
        role: ParticipantRole,
    ) -> DomainResult<Vec<Appointment>> {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .values()
            .filter(|a| match role {
                ParticipantRole::Requester => a.requester_id == member_id,
                ParticipantRole::Respondent => a.respondent_id == member_id,
            })
            .cloned()
            .collect();
        found.sort_by_key(|a| a.created_at);
        Ok(found)
    }

    async fn transition(
        &self,
        appointment: &Appointment,
        expected: AppointmentStatus,
    ) -> DomainResult<bool> {
        let mut appointments = self.appointments.write().await;
        match appointments.get_mut(&appointment.id) {
            Some(stored) if stored.status == expected => {
                *stored = appointment.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
