//! Appointment lifecycle service

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use mc_shared::phone::mask_phone_number;

use crate::domain::entities::appointment::{Appointment, AppointmentStatus};
use crate::domain::entities::member::Member;
use crate::errors::{AppointmentError, DomainError, DomainResult};
use crate::repositories::{AppointmentRepository, MemberRepository, ParticipantRole};
use crate::services::notification::{NotificationGateway, NotificationMessages};

use super::types::{
    Acceptance, AppointmentCard, AppointmentDetail, AppointmentOverview, Counterpart, JuniorInfo,
    NewAppointment, Rejection, SeniorInfo,
};

/// What a list card may reveal for a given status
struct CardProjection {
    topics: bool,
    time_window: bool,
}

impl CardProjection {
    fn for_status(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => Self { topics: true, time_window: false },
            AppointmentStatus::Scheduled => Self { topics: true, time_window: true },
            AppointmentStatus::Past => Self { topics: false, time_window: true },
            AppointmentStatus::Rejected => Self { topics: false, time_window: false },
        }
    }
}

/// Drives appointments through `PENDING -> {SCHEDULED, REJECTED}` and `SCHEDULED -> PAST`
///
/// Status changes are written with a compare-and-swap on the stored status, so two
/// requests racing on the same appointment cannot both succeed. The loser gets a
/// state-conflict error and is not retried.
pub struct AppointmentService<A, M, N>
where
    A: AppointmentRepository,
    M: MemberRepository,
    N: NotificationGateway,
{
    appointments: Arc<A>,
    members: Arc<M>,
    notifier: Arc<N>,
    messages: NotificationMessages,
}

impl<A, M, N> AppointmentService<A, M, N>
where
    A: AppointmentRepository,
    M: MemberRepository,
    N: NotificationGateway,
{
    pub fn new(
        appointments: Arc<A>,
        members: Arc<M>,
        notifier: Arc<N>,
        messages: NotificationMessages,
    ) -> Self {
        Self {
            appointments,
            members,
            notifier,
            messages,
        }
    }

    /// Create a pending appointment from `requester_id` to a senior
    ///
    /// # Errors
    /// * `SelfAppointment`, `BothTopicsProvided`, `NoTopicProvided`, `NoTimeWindow`,
    ///   `InvalidTimeWindow` - Malformed request
    /// * `NotFound` - Requester or senior does not exist
    /// * `DuplicateAppointment` - The pair already has an active appointment
    pub async fn create(&self, requester_id: Uuid, request: NewAppointment) -> DomainResult<Uuid> {
        if requester_id == request.respondent_id {
            return Err(AppointmentError::SelfAppointment.into());
        }

        let personal_topic = request
            .personal_topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        match (request.topics.is_empty(), personal_topic.is_some()) {
            (false, true) => return Err(AppointmentError::BothTopicsProvided.into()),
            (true, false) => return Err(AppointmentError::NoTopicProvided.into()),
            _ => {}
        }

        if request.time_windows.is_empty() {
            return Err(AppointmentError::NoTimeWindow.into());
        }
        if request.time_windows.iter().any(|w| !w.is_well_formed()) {
            return Err(AppointmentError::InvalidTimeWindow.into());
        }

        let requester = self.load_member(requester_id).await?;
        let respondent = self.load_member(request.respondent_id).await?;
        if !respondent.is_senior() {
            return Err(DomainError::not_found("Senior profile"));
        }

        if self
            .appointments
            .find_active_by_pair(requester_id, respondent.id)
            .await?
            .is_some()
        {
            return Err(AppointmentError::DuplicateAppointment.into());
        }

        let appointment = Appointment::new(
            requester_id,
            respondent.id,
            request.time_windows,
            request.topics,
            personal_topic,
        );
        // The store re-checks the pair atomically; the lookup above only short-circuits
        self.appointments.insert(&appointment).await?;

        info!(
            appointment_id = %appointment.id,
            requester_id = %requester_id,
            respondent_id = %respondent.id,
            status = %appointment.status,
            event = "appointment_created",
            "Appointment requested"
        );

        let text = self.messages.appointment_requested(&requester.nickname);
        self.notify(&respondent, &text, "appointment_created").await;

        Ok(appointment.id)
    }

    /// Accept a pending appointment as its senior
    ///
    /// The proposed windows are replaced by `acceptance.time_window`, which does not
    /// have to be one of them.
    pub async fn accept(
        &self,
        appointment_id: Uuid,
        caller_id: Uuid,
        acceptance: Acceptance,
    ) -> DomainResult<()> {
        let mut appointment = self.load_pending_for_respondent(appointment_id, caller_id).await?;

        if !acceptance.time_window.is_well_formed() {
            return Err(AppointmentError::InvalidTimeWindow.into());
        }
        let meeting_link = acceptance.meeting_link.trim().to_string();
        if meeting_link.is_empty() {
            return Err(DomainError::validation("Meeting link is required"));
        }

        appointment.accept(acceptance.time_window, meeting_link)?;
        self.commit(&appointment, AppointmentStatus::Pending).await?;

        info!(
            appointment_id = %appointment.id,
            status = %appointment.status,
            event = "appointment_accepted",
            "Appointment accepted"
        );

        self.notify_requester(
            &appointment,
            |m, nickname| m.appointment_accepted(nickname),
            "appointment_accepted",
        )
        .await;
        Ok(())
    }

    /// Reject a pending appointment as its senior
    pub async fn reject(
        &self,
        appointment_id: Uuid,
        caller_id: Uuid,
        rejection: Rejection,
    ) -> DomainResult<()> {
        let mut appointment = self.load_pending_for_respondent(appointment_id, caller_id).await?;

        let reason = rejection.reason.trim().to_string();
        if reason.is_empty() {
            return Err(DomainError::validation("Reject reason is required"));
        }
        let detail = rejection
            .detail
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        appointment.reject(reason, detail)?;
        self.commit(&appointment, AppointmentStatus::Pending).await?;

        info!(
            appointment_id = %appointment.id,
            status = %appointment.status,
            event = "appointment_rejected",
            "Appointment rejected"
        );

        self.notify_requester(
            &appointment,
            |m, nickname| m.appointment_rejected(nickname),
            "appointment_rejected",
        )
        .await;
        Ok(())
    }

    /// Hand out the meeting link and mark the appointment `PAST`
    ///
    /// This is a write: a second call on the same appointment fails with
    /// `NotScheduled`.
    pub async fn reveal_meeting_link(&self, appointment_id: Uuid, caller_id: Uuid) -> DomainResult<String> {
        let mut appointment = self.load_appointment(appointment_id).await?;
        if !appointment.involves(caller_id) {
            return Err(AppointmentError::NotAMember.into());
        }

        let link = match appointment.meeting_link.as_deref() {
            Some(link) if !link.trim().is_empty() => link.to_string(),
            _ => return Err(AppointmentError::NoMeetingLink.into()),
        };

        appointment.mark_past()?;
        if !self
            .appointments
            .transition(&appointment, AppointmentStatus::Scheduled)
            .await?
        {
            return Err(AppointmentError::NotScheduled.into());
        }

        info!(
            appointment_id = %appointment.id,
            caller_id = %caller_id,
            status = %appointment.status,
            event = "meeting_link_revealed",
            "Meeting link revealed"
        );
        Ok(link)
    }

    /// Every appointment of `member_id`, as requester and (for seniors) as respondent
    pub async fn list_for_participant(&self, member_id: Uuid) -> DomainResult<AppointmentOverview> {
        let member = self.load_member(member_id).await?;

        let as_requester = self
            .appointments
            .find_all_for_participant(member_id, ParticipantRole::Requester)
            .await?;
        let as_respondent = if member.is_senior() {
            self.appointments
                .find_all_for_participant(member_id, ParticipantRole::Respondent)
                .await?
        } else {
            Vec::new()
        };

        let counterpart_ids: Vec<Uuid> = as_requester
            .iter()
            .map(|a| a.respondent_id)
            .chain(as_respondent.iter().map(|a| a.requester_id))
            .collect();
        let counterparts: HashMap<Uuid, Member> = self
            .members
            .find_by_ids(&counterpart_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut cards: Vec<AppointmentCard> = as_requester
            .iter()
            .map(|a| (a, ParticipantRole::Requester))
            .chain(as_respondent.iter().map(|a| (a, ParticipantRole::Respondent)))
            .filter_map(|(appointment, role)| Self::card(appointment, role, &counterparts))
            .collect();
        cards.sort_by_key(|c| c.created_at);

        let mut overview = AppointmentOverview {
            nickname: member.nickname,
            ..Default::default()
        };
        for card in cards {
            match card.status {
                AppointmentStatus::Pending => overview.pending.push(card),
                AppointmentStatus::Scheduled => overview.scheduled.push(card),
                AppointmentStatus::Past => overview.past.push(card),
                AppointmentStatus::Rejected => overview.rejected.push(card),
            }
        }
        Ok(overview)
    }

    /// Full detail of one appointment for either participant; read-only
    pub async fn get_detail(&self, appointment_id: Uuid, caller_id: Uuid) -> DomainResult<AppointmentDetail> {
        let appointment = self.load_appointment(appointment_id).await?;
        if !appointment.involves(caller_id) {
            return Err(AppointmentError::NotAMember.into());
        }

        let junior = self.load_member(appointment.requester_id).await?;
        let senior_member = self.load_member(appointment.respondent_id).await?;
        let senior = SeniorInfo::from_member(&senior_member)
            .ok_or_else(|| DomainError::not_found("Senior profile"))?;

        Ok(AppointmentDetail {
            appointment_id: appointment.id,
            status: appointment.status,
            junior: JuniorInfo::from(&junior),
            senior,
            topics: appointment.topics,
            personal_topic: appointment.personal_topic,
            time_windows: appointment.time_windows,
            reject_reason: appointment.reject_reason,
            reject_detail: appointment.reject_detail,
        })
    }

    fn card(
        appointment: &Appointment,
        viewer_role: ParticipantRole,
        counterparts: &HashMap<Uuid, Member>,
    ) -> Option<AppointmentCard> {
        let counterpart = match viewer_role {
            ParticipantRole::Requester => {
                let senior = counterparts.get(&appointment.respondent_id)?;
                Counterpart::Senior(SeniorInfo::from_member(senior)?)
            }
            ParticipantRole::Respondent => {
                let junior = counterparts.get(&appointment.requester_id)?;
                Counterpart::Junior(JuniorInfo::from(junior))
            }
        };

        let projection = CardProjection::for_status(appointment.status);
        let show_topics = projection.topics && viewer_role == ParticipantRole::Respondent;

        Some(AppointmentCard {
            appointment_id: appointment.id,
            status: appointment.status,
            counterpart,
            topics: show_topics.then(|| appointment.topics.clone()),
            personal_topic: if show_topics {
                appointment.personal_topic.clone()
            } else {
                None
            },
            time_window: if projection.time_window {
                appointment.time_windows.first().copied()
            } else {
                None
            },
            reject_reason: appointment.reject_reason.clone(),
            created_at: appointment.created_at,
        })
    }

    async fn load_appointment(&self, id: Uuid) -> DomainResult<Appointment> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Appointment"))
    }

    async fn load_member(&self, id: Uuid) -> DomainResult<Member> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Member"))
    }

    /// Shared preconditions of accept and reject: exists, pending, caller is the senior
    async fn load_pending_for_respondent(&self, id: Uuid, caller_id: Uuid) -> DomainResult<Appointment> {
        let appointment = self.load_appointment(id).await?;
        if appointment.status != AppointmentStatus::Pending {
            return Err(AppointmentError::NotPending.into());
        }
        if appointment.respondent_id != caller_id {
            return Err(AppointmentError::NotAuthorized.into());
        }
        Ok(appointment)
    }

    async fn commit(&self, appointment: &Appointment, expected: AppointmentStatus) -> DomainResult<()> {
        if self.appointments.transition(appointment, expected).await? {
            return Ok(());
        }
        warn!(
            appointment_id = %appointment.id,
            attempted = %appointment.status,
            event = "appointment_transition_lost",
            "Appointment status changed by a concurrent request"
        );
        Err(AppointmentError::NotPending.into())
    }

    async fn notify_requester<F>(&self, appointment: &Appointment, text: F, event: &'static str)
    where
        F: Fn(&NotificationMessages, &str) -> String,
    {
        let respondent_nickname = match self.members.find_by_id(appointment.respondent_id).await {
            Ok(Some(m)) => m.nickname,
            Ok(None) => {
                warn!(
                    appointment_id = %appointment.id,
                    event = event,
                    "Respondent not found, notification skipped"
                );
                return;
            }
            Err(e) => {
                warn!(
                    appointment_id = %appointment.id,
                    event = event,
                    error = %e,
                    "Failed to load respondent, notification skipped"
                );
                return;
            }
        };
        match self.members.find_by_id(appointment.requester_id).await {
            Ok(Some(requester)) => {
                let text = text(&self.messages, &respondent_nickname);
                self.notify(&requester, &text, event).await;
            }
            Ok(None) => warn!(
                appointment_id = %appointment.id,
                event = event,
                "Requester not found, notification skipped"
            ),
            Err(e) => warn!(
                appointment_id = %appointment.id,
                event = event,
                error = %e,
                "Failed to load requester, notification skipped"
            ),
        }
    }

    /// Best-effort SMS; failures are logged and never undo the state change
    async fn notify(&self, recipient: &Member, text: &str, event: &'static str) {
        let Some(phone) = recipient.phone_number.as_deref() else {
            warn!(
                member_id = %recipient.id,
                event = event,
                "Member has no phone number, notification skipped"
            );
            return;
        };

        if let Err(reason) = self.notifier.send(phone, text).await {
            warn!(
                member_id = %recipient.id,
                phone = %mask_phone_number(phone),
                event = event,
                reason = %reason,
                "Notification delivery failed"
            );
        }
    }
}
