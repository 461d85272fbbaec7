//! Inputs and read models of the appointment service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::appointment::{AppointmentStatus, TimeWindow, Topic};
use crate::domain::entities::member::Member;

/// A junior's request for a meeting
#[derive(Debug, Clone, Deserialize)]
pub struct NewAppointment {
    pub respondent_id: Uuid,
    pub time_windows: Vec<TimeWindow>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub personal_topic: Option<String>,
}

/// The senior's acceptance
#[derive(Debug, Clone, Deserialize)]
pub struct Acceptance {
    pub time_window: TimeWindow,
    pub meeting_link: String,
}

/// The senior's refusal
#[derive(Debug, Clone, Deserialize)]
pub struct Rejection {
    pub reason: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Junior side of an appointment as shown to others
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JuniorInfo {
    pub member_id: Uuid,
    pub nickname: String,
    pub image: Option<String>,
    pub field: String,
    pub department: Option<String>,
}

impl From<&Member> for JuniorInfo {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id,
            nickname: member.nickname.clone(),
            image: member.image.clone(),
            field: member.field.clone(),
            department: member.primary_department().map(str::to_string),
        }
    }
}

/// Senior side of an appointment as shown to others
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeniorInfo {
    pub member_id: Uuid,
    pub senior_id: Uuid,
    pub nickname: String,
    pub image: Option<String>,
    pub field: String,
    pub company: String,
    pub position: String,
    pub detail_position: String,
    pub level: String,
}

impl SeniorInfo {
    /// `None` when the member has no senior profile
    pub fn from_member(member: &Member) -> Option<Self> {
        let senior = member.senior.as_ref()?;
        Some(Self {
            member_id: member.id,
            senior_id: senior.id,
            nickname: member.nickname.clone(),
            image: member.image.clone(),
            field: member.field.clone(),
            company: senior.company.clone(),
            position: senior.position.clone(),
            detail_position: senior.detail_position.clone(),
            level: senior.level.clone(),
        })
    }
}

/// The other participant, from the viewer's side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Counterpart {
    /// Viewer is the senior
    Junior(JuniorInfo),
    /// Viewer is the junior
    Senior(SeniorInfo),
}

/// One entry of a member's appointment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentCard {
    pub appointment_id: Uuid,
    pub status: AppointmentStatus,
    pub counterpart: Counterpart,
    /// Only on the senior's cards, and only while the appointment is open
    pub topics: Option<Vec<Topic>>,
    pub personal_topic: Option<String>,
    /// Only once a window has been chosen
    pub time_window: Option<TimeWindow>,
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A member's appointments grouped by status
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentOverview {
    pub nickname: String,
    pub pending: Vec<AppointmentCard>,
    pub scheduled: Vec<AppointmentCard>,
    pub past: Vec<AppointmentCard>,
    pub rejected: Vec<AppointmentCard>,
}

impl AppointmentOverview {
    pub fn total(&self) -> usize {
        self.pending.len() + self.scheduled.len() + self.past.len() + self.rejected.len()
    }
}

/// Full view of one appointment for either participant
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetail {
    pub appointment_id: Uuid,
    pub status: AppointmentStatus,
    pub junior: JuniorInfo,
    pub senior: SeniorInfo,
    pub topics: Vec<Topic>,
    pub personal_topic: Option<String>,
    pub time_windows: Vec<TimeWindow>,
    pub reject_reason: Option<String>,
    pub reject_detail: Option<String>,
}
