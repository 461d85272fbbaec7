//! Appointment entity and its status state machine.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppointmentError;

/// Lifecycle status of an appointment
///
/// `Pending` is initial; `Past` and `Rejected` are terminal. The only edges are
/// `Pending -> Scheduled`, `Pending -> Rejected` and `Scheduled -> Past`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Requested by the junior, awaiting the senior's answer
    Pending,
    /// Accepted with a chosen time window and meeting link
    Scheduled,
    /// Meeting link consumed
    Past,
    /// Declined by the senior
    Rejected,
}

impl AppointmentStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Past => "PAST",
            AppointmentStatus::Rejected => "REJECTED",
        }
    }

    /// Whether `next` is reachable from `self` in one step
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Scheduled) | (Pending, Rejected) | (Scheduled, Past)
        )
    }

    /// Active appointments block a second request between the same pair
    pub fn is_active(&self) -> bool {
        match self {
            AppointmentStatus::Pending | AppointmentStatus::Scheduled => true,
            AppointmentStatus::Past | AppointmentStatus::Rejected => false,
        }
    }

    /// Statuses that count as active, for store queries
    pub fn active() -> [AppointmentStatus; 2] {
        [AppointmentStatus::Pending, AppointmentStatus::Scheduled]
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AppointmentStatus::Pending),
            "SCHEDULED" => Ok(AppointmentStatus::Scheduled),
            "PAST" => Ok(AppointmentStatus::Past),
            "REJECTED" => Ok(AppointmentStatus::Rejected),
            other => Err(format!("Unknown appointment status: {}", other)),
        }
    }
}

/// Fixed menu of conversation topics a junior can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CareerPath,
    JobSearch,
    Interview,
    Portfolio,
    Internship,
    GraduateSchool,
    WorkLife,
    SkillDevelopment,
}

/// A candidate or chosen meeting slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeWindow {
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            date,
            start_time,
            end_time,
        }
    }

    /// A window must start before it ends
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}

/// Mentorship appointment between a junior requester and a senior respondent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier
    pub id: Uuid,

    /// Member id of the junior who asked for the meeting
    pub requester_id: Uuid,

    /// Member id of the senior being asked
    pub respondent_id: Uuid,

    pub status: AppointmentStatus,

    /// Proposed windows while pending, the single chosen window afterwards
    pub time_windows: Vec<TimeWindow>,

    /// Structured topics; mutually exclusive with `personal_topic`
    pub topics: Vec<Topic>,

    /// Free-text topic; mutually exclusive with `topics`
    pub personal_topic: Option<String>,

    /// Set on acceptance
    pub meeting_link: Option<String>,

    /// Set on rejection
    pub reject_reason: Option<String>,
    pub reject_detail: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a pending appointment
    ///
    /// Input validation is the lifecycle service's job; this only assembles the record.
    pub fn new(
        requester_id: Uuid,
        respondent_id: Uuid,
        time_windows: Vec<TimeWindow>,
        topics: Vec<Topic>,
        personal_topic: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            requester_id,
            respondent_id,
            status: AppointmentStatus::Pending,
            time_windows,
            topics,
            personal_topic,
            meeting_link: None,
            reject_reason: None,
            reject_detail: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `member_id` is one of the two participants
    pub fn involves(&self, member_id: Uuid) -> bool {
        self.requester_id == member_id || self.respondent_id == member_id
    }

    /// Moves to `Scheduled`, keeping only the chosen window
    pub fn accept(&mut self, window: TimeWindow, meeting_link: String) -> Result<(), AppointmentError> {
        self.ensure_can_move_to(AppointmentStatus::Scheduled)?;
        self.status = AppointmentStatus::Scheduled;
        self.time_windows = vec![window];
        self.meeting_link = Some(meeting_link);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Moves to `Rejected`, stamping the reason
    pub fn reject(&mut self, reason: String, detail: Option<String>) -> Result<(), AppointmentError> {
        self.ensure_can_move_to(AppointmentStatus::Rejected)?;
        self.status = AppointmentStatus::Rejected;
        self.reject_reason = Some(reason);
        self.reject_detail = detail;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Moves to `Past` once the meeting link has been handed out
    pub fn mark_past(&mut self) -> Result<(), AppointmentError> {
        self.ensure_can_move_to(AppointmentStatus::Past)?;
        self.status = AppointmentStatus::Past;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn ensure_can_move_to(&self, next: AppointmentStatus) -> Result<(), AppointmentError> {
        if self.status.can_transition_to(next) {
            return Ok(());
        }
        match next {
            AppointmentStatus::Past => Err(AppointmentError::NotScheduled),
            _ => Err(AppointmentError::NotPending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> TimeWindow {
        TimeWindow::new(
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        )
    }

    fn pending() -> Appointment {
        Appointment::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            vec![window()],
            vec![Topic::Interview],
            None,
        )
    }

    #[test]
    fn test_only_forward_edges_are_allowed() {
        use AppointmentStatus::*;
        let all = [Pending, Scheduled, Past, Rejected];
        let mut allowed = Vec::new();
        for from in all {
            for to in all {
                if from.can_transition_to(to) {
                    allowed.push((from, to));
                }
            }
        }
        assert_eq!(
            allowed,
            vec![(Pending, Scheduled), (Pending, Rejected), (Scheduled, Past)]
        );
    }

    #[test]
    fn test_status_storage_round_trip() {
        assert_eq!("SCHEDULED".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Scheduled));
        assert_eq!(AppointmentStatus::Rejected.as_str(), "REJECTED");
        assert!("scheduled".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Topic::CareerPath).unwrap(), "\"career_path\"");
        assert_eq!(serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(), "\"SCHEDULED\"");

        let window: TimeWindow =
            serde_json::from_str(r#"{"date":"2026-11-02","start_time":"19:00:00","end_time":"20:00:00"}"#)
                .unwrap();
        assert_eq!(window, self::window());
    }

    #[test]
    fn test_accept_replaces_windows() {
        let mut appointment = pending();
        appointment.time_windows.push(window());

        appointment
            .accept(window(), "https://meet.example.com/abc".to_string())
            .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.time_windows.len(), 1);
        assert_eq!(appointment.meeting_link.as_deref(), Some("https://meet.example.com/abc"));
    }

    #[test]
    fn test_reject_after_accept_fails() {
        let mut appointment = pending();
        appointment.accept(window(), "link".to_string()).unwrap();

        let err = appointment.reject("busy".to_string(), None).unwrap_err();
        assert!(matches!(err, AppointmentError::NotPending));
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_mark_past_requires_scheduled() {
        let mut appointment = pending();
        assert!(matches!(appointment.mark_past(), Err(AppointmentError::NotScheduled)));

        appointment.accept(window(), "link".to_string()).unwrap();
        appointment.mark_past().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Past);
        assert!(matches!(appointment.mark_past(), Err(AppointmentError::NotScheduled)));
    }

    #[test]
    fn test_time_window_well_formed() {
        let mut w = window();
        assert!(w.is_well_formed());
        w.end_time = w.start_time;
        assert!(!w.is_well_formed());
    }
}
