//! Member entity: a registered user, optionally holding a senior profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Career profile that lets a member receive appointment requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorProfile {
    /// Profile identifier (distinct from the member id)
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub detail_position: String,
    /// Career level, e.g. "junior", "5+ years"
    pub level: String,
}

/// Registered member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub nickname: String,
    pub image: Option<String>,

    /// Normalized digits; `None` until phone verification completes
    pub phone_number: Option<String>,

    pub univ_name: Option<String>,
    pub field: String,
    pub departments: Vec<String>,

    /// Present when the member has a senior (respondent) profile
    pub senior: Option<SeniorProfile>,

    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn new(nickname: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.into(),
            image: None,
            phone_number: None,
            univ_name: None,
            field: field.into(),
            departments: Vec::new(),
            senior: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_phone(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_senior(mut self, senior: SeniorProfile) -> Self {
        self.senior = Some(senior);
        self
    }

    pub fn with_departments(mut self, departments: Vec<String>) -> Self {
        self.departments = departments;
        self
    }

    /// Whether the member can be asked for appointments
    pub fn is_senior(&self) -> bool {
        self.senior.is_some()
    }

    /// Whether phone verification has completed
    pub fn is_registered(&self) -> bool {
        self.phone_number.is_some()
    }

    /// First listed department, shown on appointment cards
    pub fn primary_department(&self) -> Option<&str> {
        self.departments.first().map(String::as_str)
    }
}
