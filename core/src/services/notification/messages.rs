//! Texts sent to members

/// Message templates, each prefixed with the configured sender tag
#[derive(Debug, Clone)]
pub struct NotificationMessages {
    sender_tag: String,
}

impl NotificationMessages {
    pub fn new(sender_tag: impl Into<String>) -> Self {
        Self {
            sender_tag: sender_tag.into(),
        }
    }

    /// To the senior, when a junior asks for a meeting
    pub fn appointment_requested(&self, requester_nickname: &str) -> String {
        format!(
            "{} '{}' requested an appointment. Please review it within 48 hours.",
            self.sender_tag, requester_nickname
        )
    }

    /// To the junior, when the senior accepts
    pub fn appointment_accepted(&self, respondent_nickname: &str) -> String {
        format!(
            "{} '{}' accepted your appointment. Check the schedule in the app.",
            self.sender_tag, respondent_nickname
        )
    }

    /// To the junior, when the senior declines
    pub fn appointment_rejected(&self, respondent_nickname: &str) -> String {
        format!(
            "{} '{}' declined your appointment. Check the reason in the app.",
            self.sender_tag, respondent_nickname
        )
    }

    pub fn verification_code(&self, code: &str) -> String {
        format!("{} Your verification code is [{}].", self.sender_tag, code)
    }
}

impl Default for NotificationMessages {
    fn default() -> Self {
        Self::new("[MentorConnect]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_sender_tag() {
        let messages = NotificationMessages::new("[MC]");
        assert!(messages.appointment_requested("kim").starts_with("[MC] 'kim'"));
        assert_eq!(messages.verification_code("1234"), "[MC] Your verification code is [1234].");
    }
}
