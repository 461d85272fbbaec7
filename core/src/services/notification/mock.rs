//! Recording NotificationGateway for tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::NotificationGateway;

/// Records every message; optionally fails every send
#[derive(Clone, Default)]
pub struct MockNotificationGateway {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    should_fail: bool,
}

impl MockNotificationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// `(destination, text)` pairs in send order
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Texts sent to `destination`
    pub fn sent_to(&self, destination: &str) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(d, _)| d == destination)
            .map(|(_, text)| text)
            .collect()
    }

    /// Code inside the last `[....]` sent to `destination`
    pub fn last_code_for(&self, destination: &str) -> Option<String> {
        let text = self.sent_to(destination).pop()?;
        let start = text.rfind('[')? + 1;
        let end = text.rfind(']')?;
        text.get(start..end).map(str::to_string)
    }
}

#[async_trait]
impl NotificationGateway for MockNotificationGateway {
    async fn send(&self, destination: &str, text: &str) -> Result<String, String> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((destination.to_string(), text.to_string()));
        }
        if self.should_fail {
            return Err("Mock gateway failure".to_string());
        }
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}
