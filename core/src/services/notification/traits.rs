//! Trait for outbound notification delivery

use async_trait::async_trait;

/// Sends a text to a phone number or e-mail address
///
/// Delivery is at-most-once; callers never retry through this trait.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Send `text` to `destination`
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider accepted the message
    /// * `Err(reason)` - Delivery failed
    async fn send(&self, destination: &str, text: &str) -> Result<String, String>;
}
