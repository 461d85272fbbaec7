//! Outbound notification contract and message texts

mod messages;
mod mock;
mod traits;

pub use messages::NotificationMessages;
pub use mock::MockNotificationGateway;
pub use traits::NotificationGateway;
