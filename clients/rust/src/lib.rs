mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use reminder::ReminderClient;
pub use reminder_server_domain::Reminder;
use status::StatusClient;
use std::sync::Arc;

/// Reminder Server SDK
///
/// The SDK contains methods for interacting with the reminder server
/// API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl ReminderSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
