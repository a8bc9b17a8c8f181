use crate::base::{APIResponse, BaseClient};
use reminder_server_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base
            .get("api/reminders".into(), StatusCode::OK)
            .await
    }

    /// Adds a reminder. The server assigns an `id` when the given one is missing or empty.
    pub async fn add(
        &self,
        reminder: add_reminder::RequestBody,
    ) -> APIResponse<add_reminder::APIResponse> {
        self.base
            .post(reminder, "api/add".into(), StatusCode::OK)
            .await
    }

    pub async fn delete<T: Into<String>>(
        &self,
        id: T,
    ) -> APIResponse<delete_reminder::APIResponse> {
        let body = delete_reminder::RequestBody { id: id.into() };
        self.base
            .post(body, "api/delete".into(), StatusCode::OK)
            .await
    }
}
