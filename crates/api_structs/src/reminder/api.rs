use reminder_server_domain::Reminder;
use serde::{Deserialize, Serialize};

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<Reminder>;
}

pub mod add_reminder {
    use super::*;

    /// Any JSON object with at least `title`, `day`, `month` and `year`
    pub type RequestBody = serde_json::Value;

    pub type APIResponse = Reminder;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub id: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub ok: bool,
    }

    impl APIResponse {
        pub fn new() -> Self {
            Self { ok: true }
        }
    }
}
