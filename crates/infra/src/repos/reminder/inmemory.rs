use super::{IReminderRepo, ReadError};
use reminder_server_domain::{Collection, Reminder};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn read(&self) -> Result<Collection, ReadError> {
        let reminders = self.reminders.lock().unwrap();
        Ok(reminders.clone())
    }

    async fn replace(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        let mut stored = self.reminders.lock().unwrap();
        *stored = reminders.to_vec();
        Ok(())
    }
}
