mod file;
mod inmemory;

pub use file::FileReminderRepo;
pub use inmemory::InMemoryReminderRepo;
use reminder_server_domain::{Collection, Reminder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Unable to read the persisted reminders. Error message: `{0}`")]
    Unreadable(#[source] std::io::Error),
    #[error("The persisted reminders are not a valid collection. Error message: `{0}`")]
    Malformed(#[source] serde_json::Error),
}

/// Storage of the whole `Collection` of `Reminder`s.
///
/// Implementations are not expected to coordinate concurrent callers,
/// that is the job of the `ReminderStore` wrapping them.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Reads the last committed `Collection`. A missing collection is empty.
    async fn read(&self) -> Result<Collection, ReadError>;
    /// Replaces the committed `Collection`. Readers must never be able to
    /// observe a partially replaced `Collection`.
    async fn replace(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
}
