mod reminder;

pub use reminder::{FileReminderRepo, IReminderRepo, InMemoryReminderRepo, ReadError};
