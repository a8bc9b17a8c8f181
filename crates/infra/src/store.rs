use crate::repos::{IReminderRepo, ReadError};
use reminder_server_domain::{Collection, Reminder};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("The persisted reminders could not be loaded: {0}")]
    CorruptState(#[source] ReadError),
    #[error("The reminders could not be saved: {0:#}")]
    Persistence(anyhow::Error),
}

/// The single owner of the persisted `Collection`.
///
/// Every `load` and `save` goes through a `StoreSession`, and only one
/// `StoreSession` exists at a time for a given store.
pub struct ReminderStore {
    repo: Arc<dyn IReminderRepo>,
    recover_corrupt_state: bool,
    lock: Mutex<()>,
}

/// Exclusive access to the `ReminderStore`, held until dropped.
pub struct StoreSession<'a> {
    store: &'a ReminderStore,
    _guard: MutexGuard<'a, ()>,
}

impl ReminderStore {
    pub fn new(repo: Arc<dyn IReminderRepo>, recover_corrupt_state: bool) -> Self {
        Self {
            repo,
            recover_corrupt_state,
            lock: Mutex::new(()),
        }
    }

    /// Waits until no other session is open and starts a new one
    pub async fn lock(&self) -> StoreSession<'_> {
        let guard = self.lock.lock().await;
        StoreSession {
            store: self,
            _guard: guard,
        }
    }

    pub async fn load(&self) -> Result<Collection, StoreError> {
        self.lock().await.load().await
    }

    pub async fn save(&self, reminders: &[Reminder]) -> Result<(), StoreError> {
        self.lock().await.save(reminders).await
    }
}

impl<'a> StoreSession<'a> {
    /// Loads the committed `Collection`.
    ///
    /// Unless disabled in the `Config`, a damaged collection is logged and
    /// replaced by an empty one. The damaged content is lost on the next `save`.
    pub async fn load(&self) -> Result<Collection, StoreError> {
        match self.store.repo.read().await {
            Ok(reminders) => Ok(reminders),
            Err(e) if self.store.recover_corrupt_state => {
                warn!("{}. Continuing with an empty collection of reminders.", e);
                Ok(Vec::new())
            }
            Err(e) => Err(StoreError::CorruptState(e)),
        }
    }

    pub async fn save(&self, reminders: &[Reminder]) -> Result<(), StoreError> {
        self.store
            .repo
            .replace(reminders)
            .await
            .map_err(StoreError::Persistence)
    }
}
