mod config;
mod repos;
mod store;
mod system;

pub use config::Config;
pub use repos::{FileReminderRepo, IReminderRepo, InMemoryReminderRepo, ReadError};
use std::sync::Arc;
pub use store::{ReminderStore, StoreError, StoreSession};
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct ReminderContext {
    pub store: Arc<ReminderStore>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReminderContext {
    /// Creates a context persisting to the data file given in the `Config`
    pub fn create(config: Config) -> Self {
        let repo = Arc::new(FileReminderRepo::new(config.data_file.clone()));
        let store = ReminderStore::new(repo, config.recover_corrupt_state);
        Self {
            store: Arc::new(store),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        let config = Config::new();
        let store = ReminderStore::new(
            Arc::new(InMemoryReminderRepo::new()),
            config.recover_corrupt_state,
        );
        Self {
            store: Arc::new(store),
            config,
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ReminderContext {
    ReminderContext::create(Config::new())
}
