use reminder_server_api::Application;
use reminder_server_infra::{Config, ReminderContext};
use reminder_server_sdk::ReminderSDK;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Directory removed together with everything in it when dropped
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!(
            "reminder-server-{}-{}-{}-{}",
            prefix,
            std::process::id(),
            nanos,
            counter
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub struct TestApp {
    pub config: Config,
    pub address: String,
    // Deleted on drop, so tests must keep the `TestApp` bound
    _data_dir: TempDir,
}

impl TestApp {
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }
}

pub struct SpawnOptions {
    /// Content of the data file before the server starts
    pub initial_data: Option<String>,
    pub recover_corrupt_state: bool,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            initial_data: None,
            recover_corrupt_state: true,
        }
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ReminderSDK) {
    spawn_app_with(SpawnOptions::default()).await
}

pub async fn spawn_app_with(options: SpawnOptions) -> (TestApp, ReminderSDK) {
    let data_dir = TempDir::new("api");
    let data_file = data_dir.path().join("reminders.json");
    if let Some(content) = &options.initial_data {
        std::fs::write(&data_file, content).unwrap();
    }

    let config = Config {
        port: 0, // Random port
        data_file,
        recover_corrupt_state: options.recover_corrupt_state,
    };
    let ctx = ReminderContext::create(config.clone());
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
        _data_dir: data_dir,
    };
    let sdk = ReminderSDK::new(address);
    (app, sdk)
}
