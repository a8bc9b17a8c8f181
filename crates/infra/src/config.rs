use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 8080;
const DEFAULT_DATA_FILE: &str = "reminders.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// The file holding the persisted `Collection` of `Reminder`s.
    /// Relative paths are resolved against the working directory of the process.
    pub data_file: PathBuf,
    /// When the data file cannot be parsed the server will by default continue
    /// with an empty `Collection` and overwrite the damaged file on the next write.
    /// Setting this to `false` makes every request fail with an internal error
    /// instead, leaving the damaged file untouched for manual recovery.
    pub recover_corrupt_state: bool,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let data_file = match std::env::var("REMINDERS_DATA_FILE") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                info!(
                    "Did not find REMINDERS_DATA_FILE environment variable. Using: {}",
                    DEFAULT_DATA_FILE
                );
                PathBuf::from(DEFAULT_DATA_FILE)
            }
        };

        let recover_corrupt_state = match std::env::var("REMINDERS_RECOVER_CORRUPT_STATE") {
            Ok(value) => parse_flag(&value).unwrap_or_else(|| {
                warn!(
                    "The given REMINDERS_RECOVER_CORRUPT_STATE: {} is not valid, falling back to: true.",
                    value
                );
                true
            }),
            Err(_) => true,
        };

        Self {
            port,
            data_file,
            recover_corrupt_state,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
