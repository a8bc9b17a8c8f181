use super::{IReminderRepo, ReadError};
use anyhow::Context;
use reminder_server_domain::{Collection, Reminder};
use std::{
    ffi::OsString,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tokio::task;
use tracing::warn;

type RenameFn = fn(&Path, &Path) -> io::Result<()>;

/// Keeps the `Collection` as a pretty printed JSON array in a single file.
///
/// Writes go to a sibling `<file>.tmp` which is then renamed over the
/// data file, so the data file always holds either the old or the new array.
/// File access runs on the blocking thread pool.
pub struct FileReminderRepo {
    path: PathBuf,
    tmp_path: PathBuf,
    rename: RenameFn,
}

impl FileReminderRepo {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let mut tmp_name = OsString::from(path.as_os_str());
        tmp_name.push(".tmp");

        Self {
            path,
            tmp_path: PathBuf::from(tmp_name),
            rename: rename_into_place,
        }
    }

    #[cfg(test)]
    fn with_rename<P: Into<PathBuf>>(path: P, rename: RenameFn) -> Self {
        Self {
            rename,
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }
}

#[async_trait::async_trait]
impl IReminderRepo for FileReminderRepo {
    async fn read(&self) -> Result<Collection, ReadError> {
        let path = self.path.clone();
        match task::spawn_blocking(move || read_collection(&path)).await {
            Ok(res) => res,
            Err(e) => Err(ReadError::Unreadable(io::Error::new(
                io::ErrorKind::Other,
                e,
            ))),
        }
    }

    async fn replace(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(reminders)?;
        let path = self.path.clone();
        let tmp_path = self.tmp_path.clone();
        let rename = self.rename;

        task::spawn_blocking(move || replace_collection(&path, &tmp_path, rename, &content))
            .await?
    }
}

fn read_collection(path: &Path) -> Result<Collection, ReadError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if let Err(e) = fs::write(path, b"[]") {
                warn!(
                    "Unable to create empty reminders file: {}. Error: {}",
                    path.display(),
                    e
                );
            }
            return Ok(Vec::new());
        }
        Err(e) => return Err(ReadError::Unreadable(e)),
    };

    serde_json::from_slice(&content).map_err(ReadError::Malformed)
}

fn replace_collection(
    path: &Path,
    tmp_path: &Path,
    rename: RenameFn,
    content: &[u8],
) -> anyhow::Result<()> {
    write_synced(tmp_path, content).with_context(|| {
        format!(
            "Unable to write temporary reminders file: {}",
            tmp_path.display()
        )
    })?;

    if let Err(e) = rename(tmp_path, path) {
        warn!(
            "Unable to move {} into place: {}. Overwriting {} directly instead.",
            tmp_path.display(),
            e,
            path.display()
        );
        let _ = fs::remove_file(tmp_path);
        write_synced(path, content).with_context(|| {
            format!("Unable to overwrite reminders file: {}", path.display())
        })?;
    }

    Ok(())
}

fn rename_into_place(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = std::env::temp_dir();
            path.push(format!(
                "reminders-{}-{}-{}-{}",
                prefix,
                std::process::id(),
                nanos,
                counter
            ));
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    fn reminder(title: &str, id: &str) -> Reminder {
        Reminder::from_value(json!({
            "id": id,
            "title": title,
            "day": 5,
            "month": 3,
            "year": 2025
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn it_creates_missing_file_with_empty_collection() {
        let dir = TempDir::new("missing");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));

        let reminders = repo.read().await.expect("To read missing file");

        assert!(reminders.is_empty());
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "[]");
    }

    #[tokio::test]
    async fn it_replaces_collection() {
        let dir = TempDir::new("replace");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));
        let reminders = vec![reminder("Pay bill", "id1"), reminder("Call mom", "id2")];

        repo.replace(&reminders).await.expect("To replace");

        assert_eq!(repo.read().await.unwrap(), reminders);
        assert!(!repo.tmp_path().exists());

        repo.replace(&reminders[1..]).await.expect("To replace");
        assert_eq!(repo.read().await.unwrap(), reminders[1..].to_vec());
    }

    #[tokio::test]
    async fn it_writes_pretty_printed_array() {
        let dir = TempDir::new("pretty");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));

        repo.replace(&[reminder("Pay bill", "id1")]).await.unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.starts_with("[\n  {"));
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["title"], json!("Pay bill"));
    }

    #[tokio::test]
    async fn it_reports_malformed_content() {
        let dir = TempDir::new("malformed");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));

        for content in vec!["[{\"id\": \"id1\", \"tit", "{\"id\": \"id1\"}", "[1, 2]", ""] {
            fs::write(repo.path(), content).unwrap();
            match repo.read().await {
                Err(ReadError::Malformed(_)) => {}
                other => panic!("Expected malformed error for {:?}, got {:?}", content, other),
            }
        }
    }

    #[tokio::test]
    async fn failed_temp_write_keeps_committed_collection() {
        let dir = TempDir::new("tmp-fail");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));
        let committed = vec![reminder("Pay bill", "id1")];
        repo.replace(&committed).await.unwrap();
        let before = fs::read(repo.path()).unwrap();

        // A directory in place of the temporary file makes the write fail before the rename
        fs::create_dir(repo.tmp_path()).unwrap();
        let res = repo
            .replace(&[reminder("Pay bill", "id1"), reminder("Call mom", "id2")])
            .await;

        assert!(res.is_err());
        assert_eq!(fs::read(repo.path()).unwrap(), before);
        assert_eq!(repo.read().await.unwrap(), committed);
    }

    #[tokio::test]
    async fn partial_temp_file_is_never_read() {
        let dir = TempDir::new("tmp-partial");
        let repo = FileReminderRepo::new(dir.path.join("reminders.json"));
        let committed = vec![reminder("Pay bill", "id1")];
        repo.replace(&committed).await.unwrap();

        // Simulates a crash in the middle of writing the next collection
        fs::write(repo.tmp_path(), "[\n  {\n    \"day\": 5,\n    \"id\": \"id").unwrap();

        assert_eq!(repo.read().await.unwrap(), committed);

        // The next successful write takes over the leftover temporary file
        let next = vec![reminder("Pay bill", "id1"), reminder("Call mom", "id2")];
        repo.replace(&next).await.unwrap();
        assert_eq!(repo.read().await.unwrap(), next);
        assert!(!repo.tmp_path().exists());
    }

    fn refuse_rename(_: &Path, _: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "rename refused"))
    }

    #[tokio::test]
    async fn failed_rename_overwrites_data_file_directly() {
        let dir = TempDir::new("rename-fail");
        let repo = FileReminderRepo::with_rename(dir.path.join("reminders.json"), refuse_rename);
        repo.replace(&[reminder("Pay bill", "id1")]).await.unwrap();

        let next = vec![reminder("Pay bill", "id1"), reminder("Call mom", "id2")];
        repo.replace(&next).await.expect("To fall back to a direct overwrite");

        let content = fs::read(repo.path()).unwrap();
        assert_eq!(content, serde_json::to_vec_pretty(&next).unwrap());
        assert_eq!(repo.read().await.unwrap(), next);
        assert!(!repo.tmp_path().exists());
    }

    #[tokio::test]
    async fn it_fails_when_directory_is_missing() {
        let dir = TempDir::new("no-dir");
        let repo = FileReminderRepo::new(dir.path.join("missing").join("reminders.json"));

        assert!(repo.read().await.unwrap().is_empty());
        assert!(repo.replace(&[reminder("Pay bill", "id1")]).await.is_err());
    }
}
