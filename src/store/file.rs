//! JSON file per caller

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::error::{Result, VanityError};
use crate::store::CallerStore;
use crate::types::CallerRecord;

/// Stores each caller record as `caller_<key>.json` under one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a caller; only the key's ASCII alphanumerics are kept
    pub fn record_path(&self, caller_number: &str) -> PathBuf {
        let key: String = caller_number
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let key = if key.is_empty() { "unknown".to_string() } else { key };
        self.dir.join(format!("caller_{}.json", key))
    }
}

#[async_trait]
impl CallerStore for JsonFileStore {
    async fn load(&self, caller_number: &str) -> Result<Option<CallerRecord>> {
        let path = self.record_path(caller_number);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(VanityError::io(
                    e.to_string(),
                    Some(path.to_string_lossy().to_string()),
                ))
            }
        };

        let record = serde_json::from_str(&content)
            .map_err(|e| VanityError::parse(e.to_string(), Some(content)))?;
        Ok(Some(record))
    }

    async fn save(&self, record: &CallerRecord) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            VanityError::io(e.to_string(), Some(self.dir.to_string_lossy().to_string()))
        })?;

        let content = serde_json::to_string_pretty(record).map_err(|e| {
            VanityError::internal(format!("Failed to serialize caller record: {}", e))
        })?;

        let path = self.record_path(&record.caller_number);
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, content.as_bytes()))
            .await
            .map_err(|e| VanityError::internal(format!("Record write task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Stage into a uniquely named file in `dir`, then rename over `path`.
/// Each writer gets its own staging file.
fn write_atomically(dir: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut staging = NamedTempFile::new_in(dir)?;
    staging.write_all(content)?;
    staging.as_file().sync_all()?;
    staging.persist(path).map_err(|e| {
        VanityError::io(e.error.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QueryEntry, VanityMatch};
    use chrono::Utc;

    #[test]
    fn test_record_path_sanitizes_key() {
        let store = JsonFileStore::new("/data");
        assert_eq!(
            store.record_path("+1 (800) 945-3228"),
            PathBuf::from("/data/caller_18009453228.json")
        );
        assert_eq!(store.record_path("../.."), PathBuf::from("/data/caller_unknown.json"));
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("+18009453228").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        let mut record = CallerRecord::new("+18009453228");
        record.top_results.push(VanityMatch::new("8 0 0 9 4 5 FACT", 4, None));
        record.previous_queries.push(QueryEntry {
            from_category: "pet".to_string(),
            query_date: Utc::now(),
        });
        store.save(&record).await.unwrap();

        let loaded = store.load("+18009453228").await.unwrap().unwrap();
        assert_eq!(loaded, record);

        let raw = std::fs::read_to_string(store.record_path("+18009453228")).unwrap();
        assert!(raw.contains("\"callerNumber\""));
        assert!(raw.contains("\"fromCategory\": null"));
    }

    #[tokio::test]
    async fn test_save_replaces_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let mut record = CallerRecord::new("5551234");
        record.top_results.push(VanityMatch::new("5 5 5 1 ADG", 3, None));
        store.save(&record).await.unwrap();

        record.top_results.clear();
        store.save(&record).await.unwrap();
        let loaded = store.load("5551234").await.unwrap().unwrap();
        assert!(loaded.top_results.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.record_path("5551234"), "{not json").unwrap();

        let err = store.load("5551234").await.unwrap_err();
        assert!(matches!(err, VanityError::Parse { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_leave_valid_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let writers: Vec<_> = (0..16)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    let mut record = CallerRecord::new("+18009453228");
                    for i in 0..(n * 3) {
                        record
                            .top_results
                            .push(VanityMatch::new(format!("8 0 0 9 4 5 W{}", i), 4, None));
                    }
                    store.save(&record).await.unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let loaded = store.load("+18009453228").await.unwrap().unwrap();
        assert_eq!(loaded.top_results.len() % 3, 0);

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1, "staging files must not be left behind");
    }

    #[test]
    fn test_write_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = write_atomically(&missing, &missing.join("caller_1.json"), b"{}").unwrap_err();
        assert!(matches!(err, VanityError::Io { .. }));
        assert!(err.is_collaborator_failure());
    }
}
