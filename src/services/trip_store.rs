// src/services/trip_store.rs
use std::{collections::HashMap, path::PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Durable keyed persistence of trip documents. One document per id, a `put`
/// overwrites unconditionally, and concurrent writes to the same id race with
/// only "some write wins" guaranteed. No listing, no deletion.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Stores `doc` under `id`, replacing any previous document. Returns the
    /// storage path when the backend has one. Callers validate `id` first.
    async fn put(&self, id: &str, doc: &Value) -> Result<Option<String>, StoreError>;

    /// Loads the document at `id`, or `StoreError::NotFound`.
    async fn get(&self, id: &str) -> Result<Value, StoreError>;
}

/// One pretty-printed `<key>.json` file per document under a root directory
/// injected at construction.
pub struct FsTripStore {
    root: PathBuf,
}

impl FsTripStore {
    /// Creates the store root if needed. Explicit so startup owns the
    /// directory lifecycle rather than the first write.
    pub async fn init(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", storage_key(id)))
    }
}

// Maps an arbitrary id to a single storage-safe filename component:
// alphanumerics, '-' and '_' pass through, every other byte (including '%'
// itself) is %XX-escaped. Injective, so distinct ids never collide on disk,
// and the result contains no path separators or dot runs.
fn storage_key(id: &str) -> String {
    let mut key = String::with_capacity(id.len());
    for byte in id.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => key.push(byte as char),
            _ => key.push_str(&format!("%{byte:02X}")),
        }
    }
    key
}

#[async_trait]
impl TripStore for FsTripStore {
    async fn put(&self, id: &str, doc: &Value) -> Result<Option<String>, StoreError> {
        let path = self.document_path(id);
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&path, bytes).await?;
        Ok(Some(path.to_string_lossy().into_owned()))
    }

    async fn get(&self, id: &str) -> Result<Value, StoreError> {
        let path = self.document_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// In-memory double for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryTripStore {
    inner: RwLock<HashMap<String, Value>>,
}

impl MemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripStore for MemoryTripStore {
    async fn put(&self, id: &str, doc: &Value) -> Result<Option<String>, StoreError> {
        let mut guard = self.inner.write().await;
        guard.insert(id.to_string(), doc.clone());
        Ok(None)
    }

    async fn get(&self, id: &str) -> Result<Value, StoreError> {
        let guard = self.inner.read().await;
        guard.get(id).cloned().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_read_reflects_latest_write() {
        let store = MemoryTripStore::new();
        let doc = json!({"id": "abc", "dest": "Rome"});
        store.put("abc", &doc).await.unwrap();
        assert_eq!(store.get("abc").await.unwrap(), doc);

        let newer = json!({"id": "abc", "dest": "Milan"});
        store.put("abc", &newer).await.unwrap();
        assert_eq!(store.get("abc").await.unwrap(), newer);
    }

    #[tokio::test]
    async fn memory_get_unknown_id_is_not_found() {
        let store = MemoryTripStore::new();
        assert!(matches!(
            store.get("missing").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn fs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTripStore::init(dir.path()).await.unwrap();
        let doc = json!({"id": "abc", "dest": "Rome", "days": 3});

        let path = store.put("abc", &doc).await.unwrap();
        assert!(path.is_some());
        assert_eq!(store.get("abc").await.unwrap(), doc);
    }

    #[tokio::test]
    async fn fs_get_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTripStore::init(dir.path()).await.unwrap();
        assert!(matches!(
            store.get("missing").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn fs_hostile_ids_stay_inside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTripStore::init(dir.path()).await.unwrap();
        let doc = json!({"id": "../../etc/passwd"});

        store.put("../../etc/passwd", &doc).await.unwrap();
        assert_eq!(store.get("../../etc/passwd").await.unwrap(), doc);

        // The only file written lives directly under the store root.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].file_type().unwrap().is_file());
    }

    #[test]
    fn storage_key_escapes_separators() {
        assert_eq!(storage_key("rome-2026"), "rome-2026");
        assert_eq!(storage_key("a/b"), "a%2Fb");
        assert_eq!(storage_key("..%2F"), "%2E%2E%252F");
    }
}
