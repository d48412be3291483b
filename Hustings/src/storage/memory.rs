//! In-memory storage test double

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::{Error, Result};

use super::{AssetStorage, LIST_LIMIT, StoredFile, UploadFile, check_bucket, stored_filename};

#[derive(Debug, Clone)]
struct Entry {
    file: StoredFile,
    bytes: Vec<u8>,
    uploaded_at: i64,
}

#[derive(Default)]
struct Inner {
    // bucket -> path -> entry
    buckets: HashMap<String, HashMap<String, Entry>>,
    // original names that must fail to upload
    fail_names: Vec<String>,
}

/// Storage double for tests: keeps bytes in memory and can be told to
/// reject specific uploads by original name.
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
    // monotonic stand-in for wall-clock millis, keeps stored names unique
    clock: AtomicI64,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every upload of a file with this exact original name fail.
    pub fn fail_uploads_named(&self, name: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_names.push(name.to_string());
        }
    }

    /// Number of files stored in a bucket, across all workspaces.
    #[must_use]
    pub fn file_count(&self, bucket: &str) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.buckets.get(bucket).map_or(0, HashMap::len))
            .unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| Error::StoreRejected {
            message: "storage lock poisoned".to_string(),
        })
    }
}

impl AssetStorage for MemoryStorage {
    fn upload_file(
        &self,
        bucket: &str,
        workspace_id: &str,
        file: &UploadFile,
    ) -> Result<StoredFile> {
        check_bucket(bucket)?;
        let uploaded_at = self.clock.fetch_add(1, Ordering::SeqCst);
        let mut inner = self.lock()?;
        if inner.fail_names.iter().any(|n| n == &file.name) {
            return Err(Error::UploadFailed {
                name: file.name.clone(),
                message: "injected failure".to_string(),
            });
        }

        let stored = stored_filename(&file.name, uploaded_at);
        let path = format!("{workspace_id}/{stored}");
        let stored_file = StoredFile {
            id: path.clone(),
            url: format!("memory://{bucket}/{path}"),
            path: path.clone(),
            name: file.name.clone(),
            size: file.bytes.len() as u64,
        };
        inner.buckets.entry(bucket.to_string()).or_default().insert(
            path,
            Entry {
                file: stored_file.clone(),
                bytes: file.bytes.clone(),
                uploaded_at,
            },
        );
        Ok(stored_file)
    }

    fn delete_file(&self, bucket: &str, path: &str) -> Result<()> {
        check_bucket(bucket)?;
        let mut inner = self.lock()?;
        if let Some(files) = inner.buckets.get_mut(bucket) {
            files.remove(path);
        }
        Ok(())
    }

    fn list_files(&self, bucket: &str, workspace_id: &str) -> Result<Vec<StoredFile>> {
        check_bucket(bucket)?;
        let inner = self.lock()?;
        let prefix = format!("{workspace_id}/");
        let mut rows: Vec<(i64, StoredFile)> = inner
            .buckets
            .get(bucket)
            .into_iter()
            .flat_map(HashMap::values)
            .filter(|e| e.file.path.starts_with(&prefix))
            .map(|e| (e.uploaded_at, e.file.clone()))
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows.truncate(LIST_LIMIT);
        Ok(rows.into_iter().map(|(_, f)| f).collect())
    }

    fn read_file(&self, bucket: &str, path: &str) -> Result<Vec<u8>> {
        check_bucket(bucket)?;
        let inner = self.lock()?;
        inner
            .buckets
            .get(bucket)
            .and_then(|files| files.get(path))
            .map(|e| e.bytes.clone())
            .ok_or_else(|| Error::StoredFileNotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_and_lists_newest_first() {
        let storage = MemoryStorage::new();
        storage
            .upload_file("documents", "ws-1", &UploadFile::new("a.txt", vec![1]))
            .unwrap();
        storage
            .upload_file("documents", "ws-1", &UploadFile::new("b.txt", vec![2]))
            .unwrap();

        let rows = storage.list_files("documents", "ws-1").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "b.txt");
        assert_eq!(rows[1].name, "a.txt");

        let bytes = storage.read_file("documents", &rows[1].path).unwrap();
        assert_eq!(bytes, vec![1]);
    }

    #[test]
    fn injected_failure_rejects_matching_upload() {
        let storage = MemoryStorage::new();
        storage.fail_uploads_named("bad.png");
        assert!(
            storage
                .upload_file("brand-assets", "ws-1", &UploadFile::new("good.png", vec![]))
                .is_ok()
        );
        assert!(
            storage
                .upload_file("brand-assets", "ws-1", &UploadFile::new("bad.png", vec![]))
                .is_err()
        );
        assert_eq!(storage.file_count("brand-assets"), 1);
    }
}
