//! Batch upload coordinator
//!
//! One user action (a multi-select in the file dialog) becomes one batch.
//! Files upload concurrently, the batch joins before anything is handed
//! back, and a single failure fails the whole batch so the caller never
//! appends a partial set.

use rayon::prelude::*;

use crate::error::Result;
use crate::storage::{AssetStorage, StoredFile, UploadFile};

/// Upload every file in the batch, preserving input order in the result.
/// Returns the first error if any upload fails; already-stored files from
/// a failed batch are left in storage but never reported to the caller.
pub fn upload_batch<S>(
    storage: &S,
    bucket: &str,
    workspace_id: &str,
    files: &[UploadFile],
) -> Result<Vec<StoredFile>>
where
    S: AssetStorage + ?Sized,
{
    if files.is_empty() {
        return Ok(Vec::new());
    }
    tracing::info!("uploading batch of {} to {}", files.len(), bucket);

    let stored: Result<Vec<StoredFile>> = files
        .par_iter()
        .map(|file| storage.upload_file(bucket, workspace_id, file))
        .collect();

    match &stored {
        Ok(files) => tracing::info!("batch complete: {} stored", files.len()),
        Err(e) => tracing::error!("batch aborted: {e}"),
    }
    stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn batch(names: &[&str]) -> Vec<UploadFile> {
        names
            .iter()
            .map(|n| UploadFile::new(*n, vec![0u8; 8]))
            .collect()
    }

    #[test]
    fn successful_batch_preserves_input_order() {
        let storage = MemoryStorage::new();
        let files = batch(&["one.png", "two.png", "three.png"]);
        let stored = upload_batch(&storage, "brand-assets", "ws-1", &files).unwrap();

        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].name, "one.png");
        assert_eq!(stored[1].name, "two.png");
        assert_eq!(stored[2].name, "three.png");
        assert!(stored.iter().all(|f| f.path.starts_with("ws-1/")));
    }

    #[test]
    fn one_failure_fails_the_whole_batch() {
        let storage = MemoryStorage::new();
        storage.fail_uploads_named("two.png");
        let files = batch(&["one.png", "two.png", "three.png"]);

        let result = upload_batch(&storage, "brand-assets", "ws-1", &files);
        assert!(result.is_err());
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let storage = MemoryStorage::new();
        let stored = upload_batch(&storage, "brand-assets", "ws-1", &[]).unwrap();
        assert!(stored.is_empty());
        assert_eq!(storage.file_count("brand-assets"), 0);
    }
}
