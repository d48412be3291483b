//! Local-disk storage backend

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{AssetStorage, LIST_LIMIT, StoredFile, UploadFile, check_bucket, stored_filename};

/// Per-directory metadata sidecar. Stored names are sanitized, so the
/// original upload names survive only here.
const METADATA_FILE: &str = ".metadata.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileMeta {
    original_name: String,
    size: u64,
    uploaded_at: i64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DirMetadata {
    files: HashMap<String, FileMeta>,
}

/// Buckets as directories under a storage root, one subdirectory per
/// workspace. Safe to share behind an `Arc` across worker threads.
pub struct DiskStorage {
    root: PathBuf,
    // Serializes read-modify-write of the metadata sidecars; parallel
    // batch uploads land in the same directory.
    meta_lock: Mutex<()>,
}

impl DiskStorage {
    /// Open (creating if needed) a storage root.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            meta_lock: Mutex::new(()),
        })
    }

    /// Open the default root under the platform data directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().ok_or(Error::DataDirNotFound)?;
        Self::open(base.join("canvass").join("storage"))
    }

    fn workspace_dir(&self, bucket: &str, workspace_id: &str) -> Result<PathBuf> {
        check_bucket(bucket)?;
        check_relative(workspace_id)?;
        Ok(self.root.join(bucket).join(workspace_id))
    }

    fn resolve(&self, bucket: &str, path: &str) -> Result<PathBuf> {
        check_bucket(bucket)?;
        check_relative(path)?;
        Ok(self.root.join(bucket).join(path))
    }

    fn load_metadata(dir: &Path) -> DirMetadata {
        let path = dir.join(METADATA_FILE);
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => DirMetadata::default(),
        }
    }

    fn save_metadata(dir: &Path, meta: &DirMetadata) -> Result<()> {
        let json = serde_json::to_string_pretty(meta)?;
        std::fs::write(dir.join(METADATA_FILE), json)?;
        Ok(())
    }
}

/// Reject storage paths that could step outside the bucket.
fn check_relative(path: &str) -> Result<()> {
    let stepped_out = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path.split('/').any(|seg| seg.is_empty() || seg == "..");
    if stepped_out {
        return Err(Error::StoredFileNotFound {
            path: path.to_string(),
        });
    }
    Ok(())
}

impl AssetStorage for DiskStorage {
    fn upload_file(
        &self,
        bucket: &str,
        workspace_id: &str,
        file: &UploadFile,
    ) -> Result<StoredFile> {
        let dir = self.workspace_dir(bucket, workspace_id)?;
        std::fs::create_dir_all(&dir)?;

        let uploaded_at = chrono::Utc::now().timestamp_millis();
        let stored = stored_filename(&file.name, uploaded_at);
        let full = dir.join(&stored);

        // create_new: a same-name collision in the same millisecond is an
        // upload failure, never a silent overwrite.
        let mut out = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|e| Error::UploadFailed {
                name: file.name.clone(),
                message: e.to_string(),
            })?;
        out.write_all(&file.bytes)?;

        {
            let _guard = self.meta_lock.lock().map_err(|_| Error::UploadFailed {
                name: file.name.clone(),
                message: "metadata lock poisoned".to_string(),
            })?;
            let mut meta = Self::load_metadata(&dir);
            meta.files.insert(
                stored.clone(),
                FileMeta {
                    original_name: file.name.clone(),
                    size: file.bytes.len() as u64,
                    uploaded_at,
                },
            );
            Self::save_metadata(&dir, &meta)?;
        }

        let path = format!("{workspace_id}/{stored}");
        tracing::info!("stored {} as {}/{}", file.name, bucket, path);
        Ok(StoredFile {
            id: path.clone(),
            url: format!("file://{}", full.display()),
            path,
            name: file.name.clone(),
            size: file.bytes.len() as u64,
        })
    }

    fn delete_file(&self, bucket: &str, path: &str) -> Result<()> {
        let full = self.resolve(bucket, path)?;
        if full.exists() {
            std::fs::remove_file(&full)?;
        }
        if let (Some(dir), Some(stored)) = (full.parent(), full.file_name()) {
            let _guard = self
                .meta_lock
                .lock()
                .map_err(|_| Error::StoredFileNotFound {
                    path: path.to_string(),
                })?;
            let mut meta = Self::load_metadata(dir);
            if meta.files.remove(stored.to_string_lossy().as_ref()).is_some() {
                Self::save_metadata(dir, &meta)?;
            }
        }
        Ok(())
    }

    fn list_files(&self, bucket: &str, workspace_id: &str) -> Result<Vec<StoredFile>> {
        let dir = self.workspace_dir(bucket, workspace_id)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let meta = Self::load_metadata(&dir);

        let mut rows: Vec<(i64, StoredFile)> = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let stored = entry.file_name().to_string_lossy().into_owned();
            if stored.starts_with('.') {
                continue;
            }
            let path = format!("{workspace_id}/{stored}");
            let (name, size, uploaded_at) = match meta.files.get(&stored) {
                Some(m) => (m.original_name.clone(), m.size, m.uploaded_at),
                None => {
                    let md = entry.metadata()?;
                    let modified = md
                        .modified()
                        .ok()
                        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                        .map_or(0, |d| d.as_millis() as i64);
                    (stored.clone(), md.len(), modified)
                }
            };
            rows.push((
                uploaded_at,
                StoredFile {
                    id: path.clone(),
                    url: format!("file://{}", dir.join(&stored).display()),
                    path,
                    name,
                    size,
                },
            ));
        }

        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows.truncate(LIST_LIMIT);
        Ok(rows.into_iter().map(|(_, f)| f).collect())
    }

    fn read_file(&self, bucket: &str, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(bucket, path)?;
        if !full.is_file() {
            return Err(Error::StoredFileNotFound {
                path: path.to_string(),
            });
        }
        Ok(std::fs::read(full)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn storage() -> (tempfile::TempDir, DiskStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::open(dir.path().join("storage")).unwrap();
        (dir, storage)
    }

    #[test]
    fn upload_stores_sanitized_name_under_workspace() {
        let (_dir, storage) = storage();
        let file = UploadFile::new("My Logo (v2).png", vec![1, 2, 3]);
        let stored = storage.upload_file("brand-assets", "ws-1", &file).unwrap();

        assert!(stored.path.starts_with("ws-1/My_Logo__v2__"));
        assert!(stored.path.ends_with(".png"));
        assert_eq!(stored.id, stored.path);
        assert_eq!(stored.name, "My Logo (v2).png");
        assert_eq!(stored.size, 3);

        let bytes = storage.read_file("brand-assets", &stored.path).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn list_reports_original_names_newest_first() {
        let (_dir, storage) = storage();
        let first = storage
            .upload_file("documents", "ws-1", &UploadFile::new("older report.pdf", vec![0; 4]))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = storage
            .upload_file("documents", "ws-1", &UploadFile::new("newer memo.txt", vec![0; 2]))
            .unwrap();

        let rows = storage.list_files("documents", "ws-1").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "newer memo.txt");
        assert_eq!(rows[0].path, second.path);
        assert_eq!(rows[1].name, "older report.pdf");
        assert_eq!(rows[1].path, first.path);

        // Other workspaces see nothing.
        assert!(storage.list_files("documents", "ws-2").unwrap().is_empty());
    }

    #[test]
    fn delete_removes_file_and_listing_row() {
        let (_dir, storage) = storage();
        let stored = storage
            .upload_file("documents", "ws-1", &UploadFile::new("gone.txt", vec![1]))
            .unwrap();

        storage.delete_file("documents", &stored.path).unwrap();
        assert!(storage.list_files("documents", "ws-1").unwrap().is_empty());
        assert!(storage.read_file("documents", &stored.path).is_err());

        // Deleting again is a no-op.
        storage.delete_file("documents", &stored.path).unwrap();
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let (_dir, storage) = storage();
        assert!(storage.read_file("documents", "../secrets").is_err());
        assert!(storage.read_file("documents", "/etc/passwd").is_err());
        assert!(storage.list_files("do/cs", "ws-1").is_err());
    }
}
