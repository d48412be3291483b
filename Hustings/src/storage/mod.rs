//! Asset storage collaborator
//!
//! Uploaded files live in buckets ("brand-assets", "documents"), partitioned
//! by workspace id. The trait mirrors the hosted object-store the app
//! originally ran against; [`DiskStorage`] keeps everything under the local
//! data directory and [`MemoryStorage`] backs tests.

mod disk;
mod memory;

pub use disk::DiskStorage;
pub use memory::MemoryStorage;

use std::path::Path;

use crate::error::{Error, Result};

/// Listing cap, matching the page size the hosted backend served.
pub const LIST_LIMIT: usize = 100;

/// A file queued for upload: the user-visible name plus its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, taking its name from the final path segment.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::UploadFailed {
                name: path.display().to_string(),
                message: "path has no file name".to_string(),
            })?;
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// Metadata for a stored file. `id` and `path` are the bucket-relative
/// storage path `{workspace_id}/{stored_name}`; `name` is the original
/// upload name when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: String,
    pub url: String,
    pub path: String,
    pub name: String,
    pub size: u64,
}

impl StoredFile {
    /// Lowercased extension of the original name, for type badges.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Object-store contract the engine and GUI program against.
pub trait AssetStorage: Send + Sync {
    /// Store one file under `{workspace_id}/` in the bucket.
    fn upload_file(
        &self,
        bucket: &str,
        workspace_id: &str,
        file: &UploadFile,
    ) -> Result<StoredFile>;

    /// Remove a stored file by its bucket-relative path.
    fn delete_file(&self, bucket: &str, path: &str) -> Result<()>;

    /// List a workspace's files, newest first, capped at [`LIST_LIMIT`].
    fn list_files(&self, bucket: &str, workspace_id: &str) -> Result<Vec<StoredFile>>;

    /// Read a stored file back, for export and previews.
    fn read_file(&self, bucket: &str, path: &str) -> Result<Vec<u8>>;
}

/// Build the stored filename for an upload: the name's stem with every
/// character outside `[A-Za-z0-9.-]` replaced by '_', truncated to 50
/// chars, suffixed with a millisecond timestamp, keeping the extension.
#[must_use]
pub fn stored_filename(original: &str, timestamp_millis: i64) -> String {
    let (stem, ext) = match original.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (original, None),
    };
    let sanitized: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(50)
        .collect();
    match ext {
        Some(ext) => format!("{sanitized}_{timestamp_millis}.{ext}"),
        None => format!("{sanitized}_{timestamp_millis}"),
    }
}

/// Reject bucket names that would escape the storage root.
pub(crate) fn check_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() || bucket.contains(['/', '\\']) || bucket.contains("..") {
        return Err(Error::InvalidBucket(bucket.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_filename_sanitizes_and_keeps_extension() {
        assert_eq!(
            stored_filename("Rally Poster (final).png", 1_700_000_000_000),
            "Rally_Poster__final__1700000000000.png"
        );
        assert_eq!(
            stored_filename("logo.v2.dark.svg", 42),
            "logo.v2.dark_42.svg"
        );
    }

    #[test]
    fn stored_filename_truncates_long_stems() {
        let long = format!("{}.png", "a".repeat(80));
        let stored = stored_filename(&long, 7);
        assert_eq!(stored, format!("{}_7.png", "a".repeat(50)));
    }

    #[test]
    fn stored_filename_without_extension() {
        assert_eq!(stored_filename("README", 7), "README_7");
        // A leading dot keeps the whole name as the stem.
        assert_eq!(stored_filename(".env", 7), ".env_7");
    }

    #[test]
    fn bucket_names_with_separators_are_rejected() {
        assert!(check_bucket("brand-assets").is_ok());
        assert!(check_bucket("").is_err());
        assert!(check_bucket("a/b").is_err());
        assert!(check_bucket("..").is_err());
    }

    #[test]
    fn extension_badge_comes_from_original_name() {
        let file = StoredFile {
            id: "ws/x_1.PDF".to_string(),
            url: String::new(),
            path: "ws/x_1.PDF".to_string(),
            name: "Budget Notes.PDF".to_string(),
            size: 10,
        };
        assert_eq!(file.extension().as_deref(), Some("pdf"));
    }
}
