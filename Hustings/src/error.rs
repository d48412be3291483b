//! Error types for `Hustings`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `Hustings` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Store Errors ====================
    /// The platform data directory could not be determined.
    #[error("could not determine application data directory")]
    DataDirNotFound,

    /// A persisted record exists but cannot be parsed.
    #[error("corrupt record at {path}: {message}")]
    CorruptRecord {
        /// Path of the record file on disk.
        path: PathBuf,
        /// The parse error message.
        message: String,
    },

    /// A draft with the given id does not exist.
    #[error("draft not found: {id}")]
    DraftNotFound {
        /// The requested draft id.
        id: String,
    },

    /// The store rejected the operation (used by test doubles for
    /// injected failures).
    #[error("store rejected operation: {message}")]
    StoreRejected {
        /// Description of the rejection.
        message: String,
    },

    // ==================== Storage Errors ====================
    /// A bucket name contains path separators or is empty.
    #[error("invalid bucket name: {0:?}")]
    InvalidBucket(String),

    /// A single file upload failed.
    #[error("upload failed for '{name}': {message}")]
    UploadFailed {
        /// Original name of the file that failed.
        name: String,
        /// The underlying error message.
        message: String,
    },

    /// The stored file was not found in the bucket.
    #[error("stored file not found: {path}")]
    StoredFileNotFound {
        /// The storage path that was requested.
        path: String,
    },

    // ==================== Assistant Errors ====================
    /// The assistant backend returned a failure.
    #[error("assistant error: {message}")]
    AssistantFailed {
        /// The backend's error message.
        message: String,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for `Hustings` operations.
pub type Result<T> = std::result::Result<T, Error>;
