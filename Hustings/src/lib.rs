//! # Hustings
//!
//! The campaign-data engine behind Canvass: candidate profiles with their
//! brand kits, drafts, guardrails, pluggable record and asset storage, and
//! the batch upload coordinator. No GUI dependency; everything here is
//! driven by the desktop app or by tests.
//!
//! ## Quick Start
//!
//! ### Loading and editing a profile
//!
//! ```no_run
//! use hustings::session::ProfileSession;
//! use hustings::store::{DiskStore, ProfileStore};
//!
//! let store = DiskStore::open_default()?;
//! let loaded = store.get_profile("ws-1")?;
//! let mut session = ProfileSession::begin("ws-1", loaded);
//!
//! session.working_mut().full_name = "Jordan Doe".to_string();
//! let snapshot = session.save_snapshot();
//! let stored = store.upsert_profile(&snapshot)?;
//! session.mark_saved(stored);
//! # Ok::<(), hustings::Error>(())
//! ```
//!
//! ### Uploading brand assets
//!
//! ```no_run
//! use hustings::storage::{DiskStorage, UploadFile};
//! use hustings::upload::upload_batch;
//!
//! let storage = DiskStorage::open_default()?;
//! let files = vec![UploadFile::from_path("logo.png".as_ref())?];
//! let stored = upload_batch(&storage, "brand-assets", "ws-1", &files)?;
//! println!("stored {} assets", stored.len());
//! # Ok::<(), hustings::Error>(())
//! ```

pub mod assistant;
pub mod brand_kit;
pub mod drafts;
pub mod error;
pub mod guardrails;
pub mod profile;
pub mod session;
pub mod storage;
pub mod store;
pub mod upload;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::assistant::{Assistant, ChatMessage, OfflineAssistant, Role};
    pub use crate::brand_kit::{AssetKind, BrandAsset, BrandKit, ColorItem, FontStyle};
    pub use crate::drafts::{Draft, DraftKind};
    pub use crate::error::{Error, Result};
    pub use crate::guardrails::Guardrails;
    pub use crate::profile::{timestamp_id, CandidateProfile, Issue, IssueStatus, Opponent};
    pub use crate::session::{ColorEdit, ProfileSession};
    pub use crate::storage::{AssetStorage, DiskStorage, MemoryStorage, StoredFile, UploadFile};
    pub use crate::store::{DiskStore, DraftStore, GuardrailStore, MemoryStore, ProfileStore};
    pub use crate::upload::upload_batch;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
