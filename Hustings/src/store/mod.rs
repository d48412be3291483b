//! Record store collaborators
//!
//! Whole-record read/write keyed by workspace id, mirroring the hosted
//! tables the app originally ran against. [`DiskStore`] keeps one JSON file
//! per record under the local data directory; [`MemoryStore`] backs tests.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::drafts::{Draft, DraftKind};
use crate::error::Result;
use crate::guardrails::Guardrails;
use crate::profile::CandidateProfile;

/// Candidate profile persistence. Read-modify-write of the whole
/// aggregate; there are no partial updates.
pub trait ProfileStore: Send + Sync {
    /// Fetch a workspace's profile, `None` when it has never been saved.
    fn get_profile(&self, workspace_id: &str) -> Result<Option<CandidateProfile>>;

    /// Insert or replace the profile, returning the stored record.
    fn upsert_profile(&self, profile: &CandidateProfile) -> Result<CandidateProfile>;
}

/// Guardrails persistence; same lifecycle as the profile.
pub trait GuardrailStore: Send + Sync {
    fn get_guardrails(&self, workspace_id: &str) -> Result<Option<Guardrails>>;
    fn upsert_guardrails(&self, guardrails: &Guardrails) -> Result<Guardrails>;
}

/// Draft document persistence.
pub trait DraftStore: Send + Sync {
    /// Drafts of one kind for a workspace, newest first.
    fn list_drafts(&self, workspace_id: &str, kind: DraftKind) -> Result<Vec<Draft>>;

    /// Persist a new draft, returning the stored record.
    fn create_draft(&self, draft: &Draft) -> Result<Draft>;

    /// Replace the draft with the same id.
    fn update_draft(&self, draft: &Draft) -> Result<Draft>;

    /// Remove a draft by id; unknown ids are a no-op.
    fn delete_draft(&self, workspace_id: &str, id: &str) -> Result<()>;
}

/// Newest-first ordering by the RFC 3339 `created_at` stamp.
pub(crate) fn sort_newest_first(drafts: &mut [Draft]) {
    drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
