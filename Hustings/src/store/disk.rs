//! JSON-file record store

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::drafts::{Draft, DraftKind};
use crate::error::{Error, Result};
use crate::guardrails::Guardrails;
use crate::profile::CandidateProfile;

use super::{DraftStore, GuardrailStore, ProfileStore, sort_newest_first};

/// One JSON file per record: `profiles/{workspace}.json`,
/// `guardrails/{workspace}.json`, and `drafts/{workspace}.json` (an array).
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open (creating if needed) a store root.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the default root under the platform data directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().ok_or(Error::DataDirNotFound)?;
        Self::open(base.join("canvass"))
    }

    fn record_path(&self, table: &str, workspace_id: &str) -> PathBuf {
        // Workspace ids are generated internally; strip anything that
        // could not be a bare filename anyway.
        let safe: String = workspace_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(table).join(format!("{safe}.json"))
    }

    fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_str(&json).map_err(|e| Error::CorruptRecord {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Some(record))
    }

    fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn load_drafts(&self, workspace_id: &str) -> Result<Vec<Draft>> {
        Ok(Self::read_record(&self.record_path("drafts", workspace_id))?.unwrap_or_default())
    }

    fn save_drafts(&self, workspace_id: &str, drafts: &[Draft]) -> Result<()> {
        Self::write_record(&self.record_path("drafts", workspace_id), &drafts)
    }
}

impl ProfileStore for DiskStore {
    fn get_profile(&self, workspace_id: &str) -> Result<Option<CandidateProfile>> {
        Self::read_record(&self.record_path("profiles", workspace_id))
    }

    fn upsert_profile(&self, profile: &CandidateProfile) -> Result<CandidateProfile> {
        let path = self.record_path("profiles", &profile.workspace_id);
        Self::write_record(&path, profile)?;
        tracing::info!("saved profile for workspace {}", profile.workspace_id);
        Ok(profile.clone())
    }
}

impl GuardrailStore for DiskStore {
    fn get_guardrails(&self, workspace_id: &str) -> Result<Option<Guardrails>> {
        Self::read_record(&self.record_path("guardrails", workspace_id))
    }

    fn upsert_guardrails(&self, guardrails: &Guardrails) -> Result<Guardrails> {
        let path = self.record_path("guardrails", &guardrails.workspace_id);
        Self::write_record(&path, guardrails)?;
        Ok(guardrails.clone())
    }
}

impl DraftStore for DiskStore {
    fn list_drafts(&self, workspace_id: &str, kind: DraftKind) -> Result<Vec<Draft>> {
        let mut drafts = self.load_drafts(workspace_id)?;
        drafts.retain(|d| d.kind == kind);
        sort_newest_first(&mut drafts);
        Ok(drafts)
    }

    fn create_draft(&self, draft: &Draft) -> Result<Draft> {
        let mut drafts = self.load_drafts(&draft.workspace_id)?;
        drafts.push(draft.clone());
        self.save_drafts(&draft.workspace_id, &drafts)?;
        Ok(draft.clone())
    }

    fn update_draft(&self, draft: &Draft) -> Result<Draft> {
        let mut drafts = self.load_drafts(&draft.workspace_id)?;
        let slot = drafts
            .iter_mut()
            .find(|d| d.id == draft.id)
            .ok_or_else(|| Error::DraftNotFound {
                id: draft.id.clone(),
            })?;
        *slot = draft.clone();
        self.save_drafts(&draft.workspace_id, &drafts)?;
        Ok(draft.clone())
    }

    fn delete_draft(&self, workspace_id: &str, id: &str) -> Result<()> {
        let mut drafts = self.load_drafts(workspace_id)?;
        let before = drafts.len();
        drafts.retain(|d| d.id != id);
        if drafts.len() != before {
            self.save_drafts(workspace_id, &drafts)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> (tempfile::TempDir, DiskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::open(dir.path().join("data")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_profile_reads_as_none() {
        let (_dir, store) = store();
        assert_eq!(store.get_profile("ws-1").unwrap(), None);
    }

    #[test]
    fn profile_round_trips_through_disk() {
        let (_dir, store) = store();
        let mut profile = CandidateProfile::empty("ws-1");
        profile.full_name = "Jordan Doe".to_string();
        profile.add_core_value("Integrity");
        profile.brand_kit.delete_color(4);

        store.upsert_profile(&profile).unwrap();
        let back = store.get_profile("ws-1").unwrap().unwrap();
        assert_eq!(back, profile);
        assert_eq!(back.brand_kit.colors().len(), 3);
    }

    #[test]
    fn corrupt_profile_is_an_error_not_a_default() {
        let (_dir, store) = store();
        let path = store.record_path("profiles", "ws-1");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let err = store.get_profile("ws-1").unwrap_err();
        assert!(matches!(err, Error::CorruptRecord { .. }));
    }

    #[test]
    fn drafts_filter_by_kind_and_sort_newest_first() {
        let (_dir, store) = store();
        let mut old = Draft::new("ws-1", DraftKind::Speech, "Kickoff", "");
        old.created_at = "2026-08-01T10:00:00+00:00".to_string();
        let mut new = Draft::new("ws-1", DraftKind::Speech, "Town hall", "");
        new.created_at = "2026-08-20T10:00:00+00:00".to_string();
        let email = Draft::new("ws-1", DraftKind::Email, "Ask", "");

        store.create_draft(&old).unwrap();
        store.create_draft(&email).unwrap();
        store.create_draft(&new).unwrap();

        let speeches = store.list_drafts("ws-1", DraftKind::Speech).unwrap();
        assert_eq!(speeches.len(), 2);
        assert_eq!(speeches[0].title, "Town hall");
        assert_eq!(speeches[1].title, "Kickoff");

        store.delete_draft("ws-1", &old.id).unwrap();
        assert_eq!(store.list_drafts("ws-1", DraftKind::Speech).unwrap().len(), 1);

        // Unknown id is a no-op.
        store.delete_draft("ws-1", "nope").unwrap();
    }

    #[test]
    fn update_draft_requires_existing_id() {
        let (_dir, store) = store();
        let mut draft = Draft::new("ws-1", DraftKind::Email, "Ask", "v1");
        store.create_draft(&draft).unwrap();

        draft.body = "v2".to_string();
        store.update_draft(&draft).unwrap();
        let listed = store.list_drafts("ws-1", DraftKind::Email).unwrap();
        assert_eq!(listed[0].body, "v2");

        let ghost = Draft::new("ws-1", DraftKind::Email, "Ghost", "");
        assert!(matches!(
            store.update_draft(&ghost),
            Err(Error::DraftNotFound { .. })
        ));
    }

    #[test]
    fn guardrails_round_trip() {
        let (_dir, store) = store();
        assert!(store.get_guardrails("ws-1").unwrap().is_none());

        let mut rails = Guardrails::empty("ws-1");
        rails.voice = "Plainspoken, hopeful".to_string();
        store.upsert_guardrails(&rails).unwrap();
        assert_eq!(store.get_guardrails("ws-1").unwrap().unwrap(), rails);
    }
}
