//! In-memory record store test double

use std::collections::HashMap;
use std::sync::Mutex;

use crate::drafts::{Draft, DraftKind};
use crate::error::{Error, Result};
use crate::guardrails::Guardrails;
use crate::profile::CandidateProfile;

use super::{DraftStore, GuardrailStore, ProfileStore, sort_newest_first};

#[derive(Default)]
struct Inner {
    profiles: HashMap<String, CandidateProfile>,
    guardrails: HashMap<String, Guardrails>,
    drafts: HashMap<String, Vec<Draft>>,
    fail_writes: bool,
}

/// Store double for tests: everything in maps, with a switch that makes
/// every write fail.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`Error::StoreRejected`].
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_writes = fail;
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| Error::StoreRejected {
            message: "store lock poisoned".to_string(),
        })
    }

    fn check_write(inner: &Inner) -> Result<()> {
        if inner.fail_writes {
            return Err(Error::StoreRejected {
                message: "injected write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl ProfileStore for MemoryStore {
    fn get_profile(&self, workspace_id: &str) -> Result<Option<CandidateProfile>> {
        Ok(self.lock()?.profiles.get(workspace_id).cloned())
    }

    fn upsert_profile(&self, profile: &CandidateProfile) -> Result<CandidateProfile> {
        let mut inner = self.lock()?;
        Self::check_write(&inner)?;
        inner
            .profiles
            .insert(profile.workspace_id.clone(), profile.clone());
        Ok(profile.clone())
    }
}

impl GuardrailStore for MemoryStore {
    fn get_guardrails(&self, workspace_id: &str) -> Result<Option<Guardrails>> {
        Ok(self.lock()?.guardrails.get(workspace_id).cloned())
    }

    fn upsert_guardrails(&self, guardrails: &Guardrails) -> Result<Guardrails> {
        let mut inner = self.lock()?;
        Self::check_write(&inner)?;
        inner
            .guardrails
            .insert(guardrails.workspace_id.clone(), guardrails.clone());
        Ok(guardrails.clone())
    }
}

impl DraftStore for MemoryStore {
    fn list_drafts(&self, workspace_id: &str, kind: DraftKind) -> Result<Vec<Draft>> {
        let inner = self.lock()?;
        let mut drafts: Vec<Draft> = inner
            .drafts
            .get(workspace_id)
            .into_iter()
            .flatten()
            .filter(|d| d.kind == kind)
            .cloned()
            .collect();
        sort_newest_first(&mut drafts);
        Ok(drafts)
    }

    fn create_draft(&self, draft: &Draft) -> Result<Draft> {
        let mut inner = self.lock()?;
        Self::check_write(&inner)?;
        inner
            .drafts
            .entry(draft.workspace_id.clone())
            .or_default()
            .push(draft.clone());
        Ok(draft.clone())
    }

    fn update_draft(&self, draft: &Draft) -> Result<Draft> {
        let mut inner = self.lock()?;
        Self::check_write(&inner)?;
        let slot = inner
            .drafts
            .get_mut(&draft.workspace_id)
            .and_then(|list| list.iter_mut().find(|d| d.id == draft.id))
            .ok_or_else(|| Error::DraftNotFound {
                id: draft.id.clone(),
            })?;
        *slot = draft.clone();
        Ok(draft.clone())
    }

    fn delete_draft(&self, workspace_id: &str, id: &str) -> Result<()> {
        let mut inner = self.lock()?;
        Self::check_write(&inner)?;
        if let Some(list) = inner.drafts.get_mut(workspace_id) {
            list.retain(|d| d.id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upsert_then_get_round_trips() {
        let store = MemoryStore::new();
        let profile = CandidateProfile::empty("ws-1");
        store.upsert_profile(&profile).unwrap();
        assert_eq!(store.get_profile("ws-1").unwrap(), Some(profile));
        assert_eq!(store.get_profile("ws-2").unwrap(), None);
    }

    #[test]
    fn injected_failure_blocks_writes_but_not_reads() {
        let store = MemoryStore::new();
        store.upsert_profile(&CandidateProfile::empty("ws-1")).unwrap();

        store.fail_writes(true);
        assert!(store.upsert_profile(&CandidateProfile::empty("ws-1")).is_err());
        assert!(store.get_profile("ws-1").unwrap().is_some());

        store.fail_writes(false);
        assert!(store.upsert_profile(&CandidateProfile::empty("ws-1")).is_ok());
    }
}
