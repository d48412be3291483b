//! Guardrails screen state

use std::sync::Arc;

use floem::prelude::*;
use hustings::prelude::*;

/// Voice, banned phrases, and facts for one workspace; whole-record
/// save like the profile.
#[derive(Clone)]
pub struct GuardrailsState {
    pub store: Arc<DiskStore>,
    pub workspace_id: RwSignal<String>,

    pub voice: RwSignal<String>,
    pub banned_phrases: RwSignal<String>,
    pub facts: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub status_message: RwSignal<String>,
}

impl GuardrailsState {
    pub fn new(store: Arc<DiskStore>, workspace_id: RwSignal<String>) -> Self {
        Self {
            store,
            workspace_id,
            voice: RwSignal::new(String::new()),
            banned_phrases: RwSignal::new(String::new()),
            facts: RwSignal::new(String::new()),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            status_message: RwSignal::new(String::new()),
        }
    }

    /// Seed the editors from a loaded record.
    pub fn sync_inputs(&self, record: &Guardrails) {
        self.voice.set(record.voice.clone());
        self.banned_phrases.set(record.banned_phrases.clone());
        self.facts.set(record.facts.clone());
    }

    /// The record as currently edited.
    pub fn snapshot(&self) -> Guardrails {
        Guardrails {
            workspace_id: self.workspace_id.get_untracked(),
            voice: self.voice.get_untracked(),
            banned_phrases: self.banned_phrases.get_untracked(),
            facts: self.facts.get_untracked(),
        }
    }
}
