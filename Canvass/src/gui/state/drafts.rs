//! Drafts screen state

use std::sync::Arc;

use floem::prelude::*;
use hustings::prelude::*;
use im::Vector as ImVector;

/// Speeches and Emails over the draft store.
#[derive(Clone)]
pub struct DraftsState {
    pub store: Arc<DiskStore>,
    pub workspace_id: RwSignal<String>,

    /// Which tab is shown; each tab lists its own kind
    pub kind: RwSignal<DraftKind>,
    /// Drafts of the active kind, newest first
    pub drafts: RwSignal<ImVector<Draft>>,
    pub loading: RwSignal<bool>,
    pub status_message: RwSignal<String>,

    // New draft composer
    pub new_modal_open: RwSignal<bool>,
    pub new_title: RwSignal<String>,
}

impl DraftsState {
    pub fn new(store: Arc<DiskStore>, workspace_id: RwSignal<String>) -> Self {
        Self {
            store,
            workspace_id,
            kind: RwSignal::new(DraftKind::Speech),
            drafts: RwSignal::new(ImVector::new()),
            loading: RwSignal::new(true),
            status_message: RwSignal::new(String::new()),
            new_modal_open: RwSignal::new(false),
            new_title: RwSignal::new(String::new()),
        }
    }
}
