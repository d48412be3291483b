//! Files screen state

use std::sync::Arc;

use floem::prelude::*;
use hustings::prelude::*;
use im::Vector as ImVector;

/// Bucket holding campaign documents (brand assets live in their own).
pub const DOCUMENTS_BUCKET: &str = "documents";

/// Campaign document manager state.
#[derive(Clone)]
pub struct FilesState {
    pub storage: Arc<DiskStorage>,
    pub workspace_id: RwSignal<String>,

    /// Stored documents, newest first as listed
    pub files: RwSignal<ImVector<StoredFile>>,
    pub loading: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub status_message: RwSignal<String>,
}

impl FilesState {
    pub fn new(storage: Arc<DiskStorage>, workspace_id: RwSignal<String>) -> Self {
        Self {
            storage,
            workspace_id,
            files: RwSignal::new(ImVector::new()),
            loading: RwSignal::new(true),
            uploading: RwSignal::new(false),
            status_message: RwSignal::new(String::new()),
        }
    }
}
