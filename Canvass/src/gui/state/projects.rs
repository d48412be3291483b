//! Projects screen state

use std::sync::Arc;

use floem::prelude::*;
use im::Vector as ImVector;

use crate::projects::{MemoryScope, Project, ProjectLibrary};

/// Project list plus the modals that manage it.
#[derive(Clone)]
pub struct ProjectsState {
    pub library: Arc<ProjectLibrary>,

    /// All projects, creation order
    pub projects: RwSignal<ImVector<Project>>,
    /// Selected project name, if any
    pub active: RwSignal<Option<String>>,
    /// Project whose row dropdown (Rename / Delete) is open
    pub menu_open: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub status_message: RwSignal<String>,

    // New project modal
    pub new_modal_open: RwSignal<bool>,
    pub new_name: RwSignal<String>,
    pub new_scope: RwSignal<MemoryScope>,

    // Rename modal; `rename_target` is the project being renamed
    pub rename_target: RwSignal<Option<String>>,
    pub rename_name: RwSignal<String>,
}

impl ProjectsState {
    pub fn new(library: Arc<ProjectLibrary>) -> Self {
        Self {
            library,
            projects: RwSignal::new(ImVector::new()),
            active: RwSignal::new(None),
            menu_open: RwSignal::new(None),
            loading: RwSignal::new(true),
            status_message: RwSignal::new(String::new()),
            new_modal_open: RwSignal::new(false),
            new_name: RwSignal::new(String::new()),
            new_scope: RwSignal::new(MemoryScope::default()),
            rename_target: RwSignal::new(None),
            rename_name: RwSignal::new(String::new()),
        }
    }

    /// Close the new-project modal and clear its fields.
    pub fn reset_new_modal(&self) {
        self.new_modal_open.set(false);
        self.new_name.set(String::new());
        self.new_scope.set(MemoryScope::default());
    }

    /// Close the rename modal.
    pub fn reset_rename_modal(&self) {
        self.rename_target.set(None);
        self.rename_name.set(String::new());
    }
}
