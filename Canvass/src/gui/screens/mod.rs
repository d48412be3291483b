//! Screen views
//!
//! One module per navigation destination plus the shared deletion
//! dispatch. Screens own their background operations; the dispatcher
//! only routes a confirmed delete to the owning screen or session.

pub mod chat;
pub mod drafts;
pub mod files;
pub mod guardrails;
pub mod home;
pub mod profile;
pub mod projects;

use floem_reactive::{SignalGet, SignalUpdate};

use crate::gui::state::{DeleteTarget, DraftsState, FilesState, ProfileState, ProjectsState};

/// Route a confirmed deletion to its owner. Store and disk targets run
/// their screen's background op; profile targets mutate the working
/// session and persist on the next save.
pub fn dispatch_delete(
    profile: &ProfileState,
    files: &FilesState,
    drafts: &DraftsState,
    projects: &ProjectsState,
    target: DeleteTarget,
) {
    match target {
        DeleteTarget::Document { path } => files::delete_document(files.clone(), path),
        DeleteTarget::Draft { id } => drafts::delete_draft(drafts.clone(), id),
        DeleteTarget::Project { name } => projects::delete_project(projects.clone(), name),
        DeleteTarget::PaletteColor { id } => {
            profile.session.update(|session| session.delete_color(id));
        }
        DeleteTarget::Logo { id } => {
            profile
                .session
                .update(|session| session.working_mut().brand_kit.delete_logo(&id));
        }
        DeleteTarget::Photo { id } => {
            profile
                .session
                .update(|session| session.working_mut().brand_kit.delete_photo(&id));
        }
        DeleteTarget::Font { id } => {
            if profile.editing_font_id.get_untracked().as_deref() == Some(id.as_str()) {
                profile.editing_font_id.set(None);
            }
            profile
                .session
                .update(|session| session.working_mut().brand_kit.delete_font(&id));
        }
        DeleteTarget::Issue { id } => {
            profile
                .session
                .update(|session| session.working_mut().delete_issue(&id));
        }
        DeleteTarget::Opponent { id } => {
            profile
                .session
                .update(|session| session.working_mut().delete_opponent(&id));
        }
    }
}
