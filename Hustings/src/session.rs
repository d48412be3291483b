//! Editing session for one workspace's candidate profile
//!
//! Two tiers: `committed` is the record as last loaded or saved, `working`
//! is what the user has edited in memory. `mark_saved` is the only
//! transition from working to committed; nothing autosaves.
//!
//! The session also owns the palette editor lifecycle. A color being
//! created lives only in the editor draft until the editor closes, at
//! which point it is appended exactly once; deleting it before close
//! discards it without it ever entering the palette.

use crate::brand_kit::ColorItem;
use crate::profile::CandidateProfile;

/// The color open in the picker editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEdit {
    pub draft: ColorItem,
    /// True while the draft has not yet been appended to the palette.
    pub is_new: bool,
}

/// Committed/working state plus the palette editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSession {
    committed: CandidateProfile,
    working: CandidateProfile,
    editing: Option<ColorEdit>,
}

impl ProfileSession {
    /// Start a session from a loaded record, or from an empty profile
    /// when the workspace has never been saved.
    #[must_use]
    pub fn begin(workspace_id: &str, loaded: Option<CandidateProfile>) -> Self {
        let committed = loaded.unwrap_or_else(|| CandidateProfile::empty(workspace_id));
        Self {
            working: committed.clone(),
            committed,
            editing: None,
        }
    }

    #[must_use]
    pub fn working(&self) -> &CandidateProfile {
        &self.working
    }

    /// Direct access for field edits; every change stays in the working
    /// tier until saved.
    pub fn working_mut(&mut self) -> &mut CandidateProfile {
        &mut self.working
    }

    #[must_use]
    pub fn committed(&self) -> &CandidateProfile {
        &self.committed
    }

    /// Whether the working tier has diverged from the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.working != self.committed
    }

    /// Snapshot the working tier for a save call. Uploads that finish
    /// after this point merge into `working` only; they need a second
    /// save to persist.
    #[must_use]
    pub fn save_snapshot(&self) -> CandidateProfile {
        self.working.clone()
    }

    /// Record a completed save. `working` is untouched, so edits made
    /// while the save was in flight stay pending.
    pub fn mark_saved(&mut self, stored: CandidateProfile) {
        self.committed = stored;
    }

    // ==================== Palette editor ====================

    #[must_use]
    pub fn editing(&self) -> Option<&ColorEdit> {
        self.editing.as_ref()
    }

    /// Open the editor on a fresh draft: next free id, placeholder name,
    /// black. The draft does not enter the palette until close.
    pub fn open_new_color(&mut self) -> ColorEdit {
        let edit = ColorEdit {
            draft: ColorItem {
                id: self.working.brand_kit.next_color_id(),
                name: "New Color".to_string(),
                hex: "#000000".to_string(),
            },
            is_new: true,
        };
        self.editing = Some(edit.clone());
        edit
    }

    /// Open the editor on an existing palette entry.
    pub fn open_color(&mut self, id: u32) -> Option<ColorEdit> {
        let item = self
            .working
            .brand_kit
            .colors()
            .into_iter()
            .find(|c| c.id == id)?;
        let edit = ColorEdit {
            draft: item,
            is_new: false,
        };
        self.editing = Some(edit.clone());
        Some(edit)
    }

    /// Apply an edit from the open editor. New drafts change only the
    /// draft; existing entries write through to the palette immediately
    /// (live update while dragging).
    pub fn update_open_color(&mut self, updated: &ColorItem) {
        let Some(edit) = &mut self.editing else {
            return;
        };
        if edit.draft.id == updated.id {
            edit.draft = updated.clone();
        }
        if !edit.is_new {
            self.working.brand_kit.update_color(updated);
        }
    }

    /// Close the editor. A still-new draft is appended exactly here;
    /// closing an existing entry changes nothing further.
    pub fn close_color_editor(&mut self) {
        if let Some(edit) = self.editing.take()
            && edit.is_new
        {
            self.working.brand_kit.add_color(edit.draft);
        }
    }

    /// Delete a palette color. If the editor is open on that id it
    /// closes without appending, so a deleted draft never lands.
    pub fn delete_color(&mut self, id: u32) {
        if self.editing.as_ref().is_some_and(|e| e.draft.id == id) {
            self.editing = None;
        }
        self.working.brand_kit.delete_color(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand_kit::BrandAsset;
    use pretty_assertions::assert_eq;

    fn session() -> ProfileSession {
        ProfileSession::begin("ws-1", None)
    }

    #[test]
    fn begin_without_record_starts_clean() {
        let s = session();
        assert!(!s.is_dirty());
        assert_eq!(s.working().workspace_id, "ws-1");
        assert_eq!(s.working().brand_kit.colors().len(), 4);
    }

    #[test]
    fn create_then_close_appends_exactly_once_with_final_hex() {
        let mut s = session();
        let edit = s.open_new_color();
        assert_eq!(edit.draft.id, 5);
        assert_eq!(edit.draft.hex, "#000000");
        // Palette untouched while the draft is open.
        assert_eq!(s.working().brand_kit.colors().len(), 4);

        s.update_open_color(&ColorItem {
            id: 5,
            name: "Campaign Teal".to_string(),
            hex: "#12AB9C".to_string(),
        });
        assert_eq!(s.working().brand_kit.colors().len(), 4);

        s.close_color_editor();
        let colors = s.working().brand_kit.colors();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[4].hex, "#12AB9C");
        assert_eq!(colors[4].name, "Campaign Teal");
        assert!(s.editing().is_none());

        // A second close must not append again.
        s.close_color_editor();
        assert_eq!(s.working().brand_kit.colors().len(), 5);
    }

    #[test]
    fn create_then_delete_before_close_appends_nothing() {
        let mut s = session();
        let edit = s.open_new_color();
        s.update_open_color(&ColorItem {
            id: edit.draft.id,
            name: "Doomed".to_string(),
            hex: "#FF0000".to_string(),
        });

        s.delete_color(edit.draft.id);
        assert!(s.editing().is_none());

        s.close_color_editor();
        let colors = s.working().brand_kit.colors();
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|c| c.name != "Doomed"));
    }

    #[test]
    fn editing_existing_color_writes_through_live() {
        let mut s = session();
        let edit = s.open_color(2).unwrap();
        assert!(!edit.is_new);

        s.update_open_color(&ColorItem {
            id: 2,
            name: "Action Blue".to_string(),
            hex: "#123ABC".to_string(),
        });
        // Write-through happened before close.
        assert_eq!(s.working().brand_kit.colors()[1].hex, "#123ABC");

        s.close_color_editor();
        assert_eq!(s.working().brand_kit.colors().len(), 4);
    }

    #[test]
    fn deleting_the_open_existing_color_closes_the_editor() {
        let mut s = session();
        s.open_color(3).unwrap();
        s.delete_color(3);
        assert!(s.editing().is_none());

        let colors = s.working().brand_kit.colors();
        assert_eq!(colors.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn save_transition_and_dirty_tracking() {
        let mut s = session();
        assert!(!s.is_dirty());

        s.working_mut().full_name = "Jordan Doe".to_string();
        assert!(s.is_dirty());

        let snapshot = s.save_snapshot();
        s.mark_saved(snapshot);
        assert!(!s.is_dirty());
    }

    #[test]
    fn upload_landing_after_save_snapshot_needs_second_save() {
        let mut s = session();
        s.working_mut().bio = "Bio".to_string();
        let snapshot = s.save_snapshot();

        // Upload completes while the save is in flight.
        s.working_mut()
            .brand_kit
            .add_logos(vec![BrandAsset::upload("ws-1/a_1.png", "file://a", "a.png")]);

        s.mark_saved(snapshot);
        // The logo merged into working only, so the session is dirty
        // until the user saves again.
        assert!(s.is_dirty());
        assert_eq!(s.working().brand_kit.logos().len(), 3);
        assert_eq!(s.committed().brand_kit.logos().len(), 2);
    }
}
