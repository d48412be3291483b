//! Candidate profile screen state

use std::sync::Arc;

use floem::prelude::*;
use hustings::prelude::*;
use swatch::PickerState;

/// Bucket holding uploaded logos and photos.
pub const BRAND_ASSETS_BUCKET: &str = "brand-assets";

/// Profile editor sections shown in the inner sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Bio,
    Issues,
    Opponents,
    BrandKit,
}

impl ProfileTab {
    pub fn all() -> [Self; 4] {
        [Self::Bio, Self::Issues, Self::Opponents, Self::BrandKit]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bio => "Bio & Core Values",
            Self::Issues => "Platform & Issues",
            Self::Opponents => "Opponents",
            Self::BrandKit => "Brand Kit",
        }
    }
}

/// Brand kit section tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandSection {
    #[default]
    Logos,
    Colors,
    Fonts,
    Photos,
}

impl BrandSection {
    pub fn all() -> [Self; 4] {
        [Self::Logos, Self::Colors, Self::Fonts, Self::Photos]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Logos => "Logos",
            Self::Colors => "Colors",
            Self::Fonts => "Fonts",
            Self::Photos => "Photos",
        }
    }
}

/// Candidate profile screen state.
///
/// The editing session holds the committed/working tiers and the palette
/// editor; the signals around it are the input bindings and lifecycle
/// flags the views need. Bio fields write through to the working profile
/// so `is_dirty` stays truthful for the unsaved-changes check.
#[derive(Clone)]
pub struct ProfileState {
    /// Record store shared with the other screens
    pub store: Arc<DiskStore>,
    /// Asset storage for brand uploads
    pub storage: Arc<DiskStorage>,
    /// Workspace whose profile is loaded
    pub workspace_id: RwSignal<String>,

    /// Two-tier editing session; `save` is the only working-to-committed
    /// transition
    pub session: RwSignal<ProfileSession>,
    pub active_tab: RwSignal<ProfileTab>,
    pub brand_section: RwSignal<BrandSection>,

    // Lifecycle flags
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub status_message: RwSignal<String>,

    // Bio tab inputs
    pub full_name: RwSignal<String>,
    /// Display-only field from the original layout; not persisted
    pub title_role: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub value_input: RwSignal<String>,

    // Platform issue composer
    pub issue_modal_open: RwSignal<bool>,
    pub issue_title: RwSignal<String>,
    pub issue_status: RwSignal<IssueStatus>,
    pub issue_description: RwSignal<String>,

    // Opponent composer
    pub opponent_modal_open: RwSignal<bool>,
    pub opponent_name: RwSignal<String>,
    pub opponent_party: RwSignal<String>,
    pub opponent_tag_input: RwSignal<String>,
    pub opponent_tags: RwSignal<Vec<String>>,

    // Color picker modal; visible while the session has an open editor
    pub picker: PickerState,
    /// Palette id currently flashing its "Copied" indicator
    pub copied_color: RwSignal<Option<u32>>,

    // Font editor selection
    pub editing_font_id: RwSignal<Option<String>>,
}

impl ProfileState {
    pub fn new(
        store: Arc<DiskStore>,
        storage: Arc<DiskStorage>,
        workspace_id: RwSignal<String>,
    ) -> Self {
        let ws = workspace_id.get_untracked();
        Self {
            store,
            storage,
            workspace_id,

            session: RwSignal::new(ProfileSession::begin(&ws, None)),
            active_tab: RwSignal::new(ProfileTab::default()),
            brand_section: RwSignal::new(BrandSection::default()),

            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
            status_message: RwSignal::new(String::new()),

            full_name: RwSignal::new(String::new()),
            title_role: RwSignal::new(String::new()),
            bio: RwSignal::new(String::new()),
            value_input: RwSignal::new(String::new()),

            issue_modal_open: RwSignal::new(false),
            issue_title: RwSignal::new(String::new()),
            issue_status: RwSignal::new(IssueStatus::Draft),
            issue_description: RwSignal::new(String::new()),

            opponent_modal_open: RwSignal::new(false),
            opponent_name: RwSignal::new(String::new()),
            opponent_party: RwSignal::new(String::new()),
            opponent_tag_input: RwSignal::new(String::new()),
            opponent_tags: RwSignal::new(Vec::new()),

            picker: PickerState::new(),
            copied_color: RwSignal::new(None),

            editing_font_id: RwSignal::new(None),
        }
    }

    /// Seed the input signals from a freshly loaded or saved profile.
    pub fn sync_inputs(&self, profile: &CandidateProfile) {
        self.full_name.set(profile.full_name.clone());
        self.bio.set(profile.bio.clone());
    }

    /// Clear the issue composer back to its defaults.
    pub fn reset_issue_composer(&self) {
        self.issue_modal_open.set(false);
        self.issue_title.set(String::new());
        self.issue_status.set(IssueStatus::Draft);
        self.issue_description.set(String::new());
    }

    /// Clear the opponent composer back to its defaults.
    pub fn reset_opponent_composer(&self) {
        self.opponent_modal_open.set(false);
        self.opponent_name.set(String::new());
        self.opponent_party.set(String::new());
        self.opponent_tag_input.set(String::new());
        self.opponent_tags.set(Vec::new());
    }
}
