//! Configuration state for Canvass

use floem::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::ActiveScreen;
use crate::gui::shared::Theme;

// Default value functions for serde
fn default_window_width() -> f64 {
    1280.0
}
fn default_window_height() -> f64 {
    860.0
}
fn default_workspace_id() -> String {
    "demo".to_string()
}

/// Window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedWindowState {
    #[serde(default = "default_window_width")]
    pub width: f64,
    #[serde(default = "default_window_height")]
    pub height: f64,
}

impl Default for PersistedWindowState {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Persistable configuration (saved to disk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default)]
    pub theme: Theme,

    /// Workspace whose records the app edits.
    #[serde(default = "default_workspace_id")]
    pub workspace_id: String,

    #[serde(default)]
    pub window: PersistedWindowState,

    /// Screen restored on next launch.
    #[serde(default)]
    pub active_screen: ActiveScreen,

    /// Directory the upload dialog starts in.
    #[serde(default)]
    pub last_upload_dir: Option<String>,

    /// Directory the export dialog starts in.
    #[serde(default)]
    pub last_export_dir: Option<String>,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            workspace_id: default_workspace_id(),
            window: PersistedWindowState::default(),
            active_screen: ActiveScreen::default(),
            last_upload_dir: None,
            last_export_dir: None,
        }
    }
}

impl PersistedConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("canvass").join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to disk
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(content) = serde_json::to_string_pretty(self) {
                if let Err(e) = fs::write(path, content) {
                    tracing::warn!("could not save config: {e}");
                }
            }
        }
    }
}

/// Configuration state
#[derive(Clone)]
pub struct ConfigState {
    pub theme: RwSignal<Theme>,
    pub workspace_id: RwSignal<String>,
    pub last_upload_dir: RwSignal<Option<String>>,
    pub last_export_dir: RwSignal<Option<String>>,
}

impl ConfigState {
    pub fn new(persisted: &PersistedConfig) -> Self {
        Self {
            theme: RwSignal::new(persisted.theme),
            workspace_id: RwSignal::new(persisted.workspace_id.clone()),
            last_upload_dir: RwSignal::new(persisted.last_upload_dir.clone()),
            last_export_dir: RwSignal::new(persisted.last_export_dir.clone()),
        }
    }

    /// Set the theme and save
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.save();
    }

    /// Save to disk, preserving session fields owned by the app shell
    pub fn save(&self) {
        let mut persisted = PersistedConfig::load();
        persisted.theme = self.theme.get_untracked();
        persisted.workspace_id = self.workspace_id.get_untracked();
        persisted.last_upload_dir = self.last_upload_dir.get_untracked();
        persisted.last_export_dir = self.last_export_dir.get_untracked();
        persisted.save();
    }
}
