//! Shared application state for Canvass

mod app;
mod chat;
mod config;
mod confirm;
mod drafts;
mod files;
mod guardrails;
mod profile;
mod projects;

// Re-export all state types
pub use app::{ActiveScreen, AppState};
pub use chat::{ASSISTANT_ERROR_REPLY, ChatState, PROMPT_SUGGESTIONS};
pub use config::{ConfigState, PersistedConfig, PersistedWindowState};
pub use confirm::{DeleteGate, DeleteTarget, PendingDelete};
pub use drafts::DraftsState;
pub use files::{DOCUMENTS_BUCKET, FilesState};
pub use guardrails::GuardrailsState;
pub use profile::{BRAND_ASSETS_BUCKET, BrandSection, ProfileState, ProfileTab};
pub use projects::ProjectsState;
