//! Global application state

use floem::prelude::*;
use serde::{Deserialize, Serialize};

use super::DeleteGate;

/// Top-level screens. `Chats` has no sidebar entry; it is reached by
/// submitting a prompt from Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveScreen {
    #[default]
    Home,
    Chats,
    Files,
    CandidateProfile,
    Drafts,
    Guardrails,
    Projects,
}

impl ActiveScreen {
    /// Sidebar order; `Chats` is intentionally absent.
    pub fn sidebar() -> [Self; 6] {
        [
            Self::Home,
            Self::Files,
            Self::CandidateProfile,
            Self::Drafts,
            Self::Guardrails,
            Self::Projects,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "🏠 Home",
            Self::Chats => "💬 Chats",
            Self::Files => "📁 Files",
            Self::CandidateProfile => "👤 Candidate Profile",
            Self::Drafts => "📝 Drafts",
            Self::Guardrails => "🛡️ Guardrails",
            Self::Projects => "📂 Projects",
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Currently active screen
    pub active_screen: RwSignal<ActiveScreen>,
    /// Pending deletion awaiting confirmation
    pub delete_gate: RwSignal<DeleteGate>,
}

impl AppState {
    pub fn new(initial_screen: ActiveScreen) -> Self {
        Self {
            active_screen: RwSignal::new(initial_screen),
            delete_gate: RwSignal::new(DeleteGate::new()),
        }
    }

    /// Open the confirm dialog for one pending delete.
    pub fn request_delete(
        &self,
        label: impl Into<String>,
        target: super::DeleteTarget,
    ) {
        self.delete_gate.update(|gate| gate.request(label, target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn screens_persist_as_kebab_case() {
        let json = serde_json::to_string(&ActiveScreen::CandidateProfile).unwrap();
        assert_eq!(json, "\"candidate-profile\"");

        let back: ActiveScreen = serde_json::from_str("\"guardrails\"").unwrap();
        assert_eq!(back, ActiveScreen::Guardrails);
    }

    #[test]
    fn chats_has_no_sidebar_entry() {
        assert!(!ActiveScreen::sidebar().contains(&ActiveScreen::Chats));
    }
}
