//! Messaging guardrails: one record per workspace

use serde::{Deserialize, Serialize};

/// Campaign voice and content limits the assistant must respect.
/// Same get/upsert whole-record lifecycle as the candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardrails {
    pub workspace_id: String,
    /// Voice and tone guidance, free text.
    #[serde(default)]
    pub voice: String,
    /// Phrases the campaign never uses, one per line.
    #[serde(default)]
    pub banned_phrases: String,
    /// Approved facts and figures, free text.
    #[serde(default)]
    pub facts: String,
}

impl Guardrails {
    /// An empty record for a workspace that has never saved guardrails.
    #[must_use]
    pub fn empty(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Self::default()
        }
    }
}
