//! Draft documents: speeches and emails

use serde::{Deserialize, Serialize};

/// Which drafts tab a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftKind {
    Speech,
    Email,
}

impl DraftKind {
    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Speech => "Speeches",
            Self::Email => "Emails",
        }
    }
}

/// One saved draft document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: String,
    pub workspace_id: String,
    #[serde(rename = "type")]
    pub kind: DraftKind,
    pub title: String,
    #[serde(rename = "content", default)]
    pub body: String,
    #[serde(default)]
    pub status: String,
    /// RFC 3339 creation timestamp; drives newest-first ordering.
    pub created_at: String,
}

impl Draft {
    /// A new draft with a fresh id and creation timestamp.
    #[must_use]
    pub fn new(workspace_id: &str, kind: DraftKind, title: &str, body: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            kind,
            title: title.to_string(),
            body: body.to_string(),
            status: "Draft".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_persists_lowercase() {
        let draft = Draft::new("ws-1", DraftKind::Speech, "Kickoff rally", "");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "speech");
        assert_eq!(json["content"], "");

        let back: Draft = serde_json::from_value(json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn new_drafts_get_distinct_ids() {
        let a = Draft::new("ws-1", DraftKind::Email, "Ask", "");
        let b = Draft::new("ws-1", DraftKind::Email, "Ask", "");
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, "Draft");
    }
}
