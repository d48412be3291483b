//! Candidate profile aggregate
//!
//! One record per workspace, read and written whole. Core values live in
//! memory as a list but persist as a single comma-joined string, matching
//! the record layout the hosted backend used.

use serde::{Deserialize, Serialize};

use crate::brand_kit::BrandKit;

/// Publication state of a platform issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Draft,
    Review,
    Published,
}

impl IssueStatus {
    /// Display label, also the persisted form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Review => "Review",
            Self::Published => "Published",
        }
    }

    /// All states in menu order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Draft, Self::Review, Self::Published]
    }
}

/// A policy position on the platform tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Millisecond-timestamp string allocated at creation.
    pub id: String,
    pub title: String,
    pub status: IssueStatus,
    pub description: String,
}

/// A tracked opposing candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    /// Millisecond-timestamp string allocated at creation.
    pub id: String,
    pub name: String,
    pub party: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The per-workspace candidate record. Loaded once per workspace
/// selection, edited in memory, written back whole on explicit save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub workspace_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, with = "comma_joined")]
    pub core_values: Vec<String>,
    #[serde(default)]
    pub platform_issues: Vec<Issue>,
    #[serde(default)]
    pub opponents: Vec<Opponent>,
    #[serde(default)]
    pub brand_kit: BrandKit,
}

impl CandidateProfile {
    /// An empty profile for a workspace that has never been saved.
    #[must_use]
    pub fn empty(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Self::default()
        }
    }

    /// Append a core value; blank and duplicate entries are ignored.
    pub fn add_core_value(&mut self, value: &str) {
        let value = value.trim();
        if !value.is_empty() && !self.core_values.iter().any(|v| v == value) {
            self.core_values.push(value.to_string());
        }
    }

    /// Remove a core value by exact text.
    pub fn remove_core_value(&mut self, value: &str) {
        self.core_values.retain(|v| v != value);
    }

    /// Append a platform issue.
    pub fn add_issue(&mut self, issue: Issue) {
        self.platform_issues.push(issue);
    }

    /// Remove the issue with the given id, if present.
    pub fn delete_issue(&mut self, id: &str) {
        self.platform_issues.retain(|i| i.id != id);
    }

    /// Append an opponent.
    pub fn add_opponent(&mut self, opponent: Opponent) {
        self.opponents.push(opponent);
    }

    /// Remove the opponent with the given id, if present.
    pub fn delete_opponent(&mut self, id: &str) {
        self.opponents.retain(|o| o.id != id);
    }
}

/// Millisecond-timestamp id for issues and opponents.
#[must_use]
pub fn timestamp_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Serde codec for the comma-joined `core_values` column: joined with
/// ", " on write, split on ',' with trimming (dropping empties) on read.
mod comma_joined {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&values.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let joined = String::deserialize(de)?;
        Ok(joined
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn core_values_round_trip_through_joined_string() {
        let mut profile = CandidateProfile::empty("ws-1");
        profile.add_core_value("Integrity");
        profile.add_core_value("  Community ");
        profile.add_core_value("Integrity"); // duplicate dropped
        profile.add_core_value("   "); // blank dropped
        assert_eq!(profile.core_values, vec!["Integrity", "Community"]);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["core_values"], "Integrity, Community");

        let back: CandidateProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back.core_values, profile.core_values);
    }

    #[test]
    fn core_values_load_drops_empty_segments() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{"workspace_id":"ws-1","core_values":"a, ,b,,  c"}"#,
        )
        .unwrap();
        assert_eq!(profile.core_values, vec!["a", "b", "c"]);
    }

    #[test]
    fn issue_delete_removes_only_the_match() {
        let mut profile = CandidateProfile::empty("ws-1");
        profile.add_issue(Issue {
            id: "100".to_string(),
            title: "Transit".to_string(),
            status: IssueStatus::Draft,
            description: String::new(),
        });
        profile.add_issue(Issue {
            id: "200".to_string(),
            title: "Housing".to_string(),
            status: IssueStatus::Published,
            description: String::new(),
        });

        profile.delete_issue("100");
        assert_eq!(profile.platform_issues.len(), 1);
        assert_eq!(profile.platform_issues[0].title, "Housing");

        profile.delete_issue("nope");
        assert_eq!(profile.platform_issues.len(), 1);
    }

    #[test]
    fn missing_fields_default_on_load() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"workspace_id":"ws-1"}"#).unwrap();
        assert_eq!(profile.full_name, "");
        assert!(profile.core_values.is_empty());
        assert!(profile.opponents.is_empty());
        assert_eq!(profile.brand_kit, BrandKit::default());
    }

    #[test]
    fn issue_status_labels_are_persisted_form() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::Review).unwrap(),
            "\"Review\""
        );
        assert_eq!(IssueStatus::Published.label(), "Published");
    }
}
