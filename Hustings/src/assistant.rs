//! Assistant collaborator
//!
//! The generative backend stays opaque behind one trait. The bundled
//! implementation has no backend and answers every prompt with the same
//! configuration notice, which keeps the chat flow exercisable offline.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in a chat thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Opaque generative backend.
pub trait Assistant: Send + Sync {
    /// Produce a reply for one prompt. Blocking; callers run it on a
    /// worker thread.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Reply used when no backend is configured.
pub const NOT_CONFIGURED_REPLY: &str =
    "API Key is missing. Please check your environment configuration.";

/// The no-backend assistant: always answers with the configuration
/// notice. A real backend implements [`Assistant`] in its own crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAssistant;

impl Assistant for OfflineAssistant {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(NOT_CONFIGURED_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offline_assistant_answers_with_the_notice() {
        let reply = OfflineAssistant.generate("Help me write a press release").unwrap();
        assert_eq!(reply, NOT_CONFIGURED_REPLY);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let msg = ChatMessage::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"hi"}"#);
    }
}
