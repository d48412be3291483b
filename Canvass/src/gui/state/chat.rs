//! Chat screen state

use std::sync::Arc;

use floem::prelude::*;
use hustings::prelude::*;
use im::Vector as ImVector;

/// Suggestion chips shown under the Home prompt box.
pub const PROMPT_SUGGESTIONS: &[&str] = &[
    "Fundraising Email",
    "Press Release",
    "Analyze Opposition",
    "Talking Points",
];

/// Reply pushed when the assistant call fails.
pub const ASSISTANT_ERROR_REPLY: &str =
    "I'm sorry, I encountered an error processing your request.";

/// Home prompt box and the chat thread it starts.
#[derive(Clone)]
pub struct ChatState {
    /// Generative backend; opaque behind the trait
    pub assistant: Arc<dyn Assistant>,

    /// Messages of the current thread, oldest first
    pub messages: RwSignal<ImVector<ChatMessage>>,
    /// Prompt box contents (shared between Home and the thread view)
    pub prompt: RwSignal<String>,
    /// True while a generate call is in flight; input is disabled
    pub thinking: RwSignal<bool>,
}

impl ChatState {
    pub fn new(assistant: Arc<dyn Assistant>) -> Self {
        Self {
            assistant,
            messages: RwSignal::new(ImVector::new()),
            prompt: RwSignal::new(String::new()),
            thinking: RwSignal::new(false),
        }
    }
}
