//! Chat screen
//!
//! One thread against the assistant. Starting a chat from Home replaces
//! the thread with the opening prompt; sends append. The assistant runs
//! on a worker thread and never blocks the UI.

use std::thread;

use floem::event::{Event, EventListener};
use floem::ext_event::create_ext_action;
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use hustings::prelude::*;
use im::Vector as ImVector;

use crate::gui::shared::{colors, ghost_button};
use crate::gui::state::{ActiveScreen, AppState, ChatState, ASSISTANT_ERROR_REPLY};
use crate::gui::utils::ext_action_scope;

/// Result type for background assistant calls
enum ChatResult {
    ReplyDone {
        reply: Option<String>,
        error: Option<String>,
    },
}

fn create_result_sender(state: ChatState) -> impl FnOnce(ChatResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_chat_result(state, result);
    })
}

/// Handle assistant replies. Owns the thinking flag reset.
fn handle_chat_result(state: ChatState, result: ChatResult) {
    match result {
        ChatResult::ReplyDone { reply, error } => {
            if let Some(err) = error {
                tracing::error!("assistant call failed: {err}");
                state
                    .messages
                    .update(|msgs| msgs.push_back(ChatMessage::model(ASSISTANT_ERROR_REPLY)));
            } else if let Some(reply) = reply {
                state
                    .messages
                    .update(|msgs| msgs.push_back(ChatMessage::model(reply)));
            }
            state.thinking.set(false);
        }
    }
}

fn generate_reply(state: ChatState, prompt: String) {
    let assistant = state.assistant.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match assistant.generate(&prompt) {
            Ok(reply) => ChatResult::ReplyDone {
                reply: Some(reply),
                error: None,
            },
            Err(e) => ChatResult::ReplyDone {
                reply: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Replace the thread with `prompt` and switch to the chat screen.
pub fn start_chat(state: ChatState, app: AppState, prompt: String) {
    let prompt = prompt.trim().to_string();
    if prompt.is_empty() {
        return;
    }
    app.active_screen.set(ActiveScreen::Chats);
    state.thinking.set(true);
    state
        .messages
        .set(ImVector::unit(ChatMessage::user(prompt.clone())));
    generate_reply(state, prompt);
}

/// Append `prompt` to the thread and ask for a reply.
fn send_message(state: ChatState) {
    if state.thinking.get_untracked() {
        return;
    }
    let prompt = state.prompt.get_untracked().trim().to_string();
    if prompt.is_empty() {
        return;
    }
    state.prompt.set(String::new());
    state.thinking.set(true);
    state
        .messages
        .update(|msgs| msgs.push_back(ChatMessage::user(prompt.clone())));
    generate_reply(state, prompt);
}

fn message_bubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == Role::User;
    let text = message.text.clone();

    container(
        label(move || text.clone())
            .style(move |s| {
                let c = colors();
                let s = s
                    .max_width(560.0)
                    .padding_horiz(16.0)
                    .padding_vert(10.0)
                    .font_size(14.0)
                    .border_radius(12.0);
                if is_user {
                    s.background(c.text_primary).color(c.text_inverse)
                } else {
                    s.background(c.bg_surface)
                        .color(c.text_primary)
                        .border(1.0)
                        .border_color(c.border)
                }
            }),
    )
    .style(move |s| {
        let s = s.width_full();
        if is_user {
            s.justify_end()
        } else {
            s.justify_start()
        }
    })
}

fn thread_view(state: ChatState) -> impl IntoView {
    let messages = state.messages;
    let thinking = state.thinking;

    scroll(
        v_stack((
            dyn_stack(
                move || messages.get().into_iter().enumerate(),
                // Starting a new chat replaces index 0, so the key must
                // carry the content too
                |(idx, message)| (*idx, message.text.clone()),
                move |(_, message)| message_bubble(message),
            )
            .style(|s| s.width_full().flex_col().gap(16.0)),
            label(|| "Thinking...").style(move |s| {
                let s = s
                    .font_size(13.0)
                    .margin_top(16.0)
                    .color(colors().text_muted);
                if thinking.get() {
                    s
                } else {
                    s.display(floem::style::Display::None)
                }
            }),
        ))
        .style(|s| s.width_full().max_width(760.0).padding(32.0)),
    )
    .style(|s| {
        s.flex_grow(1.0)
            .flex_basis(0.0)
            .min_height(0.0)
            .width_full()
            .justify_center()
    })
}

fn input_row(state: ChatState) -> impl IntoView {
    let prompt = state.prompt;
    let thinking = state.thinking;
    let state_for_enter = state.clone();
    let state_for_send = state.clone();

    h_stack((
        text_input(prompt)
            .placeholder("Send a message...")
            .style(|s| {
                let c = colors();
                s.flex_grow(1.0)
                    .padding_horiz(16.0)
                    .padding_vert(12.0)
                    .font_size(14.0)
                    .background(c.bg_surface)
                    .color(c.text_primary)
                    .border(1.0)
                    .border_color(c.border)
                    .border_radius(12.0)
                    .focus(|s| s.border_color(colors().border_strong))
            })
            .on_event_cont(EventListener::KeyDown, move |event| {
                if let Event::KeyDown(key_event) = event {
                    if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                        send_message(state_for_enter.clone());
                    }
                }
            }),
        button(label(|| "→"))
            .style(|s| {
                let c = colors();
                s.width(40.0)
                    .height(40.0)
                    .margin_left(8.0)
                    .items_center()
                    .justify_center()
                    .font_size(16.0)
                    .border(0.0)
                    .border_radius(10.0)
                    .background(c.text_primary)
                    .color(c.text_inverse)
                    .cursor(CursorStyle::Pointer)
            })
            .disabled(move || thinking.get() || prompt.get().trim().is_empty())
            .action(move || {
                send_message(state_for_send.clone());
            }),
    ))
    .style(|s| {
        s.width_full()
            .max_width(760.0)
            .items_center()
            .padding_horiz(32.0)
            .padding_bottom(24.0)
    })
}

/// The chat screen.
pub fn chat_screen(state: ChatState) -> impl IntoView {
    let messages = state.messages;
    let state_for_thread = state.clone();
    let state_for_input = state.clone();

    v_stack((
        h_stack((
            label(|| "Chat").style(|s| {
                s.font_size(15.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            ghost_button("New Chat").on_click_stop(move |_| {
                messages.set(ImVector::new());
                state.prompt.set(String::new());
            }),
        ))
        .style(|s| {
            let c = colors();
            s.width_full()
                .items_center()
                .padding_horiz(24.0)
                .padding_vert(12.0)
                .border_bottom(1.0)
                .border_color(c.border)
        }),
        thread_view(state_for_thread),
        container(input_row(state_for_input)).style(|s| s.width_full().justify_center()),
    ))
    .style(|s| s.size_full().background(colors().bg_base))
}
