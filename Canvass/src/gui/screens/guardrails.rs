//! Guardrails screen
//!
//! Voice and tone, banned phrases, and approved facts for the workspace.
//! One record, loaded on entry and written whole on Save.

use std::thread;

use floem::ext_event::create_ext_action;
use floem::prelude::*;
use hustings::prelude::*;

use crate::gui::shared::{
    card_style, colors, field_label, primary_button, screen_header, text_area,
};
use crate::gui::state::GuardrailsState;
use crate::gui::utils::ext_action_scope;

/// Result type for background guardrail operations
enum GuardrailsResult {
    LoadDone {
        record: Option<Guardrails>,
        error: Option<String>,
    },
    SaveDone {
        stored: Option<Guardrails>,
        error: Option<String>,
    },
}

fn create_result_sender(state: GuardrailsState) -> impl FnOnce(GuardrailsResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_guardrails_result(state, result);
    })
}

/// Handle results from background guardrail operations. Owns every flag
/// reset so no other path can leave the screen stuck.
fn handle_guardrails_result(state: GuardrailsState, result: GuardrailsResult) {
    match result {
        GuardrailsResult::LoadDone { record, error } => {
            if let Some(err) = error {
                tracing::error!("guardrails load failed: {err}");
                state.status_message.set(format!("Load failed: {err}"));
            } else {
                let record = record
                    .unwrap_or_else(|| Guardrails::empty(state.workspace_id.get_untracked()));
                state.sync_inputs(&record);
            }
            state.loading.set(false);
        }
        GuardrailsResult::SaveDone { stored, error } => {
            if let Some(err) = error {
                tracing::error!("guardrails save failed: {err}");
                state.status_message.set(format!("Save failed: {err}"));
            } else if let Some(record) = stored {
                state.sync_inputs(&record);
                state.status_message.set("Guardrails saved".to_string());
            }
            state.saving.set(false);
        }
    }
}

/// Load the workspace's guardrails on a background thread.
pub fn load_guardrails(state: GuardrailsState) {
    state.loading.set(true);
    let store = state.store.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.get_guardrails(&workspace_id) {
            Ok(record) => GuardrailsResult::LoadDone {
                record,
                error: None,
            },
            Err(e) => GuardrailsResult::LoadDone {
                record: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Save the edited record on a background thread.
fn save_guardrails(state: GuardrailsState) {
    if state.saving.get_untracked() {
        return;
    }
    state.saving.set(true);
    state.status_message.set(String::new());

    let store = state.store.clone();
    let snapshot = state.snapshot();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.upsert_guardrails(&snapshot) {
            Ok(stored) => GuardrailsResult::SaveDone {
                stored: Some(stored),
                error: None,
            },
            Err(e) => GuardrailsResult::SaveDone {
                stored: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

fn guardrail_field(
    title: &'static str,
    helper: &'static str,
    text: RwSignal<String>,
    placeholder: &'static str,
) -> impl IntoView {
    v_stack((
        field_label(title),
        text_area(text, placeholder),
        label(move || helper).style(|s| {
            s.font_size(11.0)
                .margin_top(4.0)
                .color(colors().text_muted)
        }),
    ))
    .style(card_style)
}

fn editor_form(state: GuardrailsState) -> impl IntoView {
    let state_for_save = state.clone();
    v_stack((
        guardrail_field(
            "Voice & Tone",
            "How the candidate speaks. The assistant drafts in this voice.",
            state.voice,
            "Plain-spoken, optimistic, grounded in personal stories...",
        ),
        guardrail_field(
            "Banned Phrases",
            "One phrase per line. Drafts never use these.",
            state.banned_phrases,
            "radical\nhandouts...",
        ),
        guardrail_field(
            "Approved Facts",
            "Figures and claims cleared for use in any draft.",
            state.facts,
            "Voted to expand transit funding by 40% in 2023...",
        ),
        h_stack((
            label(move || state.status_message.get()).style(|s| {
                s.font_size(12.0)
                    .items_center()
                    .color(colors().text_secondary)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            primary_button("Save Changes").on_click_stop(move |_| {
                save_guardrails(state_for_save.clone());
            }),
        ))
        .style(|s| s.width_full().items_center()),
    ))
    .style(|s| s.width_full().gap(16.0))
}

/// The guardrails screen.
pub fn guardrails_screen(state: GuardrailsState) -> impl IntoView {
    let loading = state.loading;

    scroll(
        container(
            v_stack((
                screen_header("Guardrails", "Keep every draft on message."),
                dyn_container(
                    move || loading.get(),
                    move |is_loading| {
                        if is_loading {
                            label(|| "Loading guardrails...")
                                .style(|s| s.font_size(13.0).color(colors().text_secondary))
                                .into_any()
                        } else {
                            editor_form(state.clone()).into_any()
                        }
                    },
                )
                .style(|s| s.width_full().margin_top(24.0)),
            ))
            .style(|s| s.width_full().max_width(760.0).padding(32.0)),
        )
        .style(|s| s.width_full().justify_center()),
    )
    .style(|s| {
        s.flex_grow(1.0)
            .flex_basis(0.0)
            .min_height(0.0)
            .width_full()
            .background(colors().bg_base)
    })
}
