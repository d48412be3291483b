//! Home screen
//!
//! Centered prompt box plus suggestion chips. Submitting either one
//! starts a fresh chat thread and switches to the chat screen.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;

use crate::gui::shared::colors;
use crate::gui::state::{AppState, ChatState, PROMPT_SUGGESTIONS};

use super::chat::start_chat;

fn submit(state: &ChatState, app: &AppState) {
    let prompt = state.prompt.get_untracked();
    if prompt.trim().is_empty() {
        return;
    }
    state.prompt.set(String::new());
    start_chat(state.clone(), app.clone(), prompt);
}

fn prompt_box(state: ChatState, app: AppState) -> impl IntoView {
    let prompt = state.prompt;
    let state_for_enter = state.clone();
    let app_for_enter = app.clone();
    let state_for_send = state.clone();
    let app_for_send = app.clone();

    v_stack((
        text_input(prompt)
            .placeholder("Draft a fundraising email about the new bill...")
            .style(|s| {
                let c = colors();
                s.width_full()
                    .padding(20.0)
                    .font_size(16.0)
                    .border(0.0)
                    .background(c.bg_base)
                    .color(c.text_primary)
            })
            .on_event_cont(EventListener::KeyDown, move |event| {
                if let Event::KeyDown(key_event) = event {
                    if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                        submit(&state_for_enter, &app_for_enter);
                    }
                }
            }),
        h_stack((
            empty().style(|s| s.flex_grow(1.0)),
            button(label(|| "→"))
                .style(|s| {
                    let c = colors();
                    s.width(36.0)
                        .height(36.0)
                        .items_center()
                        .justify_center()
                        .font_size(15.0)
                        .border(0.0)
                        .border_radius(8.0)
                        .background(c.text_primary)
                        .color(c.text_inverse)
                        .cursor(CursorStyle::Pointer)
                })
                .disabled(move || prompt.get().trim().is_empty())
                .action(move || {
                    submit(&state_for_send, &app_for_send);
                }),
        ))
        .style(|s| s.width_full().padding(12.0).items_center()),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .background(c.bg_base)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
            .box_shadow_blur(8.0)
            .box_shadow_color(Color::rgba8(0, 0, 0, 10))
    })
}

fn suggestion_chip(state: ChatState, app: AppState, chip: &'static str) -> impl IntoView {
    button(label(move || chip))
        .style(|s| {
            let c = colors();
            s.padding_horiz(16.0)
                .padding_vert(6.0)
                .font_size(12.0)
                .font_weight(Weight::MEDIUM)
                .border(1.0)
                .border_color(c.border)
                .border_radius(100.0)
                .background(c.bg_base)
                .color(c.text_secondary)
                .cursor(CursorStyle::Pointer)
                .hover(|s| {
                    let c = colors();
                    s.background(c.bg_surface)
                        .border_color(c.border_strong)
                        .color(c.text_primary)
                })
        })
        .action(move || {
            start_chat(
                state.clone(),
                app.clone(),
                format!("Help me write a {}", chip.to_lowercase()),
            );
        })
}

/// The home screen.
pub fn home_screen(state: ChatState, app: AppState) -> impl IntoView {
    let state_for_box = state.clone();
    let app_for_box = app.clone();

    container(
        v_stack((
            label(|| "What do you want to do today?").style(|s| {
                s.font_size(32.0)
                    .font_weight(Weight::MEDIUM)
                    .margin_bottom(40.0)
                    .color(colors().text_primary)
            }),
            prompt_box(state_for_box, app_for_box),
            h_stack_from_iter(
                PROMPT_SUGGESTIONS
                    .iter()
                    .copied()
                    .map(|chip| suggestion_chip(state.clone(), app.clone(), chip)),
            )
            .style(|s| s.gap(12.0).margin_top(32.0).justify_center()),
        ))
        .style(|s| s.width_full().max_width(800.0).padding_horiz(24.0).items_center()),
    )
    .style(|s| {
        s.size_full()
            .items_center()
            .justify_center()
            .background(colors().bg_base)
    })
}
