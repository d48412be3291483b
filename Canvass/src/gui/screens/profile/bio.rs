//! Bio & Core Values tab
//!
//! Name and biography write through to the working profile as the user
//! types; core values are a chip row with an inline add input.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::{CursorStyle, FlexDirection, FlexWrap};
use floem::text::Weight;

use crate::gui::shared::{card_style, colors, field_label, input_style, text_area};
use crate::gui::state::ProfileState;

use super::{save_button, tab_header};

/// Append the typed value and close the inline input. Blank input keeps
/// the composer open; the profile drops duplicates on its own.
fn submit_value(state: &ProfileState, adding: RwSignal<bool>) {
    let value = state.value_input.get_untracked();
    if value.trim().is_empty() {
        return;
    }
    state
        .session
        .update(|session| session.working_mut().add_core_value(&value));
    state.value_input.set(String::new());
    adding.set(false);
}

fn value_chip(state: ProfileState, value: String) -> impl IntoView {
    let text = value.clone();

    h_stack((
        label(move || text.clone()).style(|s| {
            s.font_size(11.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
        }),
        label(|| "×")
            .style(|s| {
                let c = colors();
                s.margin_left(6.0)
                    .font_size(12.0)
                    .color(c.text_secondary)
                    .cursor(CursorStyle::Pointer)
                    .hover(move |s| s.color(c.error))
            })
            .on_click_stop(move |_| {
                state
                    .session
                    .update(|session| session.working_mut().remove_core_value(&value));
            }),
    ))
    .style(|s| {
        let c = colors();
        s.items_center()
            .padding_horiz(12.0)
            .padding_vert(4.0)
            .border_radius(999.0)
            .background(c.bg_elevated)
            .border(1.0)
            .border_color(c.border)
    })
}

/// The inline "+ Add Value" control; swaps to a pill input while open.
fn value_composer(state: ProfileState, adding: RwSignal<bool>) -> impl IntoView {
    dyn_container(
        move || adding.get(),
        move |is_adding| {
            if is_adding {
                let submit_state = state.clone();
                let check_state = state.clone();
                h_stack((
                    text_input(state.value_input)
                        .placeholder("Type value...")
                        .style(|s| {
                            let c = colors();
                            s.width(120.0)
                                .padding_horiz(12.0)
                                .padding_vert(4.0)
                                .font_size(11.0)
                                .border(1.0)
                                .border_color(c.border_strong)
                                .border_radius(999.0)
                                .background(Color::TRANSPARENT)
                                .color(c.text_primary)
                        })
                        .on_event_cont(EventListener::KeyDown, move |event| {
                            if let Event::KeyDown(key_event) = event {
                                if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                                    submit_value(&submit_state, adding);
                                }
                            }
                        }),
                    label(|| "✓")
                        .style(|s| {
                            let c = colors();
                            s.padding(4.0)
                                .font_size(12.0)
                                .border_radius(999.0)
                                .color(c.text_primary)
                                .cursor(CursorStyle::Pointer)
                                .hover(move |s| s.background(c.bg_elevated))
                        })
                        .on_click_stop(move |_| submit_value(&check_state, adding)),
                ))
                .style(|s| s.items_center().gap(4.0))
                .into_any()
            } else {
                label(|| "+ Add Value")
                    .style(|s| {
                        let c = colors();
                        s.padding_horiz(12.0)
                            .padding_vert(4.0)
                            .font_size(11.0)
                            .font_weight(Weight::MEDIUM)
                            .border(1.0)
                            .border_color(c.border_strong)
                            .border_radius(999.0)
                            .color(c.text_secondary)
                            .cursor(CursorStyle::Pointer)
                            .hover(move |s| s.border_color(c.text_secondary).color(c.text_primary))
                    })
                    .on_click_stop(move |_| adding.set(true))
                    .into_any()
            }
        },
    )
}

fn values_field(state: ProfileState) -> impl IntoView {
    let adding = RwSignal::new(false);
    let session = state.session;
    let chip_state = state.clone();

    v_stack((
        field_label("Core Values"),
        dyn_stack(
            move || session.with(|s| s.working().core_values.clone()),
            |value| value.clone(),
            move |value| value_chip(chip_state.clone(), value),
        )
        .style(|s| {
            s.gap(8.0)
                .flex_wrap(FlexWrap::Wrap)
                .flex_direction(FlexDirection::Row)
        }),
        container(value_composer(state, adding)).style(|s| s.margin_top(8.0)),
    ))
    .style(|s| s.width_full())
}

pub(super) fn bio_tab(state: ProfileState) -> impl IntoView {
    v_stack((
        h_stack((
            tab_header(
                "Bio & Core Values",
                "Define the candidate's personal story and guiding principles.",
            ),
            empty().style(|s| s.flex_grow(1.0)),
            save_button(state.clone()),
        ))
        .style(|s| s.width_full().items_center()),
        v_stack((
            h_stack((
                v_stack((
                    field_label("Full Name"),
                    text_input(state.full_name)
                        .placeholder("e.g. Sarah Jenkins")
                        .style(input_style),
                ))
                .style(|s| s.flex_grow(1.0).flex_basis(0.0)),
                v_stack((
                    field_label("Current Title/Role"),
                    text_input(state.title_role)
                        .placeholder("Community Organizer")
                        .style(input_style),
                ))
                .style(|s| s.flex_grow(1.0).flex_basis(0.0)),
            ))
            .style(|s| s.width_full().gap(16.0)),
            v_stack((
                field_label("Short Biography"),
                text_area(
                    state.bio,
                    "Sarah Jenkins represents a new generation of leadership...",
                ),
                label(|| "Used for social media bios and short intros.").style(|s| {
                    s.font_size(11.0)
                        .margin_top(4.0)
                        .color(colors().text_muted)
                }),
            ))
            .style(|s| s.width_full()),
            values_field(state),
        ))
        .style(|s| card_style(s).width_full().margin_top(24.0).gap(20.0)),
    ))
    .style(|s| s.width_full())
}
