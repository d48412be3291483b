//! Opponents tab
//!
//! Opposition research cards plus the Add Opponent modal with its tag
//! composer. Deletion routes through the shared confirm gate.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::{CursorStyle, FlexDirection, FlexWrap};
use floem::text::Weight;
use hustings::prelude::*;

use crate::gui::shared::{
    colors, field_label, ghost_button, input_style, secondary_button,
};
use crate::gui::state::{AppState, DeleteTarget, ProfileState};

use super::{save_button, tab_header};

/// First letter of the first two words, uppercased.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Append the composed opponent to the working profile and close the modal.
fn submit_opponent(state: &ProfileState, adding_tag: RwSignal<bool>) {
    let name = state.opponent_name.get_untracked();
    if name.trim().is_empty() {
        return;
    }
    let opponent = Opponent {
        id: timestamp_id(),
        name,
        party: state.opponent_party.get_untracked(),
        tags: state.opponent_tags.get_untracked(),
    };
    state
        .session
        .update(|session| session.working_mut().add_opponent(opponent));
    state.reset_opponent_composer();
    adding_tag.set(false);
}

/// Move the typed tag into the pending list. Duplicates are dropped so
/// the chip keys stay unique.
fn submit_tag(state: &ProfileState, adding_tag: RwSignal<bool>) {
    let tag = state.opponent_tag_input.get_untracked();
    let tag = tag.trim();
    if tag.is_empty() {
        return;
    }
    if !state.opponent_tags.get_untracked().iter().any(|t| t == tag) {
        let tag = tag.to_string();
        state.opponent_tags.update(|tags| tags.push(tag));
    }
    state.opponent_tag_input.set(String::new());
    adding_tag.set(false);
}

fn opponent_card(app: AppState, opponent: Opponent) -> impl IntoView {
    let initials_text = initials(&opponent.name);
    let name = opponent.name.clone();
    let party_line = format!("Party Affiliation: {}", opponent.party);
    let delete_label = opponent.name;
    let delete_id = opponent.id;
    let tags = opponent.tags;

    v_stack((
        h_stack((
            label(move || initials_text.clone()).style(|s| {
                let c = colors();
                s.width(64.0)
                    .height(64.0)
                    .items_center()
                    .justify_center()
                    .border_radius(999.0)
                    .font_size(18.0)
                    .font_weight(Weight::BOLD)
                    .background(c.bg_elevated)
                    .color(c.text_muted)
            }),
            v_stack((
                h_stack((
                    label(move || name.clone()).style(|s| {
                        s.font_size(16.0)
                            .font_weight(Weight::SEMIBOLD)
                            .color(colors().text_primary)
                    }),
                    empty().style(|s| s.flex_grow(1.0)),
                    label(|| "View Analysis").style(|s| {
                        s.font_size(12.0)
                            .color(colors().accent)
                            .cursor(CursorStyle::Pointer)
                    }),
                    label(|| "Delete")
                        .style(|s| {
                            s.font_size(12.0)
                                .margin_left(16.0)
                                .color(colors().error)
                                .cursor(CursorStyle::Pointer)
                        })
                        .on_click_stop(move |_| {
                            app.request_delete(
                                delete_label.clone(),
                                DeleteTarget::Opponent {
                                    id: delete_id.clone(),
                                },
                            );
                        }),
                ))
                .style(|s| s.width_full().items_center()),
                label(move || party_line.clone()).style(|s| {
                    s.font_size(13.0)
                        .margin_top(4.0)
                        .color(colors().text_secondary)
                }),
                h_stack_from_iter(tags.into_iter().map(|tag| {
                    label(move || tag.clone()).style(|s| {
                        let c = colors();
                        s.padding_horiz(8.0)
                            .padding_vert(4.0)
                            .font_size(11.0)
                            .font_weight(Weight::MEDIUM)
                            .border_radius(4.0)
                            .background(c.error_bg)
                            .color(c.error)
                    })
                }))
                .style(|s| {
                    s.gap(8.0)
                        .margin_top(12.0)
                        .flex_wrap(FlexWrap::Wrap)
                        .flex_direction(FlexDirection::Row)
                }),
            ))
            .style(|s| s.flex_grow(1.0).margin_left(16.0)),
        ))
        .style(|s| {
            s.width_full()
                .padding(24.0)
                .border_bottom(1.0)
                .border_color(colors().border)
        }),
        container(
            label(|| "Last updated just now")
                .style(|s| s.font_size(11.0).color(colors().text_secondary)),
        )
        .style(|s| {
            s.width_full()
                .padding(12.0)
                .justify_center()
                .background(colors().bg_surface)
        }),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .background(c.bg_base)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
    })
}

fn opponent_list(state: ProfileState, app: AppState) -> impl IntoView {
    let session = state.session;

    dyn_container(
        move || session.with(|s| s.working().opponents.is_empty()),
        move |is_empty| {
            if is_empty {
                container(
                    label(|| "No opponents tracked.")
                        .style(|s| s.font_size(13.0).color(colors().text_muted)),
                )
                .style(|s| {
                    let c = colors();
                    s.width_full()
                        .padding_vert(48.0)
                        .justify_center()
                        .background(c.bg_surface)
                        .border(1.0)
                        .border_color(c.border)
                        .border_radius(12.0)
                })
                .into_any()
            } else {
                let app = app.clone();
                dyn_stack(
                    move || session.with(|s| s.working().opponents.clone()),
                    |opponent| opponent.id.clone(),
                    move |opponent| opponent_card(app.clone(), opponent),
                )
                .style(|s| s.width_full().flex_col().gap(16.0))
                .into_any()
            }
        },
    )
    .style(|s| s.width_full().margin_top(24.0))
}

fn tag_chip(state: ProfileState, tag: String) -> impl IntoView {
    let text = tag.clone();

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
                state.opponent_tags.update(|tags| tags.retain(|t| t != &tag));
            }),
    ))
    .style(|s| {
        let c = colors();
        s.items_center()
            .padding_horiz(8.0)
            .padding_vert(4.0)
            .border_radius(6.0)
            .background(c.bg_elevated)
            .border(1.0)
            .border_color(c.border)
    })
}

/// Bordered tag field: pending chips plus the inline add control.
fn tag_field(state: ProfileState, adding_tag: RwSignal<bool>) -> impl IntoView {
    let tags = state.opponent_tags;
    let chip_state = state.clone();

    v_stack((
        dyn_stack(
            move || tags.get(),
            |tag| tag.clone(),
            move |tag| tag_chip(chip_state.clone(), tag),
        )
        .style(|s| {
            s.gap(6.0)
                .flex_wrap(FlexWrap::Wrap)
                .flex_direction(FlexDirection::Row)
        }),
        dyn_container(
            move || adding_tag.get(),
            move |is_adding| {
                if is_adding {
                    let submit_state = state.clone();
                    let check_state = state.clone();
                    h_stack((
                        text_input(state.opponent_tag_input)
                            .placeholder("Type tag...")
                            .style(|s| {
                                s.flex_grow(1.0)
                                    .font_size(12.0)
                                    .border(0.0)
                                    .background(Color::TRANSPARENT)
                                    .color(colors().text_primary)
                            })
                            .on_event_cont(EventListener::KeyDown, move |event| {
                                if let Event::KeyDown(key_event) = event {
                                    if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                                        submit_tag(&submit_state, adding_tag);
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
                            .on_click_stop(move |_| submit_tag(&check_state, adding_tag)),
                    ))
                    .style(|s| s.width_full().items_center())
                    .into_any()
                } else {
                    container(
                        label(|| "+ Add Tag")
                            .style(|s| {
                                let c = colors();
                                s.padding_horiz(8.0)
                                    .padding_vert(4.0)
                                    .font_size(11.0)
                                    .font_weight(Weight::MEDIUM)
                                    .border_radius(6.0)
                                    .color(c.text_muted)
                                    .cursor(CursorStyle::Pointer)
                                    .hover(move |s| {
                                        s.background(c.bg_surface).color(c.text_secondary)
                                    })
                            })
                            .on_click_stop(move |_| adding_tag.set(true)),
                    )
                    .into_any()
                }
            },
        )
        .style(|s| s.margin_top(6.0)),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .min_height(38.0)
            .padding(8.0)
            .background(c.bg_surface)
            .border(1.0)
            .border_color(c.border)
            .border_radius(8.0)
    })
}

/// Modal overlay for composing an opponent.
pub(super) fn add_opponent_modal(state: ProfileState) -> impl IntoView {
    let open = state.opponent_modal_open;
    let name = state.opponent_name;
    let adding_tag = RwSignal::new(false);

    let state_for_submit = state.clone();
    let state_for_add = state.clone();
    let state_for_cancel = state.clone();
    let state_for_scrim = state.clone();
    let state_for_escape = state.clone();

    container(
        v_stack((
            label(|| "Add Opponent").style(|s| {
                s.font_size(16.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            field_label("Full Name"),
            text_input(name)
                .placeholder("e.g. Jane Doe")
                .style(input_style)
                .on_event_cont(EventListener::KeyDown, move |event| {
                    if let Event::KeyDown(key_event) = event {
                        if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                            submit_opponent(&state_for_submit, adding_tag);
                        }
                    }
                }),
            field_label("Party Affiliation"),
            text_input(state.opponent_party)
                .placeholder("e.g. Independent")
                .style(input_style),
            field_label("Key Tags"),
            tag_field(state, adding_tag),
            label(|| "These will appear as badges on the opponent card.")
                .style(|s| s.font_size(11.0).color(colors().text_muted)),
            h_stack((
                ghost_button("Cancel").on_click_stop(move |_| {
                    state_for_cancel.reset_opponent_composer();
                    adding_tag.set(false);
                }),
                button(label(|| "Add Opponent"))
                    .style(|s| {
                        let c = colors();
                        s.padding_horiz(16.0)
                            .padding_vert(8.0)
                            .font_size(13.0)
                            .font_weight(Weight::MEDIUM)
                            .border(0.0)
                            .border_radius(8.0)
                            .background(c.text_primary)
                            .color(c.text_inverse)
                            .cursor(CursorStyle::Pointer)
                    })
                    .disabled(move || name.get().trim().is_empty())
                    .action(move || submit_opponent(&state_for_add, adding_tag)),
            ))
            .style(|s| s.width_full().justify_end().gap(8.0).margin_top(8.0)),
        ))
        .style(|s| {
            let c = colors();
            s.width(480.0)
                .padding(20.0)
                .gap(12.0)
                .background(c.bg_base)
                .border_radius(12.0)
                .box_shadow_blur(20.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 60))
        })
        .on_click_stop(|_| {}),
    )
    .style(move |s| {
        let s = s
            .absolute()
            .inset_top(0.0)
            .inset_left(0.0)
            .inset_right(0.0)
            .inset_bottom(0.0)
            .items_center()
            .justify_center()
            .background(Color::rgba8(0, 0, 0, 100))
            .z_index(100);
        if open.get() {
            s
        } else {
            s.display(floem::style::Display::None)
        }
    })
    .on_click_stop(move |_| {
        state_for_scrim.reset_opponent_composer();
        adding_tag.set(false);
    })
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                state_for_escape.reset_opponent_composer();
                adding_tag.set(false);
            }
        }
    })
    .keyboard_navigable()
}

pub(super) fn opponents_tab(state: ProfileState, app: AppState) -> impl IntoView {
    let open = state.opponent_modal_open;

    v_stack((
        h_stack((
            tab_header("Opponents", "Opposition research and contrast points."),
            empty().style(|s| s.flex_grow(1.0)),
            h_stack((
                save_button(state.clone()),
                secondary_button("Add Opponent").on_click_stop(move |_| open.set(true)),
            ))
            .style(|s| s.items_center().gap(12.0)),
        ))
        .style(|s| s.width_full().items_center()),
        opponent_list(state, app),
    ))
    .style(|s| s.width_full())
}
