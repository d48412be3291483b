//! Drafts screen
//!
//! Speeches and Emails tabs over the draft store. Each tab lists its own
//! kind newest-first; creation goes through a small title modal.

use std::thread;

use floem::event::{Event, EventListener};
use floem::ext_event::create_ext_action;
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use hustings::prelude::*;

use crate::gui::shared::{
    colors, field_label, ghost_button, inner_nav_button, inner_sidebar_style, input_style,
    status_badge, BadgeTint,
};
use crate::gui::state::{AppState, DeleteTarget, DraftsState};
use crate::gui::utils::ext_action_scope;

/// Result type for background draft store operations
enum DraftsResult {
    ListDone {
        drafts: Vec<Draft>,
        error: Option<String>,
    },
    CreateDone {
        draft: Option<Draft>,
        error: Option<String>,
    },
    DeleteDone {
        id: String,
        error: Option<String>,
    },
}

fn create_result_sender(state: DraftsState) -> impl FnOnce(DraftsResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_drafts_result(state, result);
    })
}

/// Handle results from background draft operations. Owns every flag
/// reset and the only writes into the draft list.
fn handle_drafts_result(state: DraftsState, result: DraftsResult) {
    match result {
        DraftsResult::ListDone { drafts, error } => {
            if let Some(err) = error {
                tracing::error!("draft listing failed: {err}");
                state.status_message.set(format!("Listing failed: {err}"));
            } else {
                state.drafts.set(drafts.into_iter().collect());
            }
            state.loading.set(false);
        }
        DraftsResult::CreateDone { draft, error } => {
            if let Some(err) = error {
                tracing::error!("draft creation failed: {err}");
                state.status_message.set(format!("Create failed: {err}"));
            } else if let Some(draft) = draft {
                // The tab may have switched while the store ran
                if draft.kind == state.kind.get_untracked() {
                    state.drafts.update(|drafts| drafts.push_front(draft));
                }
                state.new_modal_open.set(false);
                state.new_title.set(String::new());
            }
        }
        DraftsResult::DeleteDone { id, error } => {
            if let Some(err) = error {
                tracing::error!("draft delete failed for {id}: {err}");
                state.status_message.set(format!("Delete failed: {err}"));
            } else {
                state.drafts.update(|drafts| drafts.retain(|d| d.id != id));
            }
        }
    }
}

/// List drafts of the active kind on a background thread.
pub fn load_drafts(state: DraftsState) {
    state.loading.set(true);
    let store = state.store.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let kind = state.kind.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.list_drafts(&workspace_id, kind) {
            Ok(drafts) => DraftsResult::ListDone {
                drafts,
                error: None,
            },
            Err(e) => DraftsResult::ListDone {
                drafts: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Create a draft titled from the composer modal.
fn create_draft(state: DraftsState) {
    let title = state.new_title.get_untracked();
    if title.trim().is_empty() {
        return;
    }
    let store = state.store.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let kind = state.kind.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let draft = Draft::new(&workspace_id, kind, title.trim(), "");
        let result = match store.create_draft(&draft) {
            Ok(stored) => DraftsResult::CreateDone {
                draft: Some(stored),
                error: None,
            },
            Err(e) => DraftsResult::CreateDone {
                draft: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Remove a draft. Called by the confirm dispatcher only.
pub fn delete_draft(state: DraftsState, id: String) {
    let store = state.store.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.delete_draft(&workspace_id, &id) {
            Ok(()) => DraftsResult::DeleteDone { id, error: None },
            Err(e) => DraftsResult::DeleteDone {
                id,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

fn format_created(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| "--".to_string())
}

fn kind_subtitle(kind: DraftKind) -> &'static str {
    match kind {
        DraftKind::Speech => "Stump speeches, keynotes, and remarks.",
        DraftKind::Email => "Fundraising blasts, newsletters, and updates.",
    }
}

fn kind_icon(kind: DraftKind) -> &'static str {
    match kind {
        DraftKind::Speech => "🎤",
        DraftKind::Email => "✉️",
    }
}

fn status_tint(status: &str) -> BadgeTint {
    match status {
        "Final" => BadgeTint::Success,
        "Review" => BadgeTint::Info,
        _ => BadgeTint::Neutral,
    }
}

fn drafts_sidebar(state: DraftsState) -> impl IntoView {
    let kind = state.kind;

    v_stack((
        v_stack((
            label(|| "Drafts").style(|s| {
                s.font_size(20.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            label(|| "Manage content outputs").style(|s| {
                s.font_size(12.0)
                    .margin_top(4.0)
                    .color(colors().text_secondary)
            }),
        ))
        .style(|s| {
            s.width_full()
                .padding(24.0)
                .border_bottom(1.0)
                .border_color(colors().border)
        }),
        v_stack((
            inner_nav_button(
                DraftKind::Speech.label(),
                move || kind.get() == DraftKind::Speech,
                {
                    let state = state.clone();
                    move || {
                        kind.set(DraftKind::Speech);
                        load_drafts(state.clone());
                    }
                },
            ),
            inner_nav_button(
                DraftKind::Email.label(),
                move || kind.get() == DraftKind::Email,
                {
                    let state = state.clone();
                    move || {
                        kind.set(DraftKind::Email);
                        load_drafts(state.clone());
                    }
                },
            ),
        ))
        .style(|s| s.width_full().padding(16.0).gap(4.0)),
    ))
    .style(inner_sidebar_style)
}

fn list_header(state: DraftsState, kind: DraftKind) -> impl IntoView {
    let new_label = match kind {
        DraftKind::Speech => "New Speech",
        DraftKind::Email => "New Email",
    };

    h_stack((
        v_stack((
            label(move || kind.label()).style(|s| {
                s.font_size(24.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            label(move || kind_subtitle(kind)).style(|s| {
                s.font_size(13.0)
                    .margin_top(4.0)
                    .color(colors().text_secondary)
            }),
        )),
        empty().style(|s| s.flex_grow(1.0)),
        button(label(move || format!("+ {new_label}")))
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
                    .hover(|s| s.background(colors().text_secondary))
            })
            .action(move || {
                state.new_title.set(String::new());
                state.new_modal_open.set(true);
            }),
    ))
    .style(|s| s.width_full().items_center())
}

fn draft_row(app: AppState, draft: Draft) -> impl IntoView {
    let icon = kind_icon(draft.kind);
    let title = draft.title.clone();
    let date = format_created(&draft.created_at);
    let status = draft.status.clone();
    let tint = status_tint(&draft.status);
    let delete_label = draft.title.clone();
    let delete_id = draft.id.clone();

    h_stack((
        container(label(move || icon).style(|s| s.font_size(20.0))).style(|s| {
            let c = colors();
            s.width(48.0)
                .height(48.0)
                .items_center()
                .justify_center()
                .border_radius(8.0)
                .background(c.bg_surface)
        }),
        v_stack((
            label(move || title.clone()).style(|s| {
                s.font_size(14.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            label(move || date.clone()).style(|s| {
                s.font_size(12.0)
                    .margin_top(4.0)
                    .color(colors().text_secondary)
            }),
        ))
        .style(|s| s.flex_grow(1.0).margin_left(16.0)),
        status_badge(move || status.clone(), tint),
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
                    DeleteTarget::Draft {
                        id: delete_id.clone(),
                    },
                );
            }),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .items_center()
            .padding(20.0)
            .background(c.bg_base)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
    })
}

fn draft_list(state: DraftsState, app: AppState) -> impl IntoView {
    let drafts = state.drafts;
    let loading = state.loading;

    dyn_container(
        move || (loading.get(), drafts.get().is_empty()),
        move |(is_loading, is_empty)| {
            if is_loading {
                label(|| "Loading drafts...")
                    .style(|s| s.font_size(13.0).color(colors().text_secondary))
                    .into_any()
            } else if is_empty {
                v_stack((
                    label(|| "No drafts yet").style(|s| {
                        s.font_size(13.0)
                            .font_weight(Weight::MEDIUM)
                            .color(colors().text_primary)
                    }),
                    label(|| "Create one to get started").style(|s| {
                        s.font_size(12.0)
                            .margin_top(4.0)
                            .color(colors().text_secondary)
                    }),
                ))
                .style(|s| {
                    let c = colors();
                    s.width_full()
                        .items_center()
                        .padding_vert(48.0)
                        .border(1.0)
                        .border_color(c.border)
                        .border_radius(12.0)
                })
                .into_any()
            } else {
                let app = app.clone();
                dyn_stack(
                    move || drafts.get(),
                    |draft| draft.id.clone(),
                    move |draft| draft_row(app.clone(), draft),
                )
                .style(|s| s.width_full().flex_col().gap(16.0))
                .into_any()
            }
        },
    )
    .style(|s| s.width_full().margin_top(24.0))
}

fn new_draft_modal(state: DraftsState) -> impl IntoView {
    let open = state.new_modal_open;
    let title = state.new_title;
    let kind = state.kind;

    let state_for_create = state.clone();
    let state_for_cancel = state.clone();
    let state_for_submit = state.clone();

    container(
        v_stack((
            label(move || match kind.get() {
                DraftKind::Speech => "New Speech",
                DraftKind::Email => "New Email",
            })
            .style(|s| {
                s.font_size(16.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            field_label("Title"),
            text_input(title)
                .placeholder("Draft title")
                .style(input_style)
                .on_event_cont(EventListener::KeyDown, move |event| {
                    if let Event::KeyDown(key_event) = event {
                        if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                            create_draft(state_for_submit.clone());
                        }
                    }
                }),
            h_stack((
                ghost_button("Cancel").on_click_stop(move |_| {
                    state_for_cancel.new_modal_open.set(false);
                    state_for_cancel.new_title.set(String::new());
                }),
                button(label(|| "Create"))
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
                    .disabled(move || title.get().trim().is_empty())
                    .action(move || {
                        create_draft(state_for_create.clone());
                    }),
            ))
            .style(|s| s.width_full().justify_end().gap(8.0).margin_top(8.0)),
        ))
        .style(|s| {
            let c = colors();
            s.width(400.0)
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
        open.set(false);
    })
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                open.set(false);
            }
        }
    })
    .keyboard_navigable()
}

/// The drafts screen.
pub fn drafts_screen(state: DraftsState, app: AppState) -> impl IntoView {
    let kind = state.kind;
    let state_for_header = state.clone();
    let state_for_list = state.clone();
    let state_for_modal = state.clone();
    let status = state.status_message;

    h_stack((
        drafts_sidebar(state),
        container(
            scroll(
                container(
                    v_stack((
                        dyn_container(
                            move || kind.get(),
                            move |kind| list_header(state_for_header.clone(), kind).into_any(),
                        )
                        .style(|s| s.width_full()),
                        draft_list(state_for_list, app),
                        label(move || status.get()).style(|s| {
                            s.font_size(12.0)
                                .margin_top(12.0)
                                .color(colors().text_secondary)
                        }),
                    ))
                    .style(|s| s.width_full().max_width(896.0).padding(32.0)),
                )
                .style(|s| s.width_full().justify_center()),
            )
            .style(|s| s.size_full()),
        )
        .style(|s| {
            s.flex_grow(1.0)
                .flex_basis(0.0)
                .min_height(0.0)
                .height_full()
                .background(colors().bg_base)
        }),
        new_draft_modal(state_for_modal),
    ))
    .style(|s| s.size_full())
}
