//! Platform & Issues tab
//!
//! Issue cards over the working profile plus the Add Platform Issue
//! modal. Deletion routes through the shared confirm gate.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use hustings::prelude::*;

use crate::gui::shared::{
    BadgeTint, card_style, colors, field_label, ghost_button, input_style, secondary_button,
    status_badge, text_area,
};
use crate::gui::state::{AppState, DeleteTarget, ProfileState};

use super::{save_button, tab_header};

/// Append the composed issue to the working profile and close the modal.
fn submit_issue(state: &ProfileState) {
    let title = state.issue_title.get_untracked();
    if title.trim().is_empty() {
        return;
    }
    let issue = Issue {
        id: timestamp_id(),
        title,
        status: state.issue_status.get_untracked(),
        description: state.issue_description.get_untracked(),
    };
    state
        .session
        .update(|session| session.working_mut().add_issue(issue));
    state.reset_issue_composer();
}

fn issue_card(app: AppState, issue: Issue) -> impl IntoView {
    let tint = match issue.status {
        IssueStatus::Published => BadgeTint::Success,
        IssueStatus::Review => BadgeTint::Info,
        IssueStatus::Draft => BadgeTint::Warning,
    };
    let badge_text = issue.status.label().to_uppercase();
    let title = issue.title.clone();
    let description = issue.description.clone();
    let delete_label = issue.title;
    let delete_id = issue.id;

    v_stack((
        h_stack((
            label(move || title.clone()).style(|s| {
                s.font_size(14.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            status_badge(move || badge_text.clone(), tint),
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
                        DeleteTarget::Issue {
                            id: delete_id.clone(),
                        },
                    );
                }),
        ))
        .style(|s| s.width_full().items_center()),
        label(move || description.clone()).style(|s| {
            s.font_size(13.0)
                .margin_top(8.0)
                .color(colors().text_secondary)
        }),
    ))
    .style(card_style)
}

fn issue_list(state: ProfileState, app: AppState) -> impl IntoView {
    let session = state.session;

    dyn_container(
        move || session.with(|s| s.working().platform_issues.is_empty()),
        move |is_empty| {
            if is_empty {
                container(
                    label(|| "No issues defined yet.")
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
                    move || session.with(|s| s.working().platform_issues.clone()),
                    |issue| issue.id.clone(),
                    move |issue| issue_card(app.clone(), issue),
                )
                .style(|s| s.width_full().flex_col().gap(16.0))
                .into_any()
            }
        },
    )
    .style(|s| s.width_full().margin_top(24.0))
}

fn status_option(state: &ProfileState, status: IssueStatus) -> impl IntoView + use<> {
    let selected = state.issue_status;

    label(move || status.label())
        .style(move |s| {
            let c = colors();
            let s = s
                .padding_horiz(12.0)
                .padding_vert(6.0)
                .font_size(12.0)
                .font_weight(Weight::MEDIUM)
                .border(1.0)
                .border_radius(8.0)
                .cursor(CursorStyle::Pointer);
            if selected.get() == status {
                s.border_color(c.border_strong)
                    .background(c.bg_surface)
                    .color(c.text_primary)
            } else {
                s.border_color(c.border)
                    .color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_surface))
            }
        })
        .on_click_stop(move |_| selected.set(status))
}

/// Modal overlay for composing a platform issue. The card rebuilds each
/// time it opens so the description editor starts from the cleared text.
pub(super) fn add_issue_modal(state: ProfileState) -> impl IntoView {
    let open = state.issue_modal_open;
    let title = state.issue_title;

    let state_for_card = state.clone();
    let state_for_scrim = state.clone();
    let state_for_escape = state;

    container(dyn_container(
        move || open.get(),
        move |is_open| {
            if !is_open {
                return empty().into_any();
            }
            let state = state_for_card.clone();
            let state_for_submit = state.clone();
            let state_for_add = state.clone();
            let state_for_cancel = state.clone();

            v_stack((
                label(|| "Add Platform Issue").style(|s| {
                    s.font_size(16.0)
                        .font_weight(Weight::SEMIBOLD)
                        .color(colors().text_primary)
                }),
                field_label("Issue Title"),
                text_input(title)
                    .placeholder("e.g. Public Transport Expansion")
                    .style(input_style)
                    .on_event_cont(EventListener::KeyDown, move |event| {
                        if let Event::KeyDown(key_event) = event {
                            if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                                submit_issue(&state_for_submit);
                            }
                        }
                    }),
                field_label("Status"),
                h_stack_from_iter(
                    IssueStatus::all()
                        .map(|status| status_option(&state, status)),
                )
                .style(|s| s.gap(8.0)),
                field_label("Description"),
                text_area(state.issue_description, "Brief summary of the stance..."),
                h_stack((
                    ghost_button("Cancel").on_click_stop(move |_| {
                        state_for_cancel.reset_issue_composer();
                    }),
                    button(label(|| "Add Issue"))
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
                        .action(move || submit_issue(&state_for_add)),
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
            .on_click_stop(|_| {})
            .into_any()
        },
    ))
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
        state_for_scrim.reset_issue_composer();
    })
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                state_for_escape.reset_issue_composer();
            }
        }
    })
    .keyboard_navigable()
}

pub(super) fn issues_tab(state: ProfileState, app: AppState) -> impl IntoView {
    let open = state.issue_modal_open;

    v_stack((
        h_stack((
            tab_header("Platform & Issues", "Key policy positions and talking points."),
            empty().style(|s| s.flex_grow(1.0)),
            h_stack((
                save_button(state.clone()),
                secondary_button("Add Issue").on_click_stop(move |_| open.set(true)),
            ))
            .style(|s| s.items_center().gap(12.0)),
        ))
        .style(|s| s.width_full().items_center()),
        issue_list(state, app),
    ))
    .style(|s| s.width_full())
}
