//! Shared delete confirmation dialog
//!
//! A single overlay serves every destructive action in the app. Screens
//! record a `DeleteTarget` on the gate; the dialog renders the matching
//! title and quoted label, and only its Delete button dispatches.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::text::Weight;

use super::theme::colors;
use super::widgets::{danger_button, ghost_button};
use crate::gui::state::{DeleteGate, DeleteTarget};

/// Creates the confirm dialog overlay.
///
/// Visible whenever the gate holds a pending delete. Cancel, Escape, and
/// a click on the scrim all dismiss without deleting; only the Delete
/// button takes the target off the gate and hands it to `on_confirm`.
pub fn confirm_dialog(
    gate: RwSignal<DeleteGate>,
    on_confirm: impl Fn(DeleteTarget) + Clone + 'static,
) -> impl IntoView {
    dyn_container(
        move || gate.get().pending().cloned(),
        move |pending| {
            let Some(pending) = pending else {
                return empty().into_any();
            };
            let title = pending.target.title();
            let body = pending.body();
            let on_confirm = on_confirm.clone();

            v_stack((
                label(move || title).style(|s| {
                    s.font_size(16.0)
                        .font_weight(Weight::SEMIBOLD)
                        .color(colors().text_primary)
                }),
                label(move || body.clone()).style(|s| {
                    s.font_size(13.0)
                        .margin_top(8.0)
                        .color(colors().text_secondary)
                }),
                h_stack((
                    ghost_button("Cancel").on_click_stop(move |_| {
                        gate.update(|g| g.cancel());
                    }),
                    danger_button("Delete").on_click_stop(move |_| {
                        let mut taken = None;
                        gate.update(|g| taken = g.confirm());
                        if let Some(target) = taken {
                            on_confirm(target);
                        }
                    }),
                ))
                .style(|s| s.justify_end().gap(8.0).margin_top(20.0)),
            ))
            .style(|s| {
                let c = colors();
                s.width(400.0)
                    .padding(20.0)
                    .background(c.bg_base)
                    .border_radius(12.0)
                    .box_shadow_blur(20.0)
                    .box_shadow_color(Color::rgba8(0, 0, 0, 50))
            })
            // Swallow clicks on the card so they never reach the scrim
            .on_click_stop(|_| {})
            .into_any()
        },
    )
    .style(move |s| {
        if gate.get().is_open() {
            s.position(floem::style::Position::Absolute)
                .inset_top(0.0)
                .inset_left(0.0)
                .inset_bottom(0.0)
                .inset_right(0.0)
                .items_center()
                .justify_center()
                .background(Color::rgba8(0, 0, 0, 100))
                .z_index(100)
        } else {
            s.display(floem::style::Display::None)
        }
    })
    .on_click_stop(move |_| {
        gate.update(|g| g.cancel());
    })
    .on_event_stop(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(key_event) = e {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                gate.update(|g| g.cancel());
            }
        }
    })
    .keyboard_navigable()
}
