//! Color picker modal
//!
//! Wraps the swatch panel in the app's modal chrome and bridges it to the
//! palette editor held by the session: opening an entry seeds the picker,
//! and every committed picker value writes back through the session so
//! existing palette entries update live while dragging.

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::create_effect;
use floem::style::CursorStyle;
use swatch::solid_picker;

use crate::gui::shared::colors;
use crate::gui::state::ProfileState;

/// Close the editor. The session appends a still-new draft here, so
/// every dismiss path saves a created color.
fn close_editor(state: &ProfileState) {
    state
        .session
        .update(|session| session.close_color_editor());
}

/// Two one-way bridges between the session's open entry and the picker.
/// Both are guarded against echoes so a committed value cannot ping-pong.
fn bind_picker(state: &ProfileState) {
    let session = state.session;

    // A different entry opening reseeds the picker wholesale, as does an
    // outside write to the open entry's hex. The picker's own write-through
    // lands with committed already equal, so it never reseeds mid-drag.
    let seed_picker = state.picker.clone();
    create_effect(move |prev: Option<Option<u32>>| {
        let editing = session.with(|s| s.editing().map(|e| (e.draft.id, e.draft.hex.clone())));
        let id = editing.as_ref().map(|(entry_id, _)| *entry_id);
        if let Some((_, hex)) = &editing {
            if prev != Some(id) || seed_picker.committed.get_untracked() != *hex {
                seed_picker.set_hex(hex);
            }
        }
        id
    });

    // Committed picker values flow into the open entry.
    let commit_picker = state.picker.clone();
    create_effect(move |prev: Option<String>| {
        let hex = commit_picker.committed.get();
        if prev.as_deref() == Some(hex.as_str()) {
            return hex;
        }
        let draft = session.with_untracked(|s| s.editing().map(|e| e.draft.clone()));
        if let Some(mut item) = draft {
            if item.hex != hex {
                item.hex = hex.clone();
                session.update(|s| s.update_open_color(&item));
            }
        }
        hex
    });
}

/// Modal shell around the swatch panel, shown while the session has an
/// open palette entry.
pub(super) fn color_picker_modal(state: ProfileState) -> impl IntoView {
    bind_picker(&state);

    let session = state.session;
    let x_state = state.clone();
    let check_state = state.clone();
    let scrim_state = state.clone();
    let escape_state = state.clone();

    container(
        v_stack((
            container(
                label(|| "×")
                    .style(|s| {
                        let c = colors();
                        s.padding_horiz(8.0)
                            .padding_vert(2.0)
                            .font_size(14.0)
                            .border_radius(999.0)
                            .color(c.text_secondary)
                            .cursor(CursorStyle::Pointer)
                            .hover(move |s| s.background(c.bg_elevated).color(c.text_primary))
                    })
                    .on_click_stop(move |_| close_editor(&x_state)),
            )
            .style(|s| s.width_full().justify_end()),
            solid_picker(state.picker.clone()),
            h_stack((
                empty().style(|s| s.flex_grow(1.0)),
                button(label(|| "✓"))
                    .style(|s| {
                        let c = colors();
                        s.width(40.0)
                            .height(40.0)
                            .items_center()
                            .justify_center()
                            .font_size(16.0)
                            .border(0.0)
                            .border_radius(8.0)
                            .background(c.text_primary)
                            .color(c.text_inverse)
                            .cursor(CursorStyle::Pointer)
                    })
                    .action(move || close_editor(&check_state)),
            ))
            .style(|s| s.width_full()),
        ))
        .style(|s| {
            let c = colors();
            s.width(320.0)
                .padding(16.0)
                .gap(12.0)
                .background(c.bg_base)
                .border(1.0)
                .border_color(c.border)
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
        if session.with(|current| current.editing().is_some()) {
            s
        } else {
            s.display(floem::style::Display::None)
        }
    })
    .on_click_stop(move |_| close_editor(&scrim_state))
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                close_editor(&escape_state);
            }
        }
    })
    .keyboard_navigable()
}
