//! The solid color picker panel.
//!
//! Renders the tab row, the drag surfaces, and the hex entry row. All
//! interaction flows through [`PickerState`], which is plain reactive
//! state and can be driven without a window for testing.

#![allow(clippy::cast_possible_truncation)]

use floem::event::{Event, EventListener, EventPropagation};
use floem::prelude::*;
use floem::text::Weight;
use floem_reactive::create_effect;

use crate::color::{hex_to_hsv, hex_to_rgb, normalize_hex, Hsv};
use crate::gradient;
use crate::surface::{DragTarget, SurfaceBounds};

const SQUARE: SurfaceBounds = SurfaceBounds { width: 288.0, height: 128.0 };
const STRIP: SurfaceBounds = SurfaceBounds { width: 288.0, height: 12.0 };
const ROW_GAP: f64 = 20.0;
const THUMB_R: f64 = 8.0;
const HUE_THUMB_R: f64 = 10.0;

/// Which preview the top surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTab {
    Solid,
    Gradient,
}

/// Reactive state backing one picker panel.
///
/// `committed` carries only complete colors in canonical `#RRGGBB` form;
/// embedders subscribe to it for write-through. `field` is the raw hex
/// entry text and may hold a partial value between keystrokes.
#[derive(Clone)]
pub struct PickerState {
    pub hsv: RwSignal<Hsv>,
    pub committed: RwSignal<String>,
    pub field: RwSignal<String>,
    pub drag: RwSignal<Option<DragTarget>>,
    pub tab: RwSignal<PickerTab>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            hsv: create_rw_signal(Hsv::default()),
            committed: create_rw_signal("#000000".to_string()),
            field: create_rw_signal("000000".to_string()),
            drag: create_rw_signal(None),
            tab: create_rw_signal(PickerTab::Solid),
        }
    }

    /// Seed the picker from a stored color, ending any drag in progress.
    pub fn set_hex(&self, hex: &str) {
        let canonical = normalize_hex(hex);
        self.drag.set(None);
        self.hsv.set(hex_to_hsv(hex));
        self.field.set(canonical[1..].to_string());
        self.committed.set(canonical);
    }

    /// The last committed canonical hex.
    pub fn hex(&self) -> String {
        self.committed.get_untracked()
    }

    fn commit(&self, hsv: Hsv) {
        let canonical = hsv.to_hex();
        self.hsv.set(hsv);
        self.field.set(canonical[1..].to_string());
        if canonical != self.committed.get_untracked() {
            self.committed.set(canonical);
        }
    }

    /// Begin a drag on `target` at a surface-local position. The press
    /// itself commits, so a plain click jumps the thumb.
    pub fn begin_drag(&self, target: DragTarget, x: f64, y: f64) {
        self.drag.set(Some(target));
        let bounds = Self::bounds_of(target);
        self.commit(target.apply(self.hsv.get_untracked(), x, y, bounds));
    }

    /// Apply a pointer move to the active drag, if any.
    pub fn drag_move(&self, x: f64, y: f64) {
        if let Some(target) = self.drag.get_untracked() {
            let bounds = Self::bounds_of(target);
            self.commit(target.apply(self.hsv.get_untracked(), x, y, bounds));
        }
    }

    pub fn end_drag(&self) {
        if self.drag.get_untracked().is_some() {
            self.drag.set(None);
        }
    }

    /// Process a hex entry edit. Partial input is held as-is; a complete
    /// 3 or 6 digit value (with or without `#`) commits immediately.
    pub fn input(&self, raw: &str) {
        let digits = raw.strip_prefix('#').unwrap_or(raw).len();
        if digits == 6 || digits == 3 {
            let canonical = normalize_hex(raw);
            if canonical != self.committed.get_untracked() {
                self.hsv.set(hex_to_hsv(raw));
                self.committed.set(canonical);
            }
        }
    }

    fn bounds_of(target: DragTarget) -> SurfaceBounds {
        match target {
            DragTarget::Saturation => SQUARE,
            DragTarget::Hue => STRIP,
        }
    }
}

fn committed_color(state: &PickerState) -> Color {
    let (r, g, b) = hex_to_rgb(&state.committed.get());
    Color::rgb8(r, g, b)
}

fn tab_button(state: PickerState, tab: PickerTab, text: &'static str) -> impl IntoView {
    let selected = state.tab;
    label(move || text)
        .style(move |s| {
            let s = s
                .flex_grow(1.0)
                .padding_vert(10.0)
                .font_size(13.0)
                .justify_center()
                .items_center()
                .cursor(floem::style::CursorStyle::Pointer)
                .border_bottom(2.0);
            if selected.get() == tab {
                s.font_weight(Weight::MEDIUM)
                    .color(Color::rgb8(20, 20, 20))
                    .border_color(Color::rgb8(37, 99, 235))
            } else {
                s.color(Color::rgb8(120, 120, 120))
                    .border_color(Color::TRANSPARENT)
                    .hover(|s| s.color(Color::rgb8(70, 70, 70)))
            }
        })
        .on_click_stop(move |_| selected.set(tab))
}

#[derive(Clone, PartialEq)]
enum SquareKey {
    Solid(i32),
    Gradient(String),
}

/// The saturation/value square, or the blend preview on the gradient tab.
fn square_view(state: PickerState) -> impl IntoView {
    // Whole-degree hue bucket so saturation drags never re-rasterize the
    // square. Mirrors the prev-compare effect used for hex sync.
    let hue_bucket = create_rw_signal(0i32);
    let hsv = state.hsv;
    create_effect(move |prev: Option<i32>| {
        let bucket = hsv.get().h.round() as i32;
        if prev != Some(bucket) {
            hue_bucket.set(bucket);
        }
        bucket
    });

    let key_state = state.clone();
    let press_state = state.clone();
    let thumb_state = state.clone();

    let surface = dyn_container(
        move || match key_state.tab.get() {
            PickerTab::Solid => SquareKey::Solid(hue_bucket.get()),
            PickerTab::Gradient => SquareKey::Gradient(key_state.committed.get()),
        },
        move |key| {
            let bytes = match key {
                SquareKey::Solid(bucket) => gradient::saturation_square_png(
                    f64::from(bucket),
                    SQUARE.width as u32,
                    SQUARE.height as u32,
                ),
                SquareKey::Gradient(hex) => gradient::blend_to_white_png(
                    &hex,
                    SQUARE.width as u32,
                    SQUARE.height as u32,
                ),
            };
            img(move || bytes.clone())
                .style(|s| s.width(SQUARE.width).height(SQUARE.height))
                .into_any()
        },
    )
    .style(|s| {
        s.width(SQUARE.width)
            .height(SQUARE.height)
            .border_radius(8.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(EventListener::PointerDown, move |e| {
        if let Event::PointerDown(pe) = e {
            if press_state.tab.get_untracked() == PickerTab::Solid {
                press_state.begin_drag(DragTarget::Saturation, pe.pos.x, pe.pos.y);
            }
        }
    });

    // Thumb, hidden on the gradient tab. It sits above the surface, so it
    // forwards presses with its own offset added back in.
    let thumb = empty()
        .style(move |s| {
            let st = thumb_state.clone();
            let hsv = st.hsv.get();
            let s = s
                .position(floem::style::Position::Absolute)
                .width(THUMB_R * 2.0)
                .height(THUMB_R * 2.0)
                .border_radius(THUMB_R)
                .border(2.0)
                .border_color(Color::WHITE)
                .background(committed_color(&st))
                .box_shadow_blur(2.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 60))
                .inset_left(hsv.s / 100.0 * SQUARE.width - THUMB_R)
                .inset_top((100.0 - hsv.v) / 100.0 * SQUARE.height - THUMB_R);
            if st.tab.get() == PickerTab::Solid {
                s
            } else {
                s.display(floem::style::Display::None)
            }
        })
        .on_event_stop(EventListener::PointerDown, {
            let state = state.clone();
            move |e| {
                if let Event::PointerDown(pe) = e {
                    let hsv = state.hsv.get_untracked();
                    let ox = hsv.s / 100.0 * SQUARE.width - THUMB_R;
                    let oy = (100.0 - hsv.v) / 100.0 * SQUARE.height - THUMB_R;
                    state.begin_drag(DragTarget::Saturation, pe.pos.x + ox, pe.pos.y + oy);
                }
            }
        });

    container((surface, thumb))
        .style(|s| {
            s.position(floem::style::Position::Relative)
                .width(SQUARE.width)
                .height(SQUARE.height)
        })
}

/// The hue strip with its thumb. The strip background never changes, so it
/// is rasterized once.
fn strip_view(state: PickerState) -> impl IntoView {
    let strip_png = gradient::hue_strip_png(STRIP.width as u32, STRIP.height as u32);

    let press_state = state.clone();
    let thumb_state = state.clone();

    let strip = img(move || strip_png.clone())
        .style(|s| {
            s.width(STRIP.width)
                .height(STRIP.height)
                .border_radius(STRIP.height / 2.0)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(EventListener::PointerDown, move |e| {
            if let Event::PointerDown(pe) = e {
                press_state.begin_drag(DragTarget::Hue, pe.pos.x, pe.pos.y);
            }
        });

    let thumb = empty()
        .style(move |s| {
            let hsv = thumb_state.hsv.get();
            let (r, g, b) = crate::color::hsv_to_rgb(hsv.h, 100.0, 100.0);
            s.position(floem::style::Position::Absolute)
                .width(HUE_THUMB_R * 2.0)
                .height(HUE_THUMB_R * 2.0)
                .border_radius(HUE_THUMB_R)
                .border(3.0)
                .border_color(Color::WHITE)
                .background(Color::rgb8(r, g, b))
                .box_shadow_blur(2.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 60))
                .inset_left(hsv.h / 360.0 * STRIP.width - HUE_THUMB_R)
                .inset_top(STRIP.height / 2.0 - HUE_THUMB_R)
        })
        .on_event_stop(EventListener::PointerDown, {
            let state = state.clone();
            move |e| {
                if let Event::PointerDown(pe) = e {
                    let hsv = state.hsv.get_untracked();
                    let ox = hsv.h / 360.0 * STRIP.width - HUE_THUMB_R;
                    state.begin_drag(DragTarget::Hue, pe.pos.x + ox, pe.pos.y);
                }
            }
        });

    container((strip, thumb))
        .style(|s| {
            s.position(floem::style::Position::Relative)
                .width(STRIP.width)
                .height(STRIP.height)
        })
}

/// Surface origins inside the drag overlay, which spans the surfaces stack.
/// These must track the stack layout: square on top, strip below one gap.
fn surface_origin(target: DragTarget) -> (f64, f64) {
    match target {
        DragTarget::Saturation => (0.0, 0.0),
        DragTarget::Hue => (0.0, SQUARE.height + ROW_GAP),
    }
}

/// Both surfaces plus a transparent overlay that captures moves while a
/// drag is active, so drags keep tracking outside the surface that started
/// them.
fn surfaces(state: PickerState) -> impl IntoView {
    let overlay_state = state.clone();
    let up_state = state.clone();
    let drag = state.drag;

    let overlay = empty()
        .style(move |s| {
            if drag.get().is_some() {
                s.position(floem::style::Position::Absolute)
                    .inset_top(0.0)
                    .inset_left(0.0)
                    .inset_right(0.0)
                    .inset_bottom(0.0)
                    .z_index(50)
                    .cursor(floem::style::CursorStyle::Pointer)
            } else {
                s.display(floem::style::Display::None)
            }
        })
        .on_event(EventListener::PointerMove, move |e| {
            if let Event::PointerMove(pe) = e {
                if let Some(target) = overlay_state.drag.get_untracked() {
                    let (ox, oy) = surface_origin(target);
                    overlay_state.drag_move(pe.pos.x - ox, pe.pos.y - oy);
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
        .on_event_stop(EventListener::PointerUp, move |_| {
            up_state.end_drag();
        });

    container((
        v_stack((square_view(state.clone()), strip_view(state))).style(|s| s.gap(ROW_GAP)),
        overlay,
    ))
    .style(|s| s.position(floem::style::Position::Relative))
}

/// Hex entry row: swatch dot, `#` prefix, and the digits field.
fn hex_row(state: PickerState) -> impl IntoView {
    let field = state.field;
    let input_state = state.clone();
    let dot_state = state.clone();

    // Live commit while typing. Complete values pass through, partial
    // values stay in the field untouched.
    create_effect(move |prev: Option<String>| {
        let raw = field.get();
        if prev.as_ref() != Some(&raw) {
            input_state.input(&raw);
        }
        raw
    });

    h_stack((
        empty().style(move |s| {
            s.width(20.0)
                .height(20.0)
                .border_radius(10.0)
                .border(1.0)
                .border_color(Color::rgb8(220, 220, 220))
                .background(committed_color(&dot_state))
        }),
        label(|| "#").style(|s| s.font_size(13.0).color(Color::rgb8(150, 150, 150))),
        text_input(field).style(|s| {
            s.flex_grow(1.0)
                .min_width(0.0)
                .font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .border(0.0)
                .background(Color::TRANSPARENT)
        }),
    ))
    .style(|s| {
        s.width(SQUARE.width)
            .items_center()
            .gap(10.0)
            .padding_horiz(12.0)
            .padding_vert(8.0)
            .border(1.0)
            .border_color(Color::rgb8(220, 220, 220))
            .border_radius(8.0)
    })
}

/// The full picker panel: tabs, surfaces, and the hex row.
pub fn solid_picker(state: PickerState) -> impl IntoView {
    v_stack((
        h_stack((
            tab_button(state.clone(), PickerTab::Solid, "Solid color"),
            tab_button(state.clone(), PickerTab::Gradient, "Gradient"),
        ))
        .style(|s| s.width(SQUARE.width)),
        surfaces(state.clone()),
        hex_row(state),
    ))
    .style(|s| s.gap(ROW_GAP).width(SQUARE.width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seed_resets_everything() {
        let state = PickerState::new();
        state.drag.set(Some(DragTarget::Hue));
        state.set_hex("#2563eb");

        assert_eq!(state.hex(), "#2563EB");
        assert_eq!(state.field.get_untracked(), "2563EB");
        assert_eq!(state.drag.get_untracked(), None);
        let hsv = state.hsv.get_untracked();
        assert!(hsv.h > 200.0 && hsv.h < 240.0);
    }

    #[test]
    fn test_press_jumps_and_commits() {
        let state = PickerState::new();
        state.set_hex("#FF0000");

        state.begin_drag(DragTarget::Saturation, SQUARE.width, 0.0);
        assert_eq!(state.drag.get_untracked(), Some(DragTarget::Saturation));
        assert_eq!(state.hex(), "#FF0000");

        state.begin_drag(DragTarget::Saturation, 0.0, 0.0);
        assert_eq!(state.hex(), "#FFFFFF");
    }

    #[test]
    fn test_drag_clamps_and_ends() {
        let state = PickerState::new();
        state.set_hex("#FF0000");

        state.begin_drag(DragTarget::Hue, 0.0, 6.0);
        state.drag_move(-5000.0, 6.0);
        assert_eq!(state.hsv.get_untracked().h, 0.0);

        state.drag_move(1e7, 6.0);
        assert_eq!(state.hsv.get_untracked().h, 360.0);
        assert_eq!(state.hex(), "#FF0000");

        state.end_drag();
        assert_eq!(state.drag.get_untracked(), None);

        // Moves after release are ignored.
        state.drag_move(STRIP.width / 2.0, 6.0);
        assert_eq!(state.hsv.get_untracked().h, 360.0);
    }

    #[test]
    fn test_one_drag_target_at_a_time() {
        let state = PickerState::new();
        state.set_hex("#00FF00");

        state.begin_drag(DragTarget::Saturation, 10.0, 10.0);
        let s_before = state.hsv.get_untracked().s;
        state.begin_drag(DragTarget::Hue, STRIP.width / 2.0, 6.0);

        assert_eq!(state.drag.get_untracked(), Some(DragTarget::Hue));
        // The hue drag left saturation where the first drag put it.
        assert_eq!(state.hsv.get_untracked().s, s_before);
    }

    #[test]
    fn test_partial_hex_is_held() {
        let state = PickerState::new();
        state.set_hex("#DC2626");

        state.input("25");
        assert_eq!(state.hex(), "#DC2626");
        state.input("2563E");
        assert_eq!(state.hex(), "#DC2626");

        state.input("2563EB");
        assert_eq!(state.hex(), "#2563EB");
    }

    #[test]
    fn test_hex_commit_forms() {
        let state = PickerState::new();

        state.input("#DC2626");
        assert_eq!(state.hex(), "#DC2626");

        state.input("abc");
        assert_eq!(state.hex(), "#AABBCC");

        state.input("#fff");
        assert_eq!(state.hex(), "#FFFFFF");
    }

    #[test]
    fn test_drag_commit_updates_field() {
        let state = PickerState::new();
        state.set_hex("#FF0000");

        state.begin_drag(DragTarget::Saturation, 0.0, 0.0);
        assert_eq!(state.field.get_untracked(), "FFFFFF");
    }
}
