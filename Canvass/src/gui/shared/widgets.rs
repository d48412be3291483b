//! Reusable view builders and style helpers shared by every screen

use floem::prelude::*;
use floem::style::{CursorStyle, Style};
use floem::text::Weight;
use floem::views::text_editor;

use super::theme::colors;

/// Card container style - white surface, hairline border, rounded
pub fn card_style(s: Style) -> Style {
    let c = colors();
    s.background(c.bg_base)
        .border(1.0)
        .border_color(c.border)
        .border_radius(12.0)
        .padding(20.0)
}

/// Input field style
pub fn input_style(s: Style) -> Style {
    let c = colors();
    s.width_full()
        .padding_horiz(12.0)
        .padding_vert(8.0)
        .font_size(13.0)
        .background(c.bg_surface)
        .color(c.text_primary)
        .border(1.0)
        .border_color(c.border)
        .border_radius(8.0)
}

/// Solid high-contrast action button (the black/white primary of the app)
pub fn primary_button(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    button(label(move || text.clone())).style(|s| {
        let c = colors();
        s.padding_horiz(16.0)
            .padding_vert(8.0)
            .font_size(13.0)
            .font_weight(Weight::MEDIUM)
            .background(c.text_primary)
            .color(c.text_inverse)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.background(c.text_secondary))
    })
}

/// Bordered neutral button
pub fn secondary_button(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    button(label(move || text.clone())).style(|s| {
        let c = colors();
        s.padding_horiz(16.0)
            .padding_vert(8.0)
            .font_size(13.0)
            .font_weight(Weight::MEDIUM)
            .background(c.bg_base)
            .color(c.text_primary)
            .border(1.0)
            .border_color(c.border_strong)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.background(c.bg_surface))
    })
}

/// Destructive confirm button
pub fn danger_button(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    button(label(move || text.clone())).style(|s| {
        s.padding_horiz(16.0)
            .padding_vert(8.0)
            .font_size(13.0)
            .font_weight(Weight::MEDIUM)
            .background(Color::rgb8(220, 38, 38))
            .color(Color::WHITE)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(185, 28, 28)))
    })
}

/// Borderless cancel/dismiss button
pub fn ghost_button(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    button(label(move || text.clone())).style(|s| {
        let c = colors();
        s.padding_horiz(16.0)
            .padding_vert(8.0)
            .font_size(13.0)
            .font_weight(Weight::MEDIUM)
            .background(Color::TRANSPARENT)
            .color(c.text_secondary)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.background(c.bg_hover).color(c.text_primary))
    })
}

/// Screen heading pair: title over a muted one-liner
pub fn screen_header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| {
            s.font_size(24.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
        }),
        label(move || subtitle)
            .style(|s| s.font_size(13.0).margin_top(4.0).color(colors().text_secondary)),
    ))
}

/// Field label above an input
pub fn field_label(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(13.0)
            .font_weight(Weight::MEDIUM)
            .margin_bottom(6.0)
            .color(colors().text_primary)
    })
}

/// Multi-line text area bound to a signal.
///
/// Seeded from the signal's current value at build time; edits sync back
/// by watching the document revision. Build it after the backing record
/// has loaded so the seed is the loaded text.
pub fn text_area(text: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    text_editor(text.get_untracked())
        .editor_style(|s| s.hide_gutter(true))
        .placeholder(placeholder)
        .with_editor(move |editor| {
            let doc = editor.doc();
            let cache_rev = doc.cache_rev();
            let editor_for_sync = editor.clone();
            floem::reactive::create_effect(move |prev_rev: Option<u64>| {
                let current_rev = cache_rev.get();
                // Only sync once an actual edit has occurred
                if prev_rev.is_some() && prev_rev != Some(current_rev) {
                    let new_text = editor_for_sync.doc().text().to_string();
                    text.set(new_text);
                }
                current_rev
            });
        })
        .style(|s| {
            let c = colors();
            s.width_full()
                .min_height(96.0)
                .font_size(13.0)
                .background(c.bg_surface)
                .color(c.text_primary)
                .border(1.0)
                .border_color(c.border)
                .border_radius(8.0)
                .padding(4.0)
        })
}

/// Small status badge with themed tint
pub fn status_badge(text: impl Fn() -> String + 'static, tint: BadgeTint) -> impl IntoView {
    label(text).style(move |s| {
        let c = colors();
        let (bg, fg) = match tint {
            BadgeTint::Success => (c.success_bg, c.success),
            BadgeTint::Info => (c.bg_elevated, c.accent),
            BadgeTint::Warning => (c.warning_bg, c.warning),
            BadgeTint::Neutral => (c.bg_elevated, c.text_secondary),
            BadgeTint::Error => (c.error_bg, c.error),
        };
        s.padding_horiz(8.0)
            .padding_vert(2.0)
            .font_size(10.0)
            .font_weight(Weight::BOLD)
            .border_radius(4.0)
            .background(bg)
            .color(fg)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTint {
    Success,
    Info,
    Warning,
    Neutral,
    Error,
}

/// Dashed-border add tile used by the brand kit grids
pub fn dashed_tile_style(s: Style) -> Style {
    let c = colors();
    s.background(c.bg_surface)
        .border(2.0)
        .border_color(c.border)
        .border_radius(12.0)
        .items_center()
        .justify_center()
        .cursor(CursorStyle::Pointer)
        .hover(move |s| s.background(c.bg_elevated).border_color(c.border_strong))
}

/// Inner sidebar (Profile, Drafts, Projects) container style
pub fn inner_sidebar_style(s: Style) -> Style {
    let c = colors();
    s.width(240.0)
        .height_full()
        .flex_col()
        .background(c.bg_base)
        .border_right(1.0)
        .border_color(c.border)
}

/// One entry in an inner sidebar; active entries invert to high contrast
pub fn inner_nav_button(
    text: &'static str,
    is_active: impl Fn() -> bool + 'static,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    button(label(move || text))
        .style(move |s| {
            let c = colors();
            let s = s
                .width_full()
                .padding_horiz(12.0)
                .padding_vert(10.0)
                .font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .border_radius(8.0)
                .justify_start()
                .cursor(CursorStyle::Pointer);
            if is_active() {
                s.background(c.text_primary).color(c.text_inverse)
            } else {
                s.background(Color::TRANSPARENT)
                    .color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_elevated).color(c.text_primary))
            }
        })
        .action(move || on_click())
}
