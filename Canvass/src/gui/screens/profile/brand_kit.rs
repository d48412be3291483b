//! Brand Kit tab
//!
//! Logos, palette, typography, and photos over the working brand kit.
//! Asset tiles render in wrapped fixed-size grids with the add/upload
//! tile in first position. Palette and font rows are keyed by id and
//! read their values reactively so live edits repaint in place.

use std::time::Duration;

use floem::action::exec_after;
use floem::event::EventListener;
use floem::prelude::*;
use floem::style::{CursorStyle, Display, FlexDirection, FlexWrap, Style};
use floem::text::Weight;
use hustings::prelude::*;
use swatch::hex_to_rgb;

use crate::gui::shared::{colors, dashed_tile_style};
use crate::gui::state::{AppState, BrandSection, DeleteTarget, ProfileState};
use crate::gui::utils::clipboard::copy_to_clipboard;

use super::{export_asset, save_button, tab_header, upload_logos, upload_photos};

/// Square logo tile edge; photos use the same width at a 4:3 ratio.
const ASSET_TILE: f64 = 260.0;
const PHOTO_TILE_HEIGHT: f64 = 195.0;
const COLOR_TILE: f64 = 184.0;

/// Families offered by the font picker, pre-sorted for the menu.
const FONT_FAMILIES: [&str; 36] = [
    "Anton",
    "Arial",
    "Arvo",
    "Barlow",
    "Bitter",
    "Cabin",
    "Crimson Text",
    "Fjalla One",
    "Gill Sans",
    "Helvetica",
    "Inconsolata",
    "Inter",
    "Josefin Sans",
    "Kanit",
    "Lato",
    "Libre Franklin",
    "Lora",
    "Manrope",
    "Merriweather",
    "Montserrat",
    "Mukta",
    "Nanum Gothic",
    "Nunito",
    "Open Sans",
    "Oswald",
    "PT Sans",
    "PT Serif",
    "Playfair Display",
    "Poppins",
    "Quicksand",
    "Raleway",
    "Roboto",
    "Rubik",
    "Times New Roman",
    "Titillium Web",
    "Work Sans",
];

/// Slot names offered by the heading type menu.
const HEADING_TYPES: [&str; 8] = [
    "Title",
    "Subtitle",
    "Heading",
    "Subheading",
    "Section header",
    "Body",
    "Quote",
    "Caption",
];

const FONT_SIZES: [u32; 12] = [12, 14, 16, 20, 24, 28, 32, 36, 42, 48, 56, 64];

/// Which dropdown of the font editor is open. At most one at a time,
/// shared across all editors since only one slot edits at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontMenu {
    Family,
    Heading,
    Size,
}

// ==================== Reactive reads ====================

/// Current palette entry by id. Rows capture only the id; values are
/// looked up on every repaint so edits from the picker show live.
fn read_color(session: RwSignal<ProfileSession>, id: u32) -> ColorItem {
    session
        .with(|s| {
            s.working()
                .brand_kit
                .colors()
                .into_iter()
                .find(|c| c.id == id)
        })
        .unwrap_or_else(|| ColorItem {
            id,
            name: String::new(),
            hex: "#000000".to_string(),
        })
}

/// Current typography slot by id, with a neutral fallback for a row
/// torn down mid-delete.
fn read_font(session: RwSignal<ProfileSession>, id: &str) -> FontStyle {
    session
        .with(|s| {
            s.working()
                .brand_kit
                .fonts()
                .into_iter()
                .find(|f| f.id == id)
        })
        .unwrap_or_else(|| FontStyle {
            id: id.to_string(),
            name: String::new(),
            font_family: "Inter".to_string(),
            size: 16,
            weight: "Regular".to_string(),
            style: "normal".to_string(),
        })
}

fn update_font_with(
    session: RwSignal<ProfileSession>,
    id: &str,
    change: impl FnOnce(&mut FontStyle),
) {
    let found = session.with_untracked(|s| {
        s.working()
            .brand_kit
            .fonts()
            .into_iter()
            .find(|f| f.id == id)
    });
    let Some(mut font) = found else {
        return;
    };
    change(&mut font);
    session.update(|s| s.working_mut().brand_kit.update_font(&font));
}

// ==================== Shared tile pieces ====================

/// Small translucent control pill pinned to a tile corner.
fn tile_chip(glyph: &'static str, danger: bool) -> impl IntoView {
    label(move || glyph).style(move |s| {
        let c = colors();
        let hover_color = if danger { c.error } else { c.accent };
        s.padding_horiz(7.0)
            .padding_vert(3.0)
            .font_size(12.0)
            .border_radius(6.0)
            .background(Color::rgba8(255, 255, 255, 230))
            .color(Color::rgb8(107, 114, 128))
            .box_shadow_blur(4.0)
            .box_shadow_color(Color::rgba8(0, 0, 0, 40))
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.color(hover_color))
    })
}

fn asset_name(asset: &BrandAsset, fallback: &str) -> String {
    asset
        .name
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

// ==================== Section tabs ====================

fn section_tab(active: RwSignal<BrandSection>, section: BrandSection) -> impl IntoView {
    label(move || section.label())
        .style(move |s| {
            let c = colors();
            let s = s
                .padding_bottom(12.0)
                .font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .border_bottom(2.0)
                .cursor(CursorStyle::Pointer);
            if active.get() == section {
                s.border_color(c.text_primary).color(c.text_primary)
            } else {
                s.border_color(Color::TRANSPARENT)
                    .color(c.text_secondary)
                    .hover(move |s| s.color(c.text_primary))
            }
        })
        .on_click_stop(move |_| active.set(section))
}

fn section_tabs(active: RwSignal<BrandSection>) -> impl IntoView {
    h_stack_from_iter(
        BrandSection::all()
            .into_iter()
            .map(move |section| section_tab(active, section)),
    )
    .style(|s| {
        s.width_full()
            .gap(32.0)
            .margin_top(24.0)
            .border_bottom(1.0)
            .border_color(colors().border)
    })
}

// ==================== Logos ====================

fn upload_logo_tile(state: ProfileState) -> impl IntoView {
    v_stack((
        label(|| "⬆").style(|s| s.font_size(24.0).color(colors().text_muted)),
        label(|| "Upload Logo").style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .margin_top(8.0)
                .color(colors().text_secondary)
        }),
    ))
    .style(|s| dashed_tile_style(s).width(ASSET_TILE).height(ASSET_TILE))
    .on_click_stop(move |_| upload_logos(state.clone()))
}

/// Placeholder wordmark shown on the built-in logo slots.
fn wordmark(on_dark: bool) -> impl IntoView {
    h_stack((
        label(|| "JONES").style(move |s| {
            let color = if on_dark {
                Color::WHITE
            } else {
                colors().text_primary
            };
            s.font_size(24.0)
                .font_weight(Weight::BOLD)
                .font_family("Georgia".to_string())
                .color(color)
        }),
        label(|| "2024").style(move |s| {
            let color = if on_dark {
                Color::rgb8(96, 165, 250)
            } else {
                Color::rgb8(37, 99, 235)
            };
            s.font_size(24.0)
                .font_weight(Weight::BOLD)
                .font_family("Georgia".to_string())
                .color(color)
        }),
    ))
}

fn logo_tile(state: ProfileState, app: AppState, asset: BrandAsset) -> impl IntoView {
    let on_dark = asset.kind == AssetKind::DefaultDark;
    let display_name = asset_name(&asset, "Logo");

    let content = match asset.kind {
        AssetKind::DefaultLight => wordmark(false).into_any(),
        AssetKind::DefaultDark => wordmark(true).into_any(),
        _ => {
            let name = display_name.clone();
            label(move || name.clone())
                .style(|s| {
                    s.padding(16.0)
                        .font_size(13.0)
                        .font_weight(Weight::MEDIUM)
                        .color(colors().text_secondary)
                })
                .into_any()
        }
    };

    let export_control = if asset.kind == AssetKind::Upload {
        let export_state = state.clone();
        let file_name = display_name.clone();
        let path = asset.id.clone();
        tile_chip("↓", false)
            .on_click_stop(move |_| export_asset(export_state.clone(), &file_name, path.clone()))
            .into_any()
    } else {
        empty().into_any()
    };

    let delete_label = display_name;
    let delete_id = asset.id;

    h_stack((
        container(content).style(|s| s.size_full().items_center().justify_center()),
        h_stack((
            export_control,
            tile_chip("×", true).on_click_stop(move |_| {
                app.request_delete(
                    delete_label.clone(),
                    DeleteTarget::Logo {
                        id: delete_id.clone(),
                    },
                );
            }),
        ))
        .style(|s| s.absolute().inset_top(8.0).inset_right(8.0).gap(4.0)),
    ))
    .style(move |s| {
        let c = colors();
        let bg = if on_dark { Color::BLACK } else { c.bg_base };
        s.width(ASSET_TILE)
            .height(ASSET_TILE)
            .background(bg)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
    })
}

fn logos_section(state: ProfileState, app: AppState) -> impl IntoView {
    let session = state.session;
    let tile_state = state;

    dyn_stack(
        move || {
            let mut cells = vec![None];
            cells.extend(
                session
                    .with(|s| s.working().brand_kit.logos())
                    .into_iter()
                    .map(Some),
            );
            cells
        },
        |cell: &Option<BrandAsset>| cell.as_ref().map(|asset| asset.id.clone()),
        move |cell| match cell {
            None => upload_logo_tile(tile_state.clone()).into_any(),
            Some(asset) => logo_tile(tile_state.clone(), app.clone(), asset).into_any(),
        },
    )
    .style(|s| {
        s.width_full()
            .gap(24.0)
            .flex_wrap(FlexWrap::Wrap)
            .flex_direction(FlexDirection::Row)
    })
}

// ==================== Colors ====================

fn add_color_tile(state: ProfileState) -> impl IntoView {
    v_stack((
        container(label(|| "+").style(|s| s.font_size(24.0).color(colors().text_muted)))
            .style(|s| dashed_tile_style(s).width(COLOR_TILE).height(COLOR_TILE)),
        label(|| "Add Color").style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .margin_top(8.0)
                .color(colors().text_secondary)
        }),
    ))
    .style(|s| s.cursor(CursorStyle::Pointer))
    .on_click_stop(move |_| {
        state.session.update(|session| {
            session.open_new_color();
        });
    })
}

fn color_cell(state: ProfileState, app: AppState, id: u32) -> impl IntoView {
    let session = state.session;
    let copied = state.copied_color;

    let copied_overlay = container(
        label(|| "✓").style(|s| s.font_size(24.0).color(Color::WHITE)),
    )
    .style(move |s| {
        let s = s
            .absolute()
            .size_full()
            .items_center()
            .justify_center()
            .background(Color::rgba8(0, 0, 0, 60))
            .border_radius(12.0);
        if copied.get() == Some(id) {
            s
        } else {
            s.display(Display::None)
        }
    });

    let swatch = h_stack((
        copied_overlay,
        container(tile_chip("×", true).on_click_stop(move |_| {
            let name = read_color(session, id).name;
            app.request_delete(name, DeleteTarget::PaletteColor { id });
        }))
        .style(|s| s.absolute().inset_top(8.0).inset_right(8.0)),
    ))
    .style(move |s| {
        let c = colors();
        let (r, g, b) = hex_to_rgb(&read_color(session, id).hex);
        s.width(COLOR_TILE)
            .height(COLOR_TILE)
            .background(Color::rgb8(r, g, b))
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.border_color(c.border_strong))
    })
    .on_click_stop(move |_| {
        let hex = read_color(session, id).hex;
        copy_to_clipboard(&hex);
        copied.set(Some(id));
        exec_after(Duration::from_secs(2), move |_| {
            if copied.get_untracked() == Some(id) {
                copied.set(None);
            }
        });
    });

    let name_block = v_stack((
        label(move || read_color(session, id).name).style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
        }),
        label(move || read_color(session, id).hex.to_uppercase())
            .style(|s| s.font_size(11.0).color(colors().text_secondary)),
    ))
    .style(move |s| {
        let c = colors();
        s.margin_top(8.0)
            .padding_horiz(8.0)
            .padding_vert(4.0)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.background(c.bg_surface))
    })
    .on_click_stop(move |_| {
        session.update(|current| {
            current.open_color(id);
        });
    });

    v_stack((swatch, name_block)).style(|s| s.width(COLOR_TILE))
}

fn colors_section(state: ProfileState, app: AppState) -> impl IntoView {
    let session = state.session;
    let cell_state = state;

    v_stack((
        label(|| "Primary Palette").style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
        }),
        dyn_stack(
            move || {
                let mut cells = vec![None];
                cells.extend(
                    session
                        .with(|s| s.working().brand_kit.colors())
                        .into_iter()
                        .map(|c| Some(c.id)),
                );
                cells
            },
            |cell: &Option<u32>| *cell,
            move |cell| match cell {
                None => add_color_tile(cell_state.clone()).into_any(),
                Some(id) => color_cell(cell_state.clone(), app.clone(), id).into_any(),
            },
        )
        .style(|s| {
            s.width_full()
                .gap(24.0)
                .margin_top(16.0)
                .flex_wrap(FlexWrap::Wrap)
                .flex_direction(FlexDirection::Row)
        }),
    ))
    .style(|s| s.width_full())
}

// ==================== Fonts ====================

fn editor_caption(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(11.0)
            .font_weight(Weight::SEMIBOLD)
            .margin_bottom(4.0)
            .color(colors().text_primary)
    })
}

fn select_style(s: Style) -> Style {
    let c = colors();
    s.width_full()
        .items_center()
        .padding_horiz(12.0)
        .padding_vert(6.0)
        .font_size(13.0)
        .background(c.bg_base)
        .border(1.0)
        .border_color(c.border)
        .border_radius(8.0)
        .cursor(CursorStyle::Pointer)
        .hover(move |s| s.border_color(c.border_strong))
}

fn menu_card_style(s: Style, open: bool) -> Style {
    let c = colors();
    let s = s
        .absolute()
        .inset_top(34.0)
        .inset_left(0.0)
        .inset_right(0.0)
        .flex_col()
        .background(c.bg_base)
        .border(1.0)
        .border_color(c.border)
        .border_radius(8.0)
        .box_shadow_blur(12.0)
        .box_shadow_color(Color::rgba8(0, 0, 0, 40))
        .z_index(50);
    if open {
        s
    } else {
        s.display(Display::None)
    }
}

fn menu_item_style(s: Style, selected: bool) -> Style {
    let c = colors();
    let s = s
        .width_full()
        .padding_horiz(12.0)
        .padding_vert(8.0)
        .font_size(12.0)
        .cursor(CursorStyle::Pointer);
    if selected {
        s.background(c.bg_elevated)
            .color(c.accent)
            .font_weight(Weight::MEDIUM)
    } else {
        s.color(c.text_primary)
            .hover(move |s| s.background(c.bg_surface))
    }
}

/// Dropdown toggle: current value plus a caret. Press handling stops
/// at the toggle so the section-level close listener never sees it.
fn select_toggle(
    current: impl Fn() -> String + 'static,
    menu: FontMenu,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    h_stack((
        label(current).style(|s| {
            s.flex_grow(1.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
                .text_ellipsis()
        }),
        label(|| "▾").style(|s| s.font_size(10.0).color(colors().text_muted)),
    ))
    .style(select_style)
    .on_event_stop(EventListener::PointerDown, move |_| {
        let next = if font_menu.get_untracked() == Some(menu) {
            None
        } else {
            Some(menu)
        };
        font_menu.set(next);
        font_search.set(String::new());
    })
    .on_click_stop(|_| {})
}

fn family_item(
    session: RwSignal<ProfileSession>,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
    family: &'static str,
) -> impl IntoView {
    let style_id = id.clone();
    let click_id = id;
    label(move || family)
        .style(move |s| {
            let selected = read_font(session, &style_id).font_family == family;
            menu_item_style(s, selected).font_family(family.to_string())
        })
        .on_click_stop(move |_| {
            update_font_with(session, &click_id, |font| {
                font.font_family = family.to_string();
            });
            font_menu.set(None);
            font_search.set(String::new());
        })
}

/// Searchable family menu anchored under the Font toggle.
fn family_menu(
    session: RwSignal<ProfileSession>,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let item_id = id;

    v_stack((
        container(
            text_input(font_search)
                .placeholder("Search fonts...")
                .style(|s| {
                    let c = colors();
                    s.width_full()
                        .padding_horiz(8.0)
                        .padding_vert(4.0)
                        .font_size(12.0)
                        .background(c.bg_surface)
                        .border(1.0)
                        .border_color(c.border)
                        .border_radius(6.0)
                        .color(c.text_primary)
                }),
        )
        .style(|s| {
            s.width_full()
                .padding(8.0)
                .border_bottom(1.0)
                .border_color(colors().border)
        }),
        scroll(
            v_stack((
                dyn_stack(
                    move || {
                        let query = font_search.get().to_lowercase();
                        FONT_FAMILIES
                            .iter()
                            .copied()
                            .filter(|family| family.to_lowercase().contains(&query))
                            .collect::<Vec<_>>()
                    },
                    |family| *family,
                    move |family| {
                        family_item(session, item_id.clone(), font_menu, font_search, family)
                    },
                )
                .style(|s| s.width_full().flex_col()),
                label(|| "No fonts found").style(move |s| {
                    let query = font_search.get().to_lowercase();
                    let any = FONT_FAMILIES
                        .iter()
                        .any(|family| family.to_lowercase().contains(&query));
                    let s = s
                        .width_full()
                        .padding(12.0)
                        .justify_center()
                        .font_size(11.0)
                        .color(colors().text_muted);
                    if any { s.display(Display::None) } else { s }
                }),
            ))
            .style(|s| s.width_full().flex_col()),
        )
        .style(|s| s.width_full().max_height(200.0)),
    ))
    .style(move |s| menu_card_style(s, font_menu.get() == Some(FontMenu::Family)))
    .on_event_stop(EventListener::PointerDown, |_| {})
}

fn family_field(
    session: RwSignal<ProfileSession>,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let toggle_id = id.clone();
    let menu_id = id;

    v_stack((
        editor_caption("Font"),
        h_stack((
            select_toggle(
                move || read_font(session, &toggle_id).font_family,
                FontMenu::Family,
                font_menu,
                font_search,
            ),
            family_menu(session, menu_id, font_menu, font_search),
        ))
        .style(|s| s.width_full()),
    ))
    .style(|s| s.flex_grow(1.0).flex_basis(0.0))
}

fn heading_field(
    session: RwSignal<ProfileSession>,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let toggle_id = id.clone();
    let menu_id = id;

    let menu = v_stack_from_iter(HEADING_TYPES.iter().copied().map(|heading| {
        let style_id = menu_id.clone();
        let click_id = menu_id.clone();
        label(move || heading)
            .style(move |s| {
                let selected = read_font(session, &style_id).name == heading;
                menu_item_style(s, selected)
            })
            .on_click_stop(move |_| {
                update_font_with(session, &click_id, |font| {
                    font.name = heading.to_string();
                });
                font_menu.set(None);
            })
    }))
    .style(move |s| menu_card_style(s, font_menu.get() == Some(FontMenu::Heading)))
    .on_event_stop(EventListener::PointerDown, |_| {});

    v_stack((
        editor_caption("Heading type"),
        h_stack((
            select_toggle(
                move || read_font(session, &toggle_id).name,
                FontMenu::Heading,
                font_menu,
                font_search,
            ),
            menu,
        ))
        .style(|s| s.width_full()),
    ))
    .style(|s| s.flex_grow(1.0).flex_basis(0.0))
}

fn size_field(
    session: RwSignal<ProfileSession>,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let toggle_id = id.clone();
    let menu_id = id;

    let menu = scroll(
        v_stack_from_iter(FONT_SIZES.iter().copied().map(|size| {
            let style_id = menu_id.clone();
            let click_id = menu_id.clone();
            label(move || size.to_string())
                .style(move |s| {
                    let selected = read_font(session, &style_id).size == size;
                    menu_item_style(s, selected)
                })
                .on_click_stop(move |_| {
                    update_font_with(session, &click_id, |font| font.size = size);
                    font_menu.set(None);
                })
        }))
        .style(|s| s.width_full().flex_col()),
    )
    .style(move |s| menu_card_style(s, font_menu.get() == Some(FontMenu::Size)).max_height(200.0))
    .on_event_stop(EventListener::PointerDown, |_| {});

    v_stack((
        editor_caption("Size"),
        h_stack((
            select_toggle(
                move || read_font(session, &toggle_id).size.to_string(),
                FontMenu::Size,
                font_menu,
                font_search,
            ),
            menu,
        ))
        .style(|s| s.width_full()),
    ))
    .style(|s| s.width(96.0))
}

fn style_toggle_style(s: Style, active: bool) -> Style {
    let c = colors();
    let s = s
        .width(36.0)
        .height(36.0)
        .items_center()
        .justify_center()
        .font_size(14.0)
        .border(1.0)
        .border_radius(8.0)
        .cursor(CursorStyle::Pointer);
    if active {
        s.background(c.bg_elevated)
            .border_color(c.accent)
            .color(c.accent)
    } else {
        s.border_color(c.border)
            .color(c.text_secondary)
            .hover(move |s| s.background(c.bg_surface))
    }
}

fn style_toggles(session: RwSignal<ProfileSession>, id: String) -> impl IntoView {
    let bold_style_id = id.clone();
    let bold_click_id = id.clone();
    let italic_style_id = id.clone();
    let italic_click_id = id;

    h_stack((
        label(|| "B")
            .style(move |s| {
                let active = read_font(session, &bold_style_id).weight == "Bold";
                style_toggle_style(s, active).font_weight(Weight::BOLD)
            })
            .on_click_stop(move |_| {
                update_font_with(session, &bold_click_id, |font| {
                    font.weight = if font.weight == "Bold" {
                        "Regular"
                    } else {
                        "Bold"
                    }
                    .to_string();
                });
            }),
        label(|| "I")
            .style(move |s| {
                let active = read_font(session, &italic_style_id).style == "italic";
                style_toggle_style(s, active).font_style(floem::text::Style::Italic)
            })
            .on_click_stop(move |_| {
                update_font_with(session, &italic_click_id, |font| {
                    font.style = if font.style == "italic" {
                        "normal"
                    } else {
                        "italic"
                    }
                    .to_string();
                });
            }),
    ))
    .style(|s| s.gap(4.0))
}

/// Inline editor panel for one typography slot. Edits apply to the
/// working kit immediately; the check and cross both just collapse.
fn font_editor(
    state: ProfileState,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let session = state.session;
    let editing = state.editing_font_id;
    let preview_id = id.clone();
    let preview_style_id = id.clone();

    let controls = h_stack((
        family_field(session, id.clone(), font_menu, font_search),
        heading_field(session, id.clone(), font_menu, font_search),
        size_field(session, id.clone(), font_menu, font_search),
        container(style_toggles(session, id)).style(|s| s.items_end().padding_bottom(1.0)),
    ))
    .style(|s| s.width_full().gap(12.0).items_end());

    let preview = h_stack((
        label(move || read_font(session, &preview_id).name).style(move |s| {
            let font = read_font(session, &preview_style_id);
            let weight = if font.weight == "Bold" {
                Weight::BOLD
            } else {
                Weight::NORMAL
            };
            let font_style = if font.style == "italic" {
                floem::text::Style::Italic
            } else {
                floem::text::Style::Normal
            };
            s.font_size(24.0)
                .font_family(font.font_family)
                .font_weight(weight)
                .font_style(font_style)
                .color(colors().text_primary)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        label(|| "✓")
            .style(|s| {
                let c = colors();
                s.padding(6.0)
                    .border_radius(999.0)
                    .font_size(14.0)
                    .color(c.text_muted)
                    .cursor(CursorStyle::Pointer)
                    .hover(move |s| s.background(c.bg_surface).color(c.success))
            })
            .on_click_stop(move |_| editing.set(None)),
        label(|| "×")
            .style(|s| {
                let c = colors();
                s.padding(6.0)
                    .border_radius(999.0)
                    .font_size(14.0)
                    .color(c.text_muted)
                    .cursor(CursorStyle::Pointer)
                    .hover(move |s| s.background(c.bg_surface).color(c.text_primary))
            })
            .on_click_stop(move |_| editing.set(None)),
    ))
    .style(|s| {
        s.width_full()
            .items_center()
            .gap(8.0)
            .margin_top(16.0)
            .padding_top(12.0)
            .border_top(1.0)
            .border_color(colors().border)
    });

    v_stack((controls, preview)).style(|s| {
        let c = colors();
        s.width_full()
            .padding(16.0)
            .background(c.bg_base)
            .border(1.0)
            .border_color(c.accent)
            .border_radius(12.0)
    })
}

fn font_row(state: ProfileState, app: AppState, id: String) -> impl IntoView {
    let session = state.session;
    let editing = state.editing_font_id;
    let name_id = id.clone();
    let delete_id = id.clone();
    let open_id = id;

    h_stack((
        label(move || read_font(session, &name_id).name).style(|s| {
            s.font_size(16.0)
                .font_weight(Weight::BOLD)
                .color(colors().text_primary)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        label(|| "Delete")
            .style(|s| {
                let c = colors();
                s.font_size(12.0)
                    .padding_horiz(8.0)
                    .padding_vert(4.0)
                    .border_radius(6.0)
                    .color(c.error)
                    .cursor(CursorStyle::Pointer)
                    .hover(move |s| s.background(c.error_bg))
            })
            .on_click_stop(move |_| {
                let name = read_font(session, &delete_id).name;
                app.request_delete(
                    name,
                    DeleteTarget::Font {
                        id: delete_id.clone(),
                    },
                );
            }),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full()
            .height(72.0)
            .items_center()
            .padding_horiz(16.0)
            .background(c.bg_surface)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
            .cursor(CursorStyle::Pointer)
            .hover(move |s| s.border_color(c.border_strong))
    })
    .on_click_stop(move |_| editing.set(Some(open_id.clone())))
}

fn font_slot(
    state: ProfileState,
    app: AppState,
    id: String,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let editing = state.editing_font_id;
    let gate_id = id.clone();

    dyn_container(
        move || editing.with(|current| current.as_deref() == Some(gate_id.as_str())),
        move |is_editing| {
            if is_editing {
                font_editor(state.clone(), id.clone(), font_menu, font_search).into_any()
            } else {
                font_row(state.clone(), app.clone(), id.clone()).into_any()
            }
        },
    )
    .style(|s| s.width_full())
}

fn add_font_slot(state: &ProfileState, font_menu: RwSignal<Option<FontMenu>>) {
    let font = state.session.with_untracked(|s| {
        let kit = &s.working().brand_kit;
        FontStyle {
            id: kit.next_font_id(),
            name: "New Style".to_string(),
            font_family: "Inter".to_string(),
            size: 16,
            weight: "Regular".to_string(),
            style: "normal".to_string(),
        }
    });
    let new_id = font.id.clone();
    state
        .session
        .update(|s| s.working_mut().brand_kit.add_font(font));
    state.editing_font_id.set(Some(new_id));
    font_menu.set(None);
}

fn fonts_section(
    state: ProfileState,
    app: AppState,
    font_menu: RwSignal<Option<FontMenu>>,
    font_search: RwSignal<String>,
) -> impl IntoView {
    let session = state.session;
    let slot_state = state.clone();
    let add_state = state;

    v_stack((
        dyn_stack(
            move || {
                session.with(|s| {
                    s.working()
                        .brand_kit
                        .fonts()
                        .into_iter()
                        .map(|font| font.id)
                        .collect::<Vec<_>>()
                })
            },
            |id| id.clone(),
            move |id| font_slot(slot_state.clone(), app.clone(), id, font_menu, font_search),
        )
        .style(|s| s.width_full().flex_col().gap(12.0)),
        label(|| "Manage uploaded fonts")
            .style(|s| {
                let c = colors();
                s.font_size(12.0)
                    .font_weight(Weight::MEDIUM)
                    .margin_top(16.0)
                    .color(c.accent)
                    .cursor(CursorStyle::Pointer)
                    .hover(move |s| s.color(c.accent_hover))
            })
            .on_click_stop(move |_| add_font_slot(&add_state, font_menu)),
    ))
    .style(|s| s.width_full().items_start())
}

// ==================== Photos ====================

fn add_photo_tile(state: ProfileState) -> impl IntoView {
    v_stack((
        label(|| "+").style(|s| s.font_size(20.0).color(colors().text_muted)),
        label(|| "Add Photo").style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .margin_top(8.0)
                .color(colors().text_secondary)
        }),
    ))
    .style(|s| {
        dashed_tile_style(s)
            .width(ASSET_TILE)
            .height(PHOTO_TILE_HEIGHT)
    })
    .on_click_stop(move |_| upload_photos(state.clone()))
}

fn photo_tile(state: ProfileState, app: AppState, asset: BrandAsset) -> impl IntoView {
    let display_name = asset_name(&asset, "Photo");

    let content = if asset.kind == AssetKind::DefaultPhoto {
        label(|| "👤")
            .style(|s| s.font_size(32.0).color(colors().text_muted))
            .into_any()
    } else {
        let name = display_name.clone();
        label(move || name.clone())
            .style(|s| {
                s.padding(16.0)
                    .font_size(13.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_secondary)
            })
            .into_any()
    };

    let export_control = if asset.kind == AssetKind::Upload {
        let export_state = state.clone();
        let file_name = display_name.clone();
        let path = asset.id.clone();
        tile_chip("↓", false)
            .on_click_stop(move |_| export_asset(export_state.clone(), &file_name, path.clone()))
            .into_any()
    } else {
        empty().into_any()
    };

    let delete_label = display_name;
    let delete_id = asset.id;

    h_stack((
        container(content).style(|s| s.size_full().items_center().justify_center()),
        h_stack((
            export_control,
            tile_chip("×", true).on_click_stop(move |_| {
                app.request_delete(
                    delete_label.clone(),
                    DeleteTarget::Photo {
                        id: delete_id.clone(),
                    },
                );
            }),
        ))
        .style(|s| s.absolute().inset_top(8.0).inset_right(8.0).gap(4.0)),
    ))
    .style(move |s| {
        let c = colors();
        s.width(ASSET_TILE)
            .height(PHOTO_TILE_HEIGHT)
            .background(c.bg_elevated)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
    })
}

fn photos_section(state: ProfileState, app: AppState) -> impl IntoView {
    let session = state.session;
    let tile_state = state;

    dyn_stack(
        move || {
            let mut cells = vec![None];
            cells.extend(
                session
                    .with(|s| s.working().brand_kit.photos())
                    .into_iter()
                    .map(Some),
            );
            cells
        },
        |cell: &Option<BrandAsset>| cell.as_ref().map(|asset| asset.id.clone()),
        move |cell| match cell {
            None => add_photo_tile(tile_state.clone()).into_any(),
            Some(asset) => photo_tile(tile_state.clone(), app.clone(), asset).into_any(),
        },
    )
    .style(|s| {
        s.width_full()
            .gap(24.0)
            .flex_wrap(FlexWrap::Wrap)
            .flex_direction(FlexDirection::Row)
    })
}

// ==================== Tab root ====================

pub(super) fn brand_kit_tab(state: ProfileState, app: AppState) -> impl IntoView {
    let font_menu = RwSignal::new(None::<FontMenu>);
    let font_search = RwSignal::new(String::new());
    let section = state.brand_section;

    let body_state = state.clone();
    let body = dyn_container(
        move || section.get(),
        move |active| match active {
            BrandSection::Logos => {
                logos_section(body_state.clone(), app.clone()).into_any()
            }
            BrandSection::Colors => {
                colors_section(body_state.clone(), app.clone()).into_any()
            }
            BrandSection::Fonts => {
                fonts_section(body_state.clone(), app.clone(), font_menu, font_search).into_any()
            }
            BrandSection::Photos => {
                photos_section(body_state.clone(), app.clone()).into_any()
            }
        },
    )
    .style(|s| s.width_full().min_height(300.0).margin_top(24.0));

    v_stack((
        h_stack((
            tab_header("Brand Kit", "Manage visual identity assets."),
            empty().style(|s| s.flex_grow(1.0)),
            save_button(state),
        ))
        .style(|s| s.width_full().items_center()),
        section_tabs(section),
        body,
    ))
    .style(|s| s.width_full())
    // A press anywhere else in the tab collapses any open font menu.
    .on_event_cont(EventListener::PointerDown, move |_| {
        if font_menu.get_untracked().is_some() {
            font_menu.set(None);
        }
    })
}
