//! Shared components used by every screen
//!
//! Style helpers, the button family, and the app-wide delete confirmation
//! dialog live here so the screens stay focused on their own layout.

mod confirm;
mod widgets;
pub mod theme;

pub use confirm::confirm_dialog;
pub use theme::{EffectiveTheme, Theme, ThemeColors, colors, init_theme, theme_signal};
pub use widgets::{
    BadgeTint, card_style, danger_button, dashed_tile_style, field_label, ghost_button,
    inner_nav_button, inner_sidebar_style, input_style, primary_button, screen_header,
    secondary_button, status_badge, text_area,
};
