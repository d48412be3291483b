//! Theme system for Canvass
//!
//! Provides light and dark mode color palettes with system appearance detection.

use floem::prelude::*;
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Get the effective theme (resolving System to actual Light/Dark)
    pub fn effective(&self) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::System => {
                if is_system_dark_mode() {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Resolved theme (no System variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

/// Check if macOS is in dark mode
#[cfg(target_os = "macos")]
fn is_system_dark_mode() -> bool {
    use std::process::Command;
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).contains("Dark"))
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
fn is_system_dark_mode() -> bool {
    false // Default to light on non-macOS
}

/// Color palette for a theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    // Backgrounds
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
    pub bg_hover: Color,
    pub bg_selected: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // Borders
    pub border: Color,
    pub border_strong: Color,

    // Accents
    pub accent: Color,
    pub accent_hover: Color,
    pub success: Color,
    pub success_bg: Color,
    pub error: Color,
    pub error_bg: Color,
    pub warning: Color,
    pub warning_bg: Color,
}

impl ThemeColors {
    /// Get colors for the light theme
    pub const fn light() -> Self {
        Self {
            // Backgrounds
            bg_base: Color::WHITE,
            bg_surface: Color::rgb8(249, 250, 251),
            bg_elevated: Color::rgb8(243, 244, 246),
            bg_hover: Color::rgb8(229, 231, 235),
            bg_selected: Color::rgb8(229, 231, 235),

            // Text
            text_primary: Color::rgb8(17, 24, 39),
            text_secondary: Color::rgb8(75, 85, 99),
            text_muted: Color::rgb8(156, 163, 175),
            text_inverse: Color::WHITE,

            // Borders
            border: Color::rgb8(229, 231, 235),
            border_strong: Color::rgb8(209, 213, 219),

            // Accents
            accent: Color::rgb8(37, 99, 235),
            accent_hover: Color::rgb8(29, 78, 216),
            success: Color::rgb8(21, 128, 61),
            success_bg: Color::rgb8(220, 252, 231),
            error: Color::rgb8(220, 38, 38),
            error_bg: Color::rgb8(254, 226, 226),
            warning: Color::rgb8(180, 83, 9),
            warning_bg: Color::rgb8(254, 243, 199),
        }
    }

    /// Get colors for the dark theme
    pub const fn dark() -> Self {
        Self {
            // Backgrounds
            bg_base: Color::rgb8(10, 10, 10),
            bg_surface: Color::rgb8(17, 24, 39),
            bg_elevated: Color::rgb8(31, 41, 55),
            bg_hover: Color::rgb8(55, 65, 81),
            bg_selected: Color::rgb8(55, 65, 81),

            // Text
            text_primary: Color::WHITE,
            text_secondary: Color::rgb8(156, 163, 175),
            text_muted: Color::rgb8(107, 114, 128),
            text_inverse: Color::rgb8(17, 24, 39),

            // Borders
            border: Color::rgb8(31, 41, 55),
            border_strong: Color::rgb8(55, 65, 81),

            // Accents
            accent: Color::rgb8(96, 165, 250),
            accent_hover: Color::rgb8(59, 130, 246),
            success: Color::rgb8(74, 222, 128),
            success_bg: Color::rgb8(20, 45, 28),
            error: Color::rgb8(248, 113, 113),
            error_bg: Color::rgb8(50, 22, 22),
            warning: Color::rgb8(251, 191, 36),
            warning_bg: Color::rgb8(55, 44, 19),
        }
    }

    /// Get colors for the given effective theme
    pub const fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::light(),
            EffectiveTheme::Dark => Self::dark(),
        }
    }
}

/// Global theme signal
static THEME_SIGNAL: std::sync::OnceLock<RwSignal<Theme>> = std::sync::OnceLock::new();

/// Initialize the global theme signal
pub fn init_theme(theme: Theme) -> RwSignal<Theme> {
    let signal = RwSignal::new(theme);
    let _ = THEME_SIGNAL.set(signal);
    signal
}

/// Get the global theme signal (returns None if not initialized)
pub fn theme_signal() -> Option<RwSignal<Theme>> {
    THEME_SIGNAL.get().copied()
}

/// Get the current theme colors (convenience function)
/// Returns light theme colors if theme signal is not initialized.
/// Reading inside a style closure subscribes the view to theme changes.
pub fn colors() -> ThemeColors {
    theme_signal()
        .map(|s| ThemeColors::for_theme(s.get().effective()))
        .unwrap_or_else(ThemeColors::light)
}
