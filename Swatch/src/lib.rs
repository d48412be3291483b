//! HSV color picker widget for [floem](https://docs.rs/floem).
//!
//! Provides a solid-color picker panel built from two drag surfaces (a
//! saturation/value square and a hue strip), a hex entry row, and the
//! conversion math to round-trip between `#RRGGBB` hex and HSV.
//!
//! The picker binds to a [`PickerState`] of reactive signals. Embedders
//! seed it with [`PickerState::set_hex`] and observe committed changes by
//! subscribing to [`PickerState::committed`]:
//!
//! ```no_run
//! use swatch::{solid_picker, PickerState};
//!
//! let state = PickerState::new();
//! state.set_hex("#2563EB");
//! let view = solid_picker(state);
//! ```
//!
//! # Modules
//!
//! - [`color`] - HSV type, hex parsing and formatting
//! - [`surface`] - pointer-to-color mapping for the drag surfaces
//! - [`gradient`] - PNG rasterization of the picker backgrounds

pub mod color;
pub mod gradient;
pub mod surface;

mod picker;

pub use color::{hex_to_hsv, hex_to_rgb, hsv_to_hex, normalize_hex, Hsv};
pub use picker::{solid_picker, PickerState, PickerTab};
pub use surface::{DragTarget, SurfaceBounds};
