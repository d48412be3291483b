//! Canvass - Campaign management desktop app

// Re-export hustings
pub use hustings;

pub mod error;
pub mod projects;

// Feature-gated modules
#[cfg(feature = "gui")]
pub mod gui;

pub use error::{Error, Result};
