//! navrail-core - Core models for navrail
//!
//! Provides the navigation tables, color schemes, and sidebar state shared by
//! the web component, the demo server, and the CLI.

pub mod error;
pub mod models;
#[cfg(not(target_family = "wasm"))]
pub mod preferences;

pub use error::CoreError;
pub use models::nav::{all_entries, find, NavEntry, BRAND_TITLE, FOOTER_NAV, PRIMARY_NAV};
pub use models::state::SidebarState;
pub use models::theme::{ColorScheme, ThemePalette};
#[cfg(not(target_family = "wasm"))]
pub use preferences::Preferences;
