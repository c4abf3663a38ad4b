//! Sidebar UI state
//!
//! Three independent toggles held for the component's mounted lifetime. Every
//! transition is total and synchronous; none can fail or suspend.

use crate::models::nav::PRIMARY_NAV;
use crate::models::theme::{ColorScheme, ThemePalette};

/// Transient state of a mounted sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether the panel shows labels next to the icons
    pub open: bool,
    /// Active color scheme
    pub scheme: ColorScheme,
    /// Display title of the highlighted entry (exactly one at a time)
    pub active_title: &'static str,
}

impl SidebarState {
    /// Closed panel with the first primary entry active.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            open: false,
            scheme,
            active_title: PRIMARY_NAV[0].title,
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_scheme(&mut self) {
        self.scheme = self.scheme.toggled();
    }

    pub fn activate(&mut self, title: &'static str) {
        self.active_title = title;
    }

    pub fn is_active(&self, title: &str) -> bool {
        self.active_title == title
    }

    pub fn palette(&self) -> ThemePalette {
        self.scheme.palette()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
