//! Reactive sidebar state shared across subcomponents

use leptos::prelude::*;
use navrail_core::{ColorScheme, SidebarState, ThemePalette};

/// Context wrapping the sidebar state for the component subtree
#[derive(Clone, Copy)]
pub struct SidebarContext {
    state: RwSignal<SidebarState>,
}

impl SidebarContext {
    pub fn new(initial_scheme: ColorScheme) -> Self {
        Self {
            state: RwSignal::new(SidebarState::new(initial_scheme)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.open)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.state.with(|state| state.scheme)
    }

    pub fn palette(&self) -> ThemePalette {
        self.state.with(|state| state.palette())
    }

    pub fn active_title(&self) -> &'static str {
        self.state.with(|state| state.active_title)
    }

    pub fn is_active(&self, title: &'static str) -> bool {
        self.state.with(|state| state.is_active(title))
    }

    pub fn toggle_open(&self) {
        self.state.update(SidebarState::toggle_open);
    }

    pub fn toggle_theme(&self) {
        self.state.update(SidebarState::toggle_scheme);
    }

    pub fn activate(&self, title: &'static str) {
        self.state.update(|state| state.activate(title));
    }
}

/// Hook to access the enclosing sidebar's context
pub fn use_sidebar() -> SidebarContext {
    expect_context::<SidebarContext>()
}
