//! Light/dark theme switch

use leptos::prelude::*;
use navrail_core::ColorScheme;

use crate::context::use_sidebar;

/// Checkbox-driven switch between the two color schemes
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_sidebar();

    view! {
        <div class="theme-toggle">
            <input
                type="checkbox"
                id="navrail-theme-toggle"
                prop:checked=move || ctx.scheme() == ColorScheme::Light
                on:change=move |_| ctx.toggle_theme()
                aria-label="Toggle color theme"
            />
            <label for="navrail-theme-toggle">
                <span class="theme-toggle-knob"></span>
            </label>
        </div>
    }
}
