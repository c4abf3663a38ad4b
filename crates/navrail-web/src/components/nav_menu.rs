//! Navigation menus and entries

use leptos::prelude::*;
use navrail_core::NavEntry;

use crate::components::Icon;
use crate::context::use_sidebar;

/// A vertical list of navigation entries
///
/// The footer variant is pinned to the bottom of the panel.
#[component]
pub fn NavMenu(
    entries: &'static [NavEntry],
    #[prop(into)] on_navigate: Callback<&'static str>,
    #[prop(optional)] footer: bool,
) -> impl IntoView {
    view! {
        <nav class="nav-menu" class:nav-menu-footer=footer>
            {entries
                .iter()
                .map(|entry| view! { <NavItem entry on_navigate /> })
                .collect_view()}
        </nav>
    }
}

/// A single clickable entry: icon always, label only while open
#[component]
fn NavItem(
    entry: &'static NavEntry,
    #[prop(into)] on_navigate: Callback<&'static str>,
) -> impl IntoView {
    let ctx = use_sidebar();

    view! {
        <button
            class="nav-item"
            class:active=move || ctx.is_active(entry.title)
            on:click=move |_| {
                on_navigate.run(entry.path);
                ctx.activate(entry.title);
            }
        >
            <Icon name=entry.icon />
            <Show when=move || ctx.is_open()>
                <span class="nav-item-label">{entry.title}</span>
            </Show>
        </button>
    }
}
