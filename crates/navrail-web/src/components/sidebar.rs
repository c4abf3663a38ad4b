//! Collapsible sidebar navigation component

use leptos::prelude::*;
use navrail_core::{ColorScheme, BRAND_TITLE, FOOTER_NAV, PRIMARY_NAV};

use crate::components::{Icon, NavMenu, ThemeToggle};
use crate::context::{use_sidebar, SidebarContext};

/// Sidebar with header, theme switch, and two navigation menus
///
/// `initial_scheme` is the only configuration input. Navigation is delegated
/// to the embedding application through `on_navigate`, which receives the
/// selected entry's path.
#[component]
pub fn Sidebar(
    #[prop(optional)] initial_scheme: ColorScheme,
    #[prop(into)] on_navigate: Callback<&'static str>,
) -> impl IntoView {
    let ctx = SidebarContext::new(initial_scheme);
    provide_context(ctx);

    // The palette binds semantic color roles onto the root element; every
    // themed rule in the stylesheet reads the --nav-* properties set here.
    view! {
        <aside
            class="sidebar"
            class:sidebar-open=move || ctx.is_open()
            data-scheme=move || ctx.scheme().as_str()
            style=move || ctx.palette().inline_style()
            aria-label="Main navigation"
        >
            <SidebarHeader />
            <ThemeToggle />
            <NavMenu entries=PRIMARY_NAV on_navigate />
            <NavMenu entries=FOOTER_NAV on_navigate footer=true />
        </aside>
    }
}

/// Header with brand mark, collapsible logo label, and the expand toggle
#[component]
fn SidebarHeader() -> impl IntoView {
    let ctx = use_sidebar();

    view! {
        <div class="sidebar-header">
            <div class="logo-mark" aria-hidden="true">"Tf"</div>
            <Show when=move || ctx.is_open()>
                <span class="logo-label">{BRAND_TITLE}</span>
            </Show>
            <button
                class="sidebar-toggle"
                on:click=move |_| ctx.toggle_open()
                aria-label="Toggle sidebar"
                aria-expanded=move || ctx.is_open().to_string()
            >
                {move || {
                    if ctx.is_open() {
                        view! { <Icon name="angle-left" /> }.into_any()
                    } else {
                        view! { <Icon name="angle-right" /> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}
