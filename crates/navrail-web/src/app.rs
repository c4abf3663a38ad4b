//! Demo App shell wiring the sidebar to its collaborators

use leptos::logging;
use leptos::prelude::*;
use navrail_core::ColorScheme;

use crate::components::Sidebar;

/// Demo App component
///
/// Supplies the navigation stub: selecting an entry logs the requested path
/// to the console instead of routing anywhere.
#[component]
pub fn App(#[prop(optional)] initial_scheme: ColorScheme) -> impl IntoView {
    let on_navigate = Callback::new(|path: &'static str| {
        logging::log!("going to \"{}\"", path);
    });

    view! {
        <div class="app">
            <Sidebar initial_scheme on_navigate />
        </div>
    }
}

/// Initial scheme for the mounted app, read from `<body data-theme="…">`.
/// Absent or unrecognized values fall back to the default scheme.
pub fn boot_scheme() -> ColorScheme {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute("data-theme"))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
