//! WASM entry point for the Leptos CSR demo

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use navrail_web::{boot_scheme, App};

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App initial_scheme=boot_scheme() /> });
}
