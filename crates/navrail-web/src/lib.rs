//! navrail-web - Collapsible navigation sidebar component built with Leptos
//!
//! The `Sidebar` component renders two fixed lists of navigation entries with
//! an expand/collapse toggle and a light/dark theme switch. Navigation itself
//! is an external collaborator: the embedding application supplies the
//! `on_navigate` callback. Behind the `ssr` feature the crate also carries a
//! small Axum server for the demo page and the embedding JSON surface.

pub mod app;
pub mod components;
pub mod context;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::{boot_scheme, App};
pub use components::Sidebar;
pub use context::{use_sidebar, SidebarContext};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use navrail_core::ColorScheme;
#[cfg(feature = "ssr")]
use std::net::SocketAddr;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;

/// Run the demo web server
#[cfg(feature = "ssr")]
pub async fn run(scheme: ColorScheme, port: u16) -> anyhow::Result<()> {
    let router = create_router(scheme);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Demo server listening on http://{}", addr);
    println!("Demo server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
