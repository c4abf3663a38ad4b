//! Demo web router using Axum
//!
//! Serves a setup page at `/` plus the small JSON surface embedding
//! applications can read (`/api/health`, `/api/theme`, `/api/routes`).

use axum::{extract::State, response::Html, routing::get, Json, Router};
use navrail_core::{ColorScheme, FOOTER_NAV, PRIMARY_NAV};
use tower_http::cors::{Any, CorsLayer};

/// Create the demo router with the configured initial scheme
pub fn create_router(scheme: ColorScheme) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/theme", get(theme_handler))
        .route("/api/routes", get(routes_handler))
        .layer(cors)
        .with_state(scheme)
}

async fn index_handler(State(scheme): State<ColorScheme>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>navrail - Sidebar Demo</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }}
        .setup-message {{
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }}
        h1 {{ font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }}
        p {{ margin-bottom: 1rem; color: #333; line-height: 1.6; }}
        code {{
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }}
        .step {{
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }}
        a {{ color: #0066cc; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>navrail - Sidebar Demo</h1>
        <p>The Leptos WASM frontend needs to be compiled before the sidebar can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Serve frontend: <code>cd crates/navrail-web &amp;&amp; trunk serve</code></li>
            </ol>
        </div>

        <p>Configured initial theme: <code>{scheme}</code></p>

        <p><strong>API Endpoints (available now):</strong></p>
        <ul style="margin-left: 1.5rem;">
            <li><a href="/api/health">/api/health</a> - Health check</li>
            <li><a href="/api/theme">/api/theme</a> - Configured initial theme</li>
            <li><a href="/api/routes">/api/routes</a> - Navigation route tables</li>
        </ul>
    </div>
</body>
</html>"#
    ))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn theme_handler(State(scheme): State<ColorScheme>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "scheme": scheme.as_str() }))
}

async fn routes_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "primary": PRIMARY_NAV,
        "footer": FOOTER_NAV,
    }))
}
