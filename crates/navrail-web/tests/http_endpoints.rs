//! Integration tests for the demo router's JSON surface
#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use navrail_core::ColorScheme;
use tower::ServiceExt;

async fn get_json(path: &str, scheme: ColorScheme) -> (StatusCode, serde_json::Value) {
    let router = navrail_web::create_router(scheme);

    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let (status, json) = get_json("/api/health", ColorScheme::Dark).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_theme_endpoint_reflects_configured_scheme() {
    let (_, dark) = get_json("/api/theme", ColorScheme::Dark).await;
    assert_eq!(dark["scheme"], "dark");

    let (_, light) = get_json("/api/theme", ColorScheme::Light).await;
    assert_eq!(light["scheme"], "light");
}

#[tokio::test]
async fn test_routes_endpoint_lists_both_tables() {
    let (status, json) = get_json("/api/routes", ColorScheme::Dark).await;
    assert_eq!(status, StatusCode::OK);

    let primary = json["primary"].as_array().unwrap();
    let footer = json["footer"].as_array().unwrap();
    assert_eq!(primary.len(), 6);
    assert_eq!(footer.len(), 2);
    assert_eq!(primary[0]["title"], "Home");
    assert_eq!(primary[0]["path"], "/");
    assert_eq!(footer[1]["icon"], "phone-volume");
}

#[tokio::test]
async fn test_index_serves_demo_page() {
    let router = navrail_web::create_router(ColorScheme::Light);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("navrail"));
    assert!(html.contains("<code>light</code>"));
}
