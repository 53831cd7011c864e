use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;
use userdir_core::api_routes::{ROOT, docs, users};

#[path = "support/mod.rs"]
mod support;
use support::{build_test_app, build_test_app_with_config, restricted_cors};

fn allow_origin(response: &TestResponse) -> Option<&str> {
    response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok())
}

#[tokio::test]
async fn root_answers_placeholder() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(ROOT).await;
    response.assert_status_ok();
    assert_eq!(response.text(), "oops");
    Ok(())
}

#[tokio::test]
async fn openapi_document_describes_user_resource() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(docs::OPENAPI).await;
    response.assert_status_ok();
    let doc: Value = response.json();

    assert_eq!(doc["info"]["title"], "User Management API");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert_eq!(doc["servers"][0]["url"], "http://localhost:4356/");
    assert!(doc["paths"]["/user"]["get"].is_object());
    assert!(doc["paths"]["/user"]["post"].is_object());
    assert!(doc["paths"]["/user/{id}"]["delete"].is_object());
    assert!(doc["paths"]["/user/{id}"]["get"]["responses"]["404"].is_object());
    assert!(doc["components"]["schemas"]["User"].is_object());
    assert_eq!(doc["tags"][0]["name"], "Users");
    Ok(())
}

#[tokio::test]
async fn swagger_ui_is_served_under_v1() -> Result<()> {
    let app = build_test_app()?;

    let bare = app.server.get(docs::SWAGGER_UI).await;
    assert!(bare.status_code().is_redirection());

    let page = app.server.get(&format!("{}/", docs::SWAGGER_UI)).await;
    page.assert_status_ok();
    let content_type = page
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
    assert!(page.text().contains("swagger-ui"));
    Ok(())
}

#[tokio::test]
async fn default_cors_accepts_any_origin() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .get(users::COLLECTION)
        .add_header("origin", "http://example.com")
        .await;
    response.assert_status_ok();
    assert_eq!(allow_origin(&response), Some("*"));
    Ok(())
}

#[tokio::test]
async fn restricted_cors_only_echoes_listed_origin() -> Result<()> {
    let app = build_test_app_with_config(restricted_cors("http://app.local"))?;

    let allowed = app
        .server
        .get(users::COLLECTION)
        .add_header("origin", "http://app.local")
        .await;
    assert_eq!(allow_origin(&allowed), Some("http://app.local"));

    let denied = app
        .server
        .get(users::COLLECTION)
        .add_header("origin", "http://elsewhere.local")
        .await;
    assert_eq!(denied.status_code(), StatusCode::OK);
    assert_eq!(allow_origin(&denied), None);
    Ok(())
}
