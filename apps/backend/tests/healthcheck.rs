mod common;

use actix_web::test;
use croupier::test_support::create_test_app;
use croupier::AppState;
use serde_json::Value;

use common::memory_state;

#[actix_web::test]
async fn health_reports_database_and_latest_migration() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(memory_state().await).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20240601_000001_create_decks");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AppState::without_db()).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body["db_error"]
        .as_str()
        .is_some_and(|e| e.starts_with("DB unavailable")));

    Ok(())
}
