// tests/support/helpers.rs
use std::str::FromStr;
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use glossa_core::application::services::ApplicationServices;
use glossa_core::domain::language::{LanguageCode, LanguageSettings};
use glossa_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use glossa_core::presentation::http::{routes::build_router, state::HttpState};

pub fn lang(code: &str) -> LanguageCode {
    LanguageCode::new(code).expect("valid language code")
}

/// `en` default, `en`/`de`/`fr` served, no explicit fallback chain.
pub fn default_settings() -> LanguageSettings {
    LanguageSettings::new(lang("en"), vec![lang("en"), lang("de"), lang("fr")], vec![], false)
        .expect("valid settings")
}

pub fn hiding_settings() -> LanguageSettings {
    LanguageSettings::new(lang("en"), vec![lang("en"), lang("de"), lang("fr")], vec![], true)
        .expect("valid settings")
}

/// Fresh in-memory database with the real migrations applied. A single
/// connection keeps every query on the same in-memory instance.
pub async fn make_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("connect options")
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

pub async fn make_test_router_with_settings(settings: LanguageSettings) -> axum::Router {
    let pool = Arc::new(make_test_pool().await);

    let services = Arc::new(ApplicationServices::new(
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool))),
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
        settings,
    ));

    build_router(HttpState { services }, &["*".to_string()])
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with_settings(default_settings()).await
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("expected json body, got: {}", String::from_utf8_lossy(&bytes)));
    (status, json)
}

/// Assert an `{error, message}` body with the expected status and error text.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
