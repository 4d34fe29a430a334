// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories, site},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok()),
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_by_id).delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::set_publish_state),
        )
        .route(
            "/api/v1/articles/{id}/category",
            put(articles::assign_category),
        )
        .route("/api/v1/articles/{id}/slugs", get(articles::get_article_slugs))
        .route(
            "/api/v1/articles/{id}/translations/{lang}",
            put(articles::upsert_translation).delete(articles::remove_translation),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(categories::get_category)
                .put(categories::rename_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/v1/stacked-categories",
            get(categories::list_stacked_categories),
        )
        .route(
            "/api/v1/stacked-categories/{id}",
            get(categories::get_stacked_category),
        )
        .route(
            "/api/v1/tabular-categories",
            get(categories::list_tabular_categories),
        )
        .route(
            "/api/v1/tabular-categories/{id}",
            get(categories::get_tabular_category),
        )
        .route("/{lang}/articles", get(site::article_index))
        .route("/{lang}/articles/{slug}", get(site::article_details))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
