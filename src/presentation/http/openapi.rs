// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDetailDto, ArticleDto, CursorPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDetailDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SiteArticleListResponse {
    pub items: Vec<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::set_publish_state,
        crate::presentation::http::controllers::articles::assign_category,
        crate::presentation::http::controllers::articles::get_article_slugs,
        crate::presentation::http::controllers::articles::upsert_translation,
        crate::presentation::http::controllers::articles::remove_translation,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::rename_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::categories::list_stacked_categories,
        crate::presentation::http::controllers::categories::get_stacked_category,
        crate::presentation::http::controllers::categories::list_tabular_categories,
        crate::presentation::http::controllers::categories::get_tabular_category,
        crate::presentation::http::controllers::site::article_index,
        crate::presentation::http::controllers::site::article_details,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            SiteArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::PublishRequest,
            crate::presentation::http::controllers::articles::AssignCategoryRequest,
            crate::presentation::http::controllers::articles::UpsertTranslationRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::TranslationDto,
            crate::application::dto::SlugMapDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::StackedCategoryDto,
            crate::application::dto::TabularCategoryDto,
            crate::application::dto::ArticleInlineRowDto
        )
    ),
    tags(
        (name = "Site", description = "Language-prefixed public routes"),
        (name = "Articles", description = "Article and translation management"),
        (name = "Categories", description = "Category management and presentational views"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Glossa API",
        description = "Translatable-content backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

impl From<CursorPage<ArticleDetailDto>> for ArticleListResponse {
    fn from(page: CursorPage<ArticleDetailDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

impl From<CursorPage<ArticleDto>> for SiteArticleListResponse {
    fn from(page: CursorPage<ArticleDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}
