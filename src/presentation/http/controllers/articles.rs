// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AssignCategoryCommand, CreateArticleCommand, DeleteArticleCommand,
        RemoveTranslationCommand, SetPublishStateCommand, UpsertTranslationCommand,
    },
    dto::{ArticleDetailDto, CursorPage, SlugMapDto},
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, GetArticleSlugsQuery, ListArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub language: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignCategoryRequest {
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertTranslationRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles with all of their translations.", body = crate::presentation::http::openapi::ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<CursorPage<ArticleDetailDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            include_drafts: params.include_drafts,
            category_id: params.category_id,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDetailDto),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let command = CreateArticleCommand {
        language: payload.language,
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        publish: payload.publish,
        category_id: payload.category_id,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with all translations.", body = ArticleDetailDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Slug of any translation")),
    responses(
        (status = 200, description = "Article owning the slug.", body = ArticleDetailDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its translations deleted.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDetailDto)
    ),
    tag = "Articles"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/category",
    params(("id" = i64, Path, description = "Article id")),
    request_body = AssignCategoryRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDetailDto),
        (status = 400, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn assign_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignCategoryRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .assign_category(AssignCategoryCommand {
            id,
            category_id: payload.category_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/slugs",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Slug per translated language.", body = SlugMapDto)
    ),
    tag = "Articles"
)]
pub async fn get_article_slugs(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<SlugMapDto>> {
    state
        .services
        .article_queries
        .get_article_slugs(GetArticleSlugsQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/translations/{lang}",
    params(
        ("id" = i64, Path, description = "Article id"),
        ("lang" = String, Path, description = "Language code")
    ),
    request_body = UpsertTranslationRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDetailDto),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn upsert_translation(
    Extension(state): Extension<HttpState>,
    Path((id, lang)): Path<(i64, String)>,
    Json(payload): Json<UpsertTranslationRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .upsert_translation(UpsertTranslationCommand {
            id,
            language: lang,
            title: payload.title,
            content: payload.content,
            slug: payload.slug,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/translations/{lang}",
    params(
        ("id" = i64, Path, description = "Article id"),
        ("lang" = String, Path, description = "Language code")
    ),
    responses(
        (status = 200, description = "Updated article.", body = ArticleDetailDto),
        (status = 409, description = "Last translation cannot be removed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn remove_translation(
    Extension(state): Extension<HttpState>,
    Path((id, lang)): Path<(i64, String)>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .remove_translation(RemoveTranslationCommand { id, language: lang })
        .await
        .into_http()
        .map(Json)
}
