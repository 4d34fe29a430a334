// src/presentation/http/controllers/site.rs
//! The public, language-prefixed URL surface: the article index and the
//! named `article-details` route.
use crate::application::{
    dto::{ArticleDto, CursorPage},
    queries::articles::{
        ArticleDetailsResolution, ListPublishedArticlesQuery, ResolveArticleDetailsQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SiteListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/{lang}/articles",
    params(
        ("lang" = String, Path, description = "Language code"),
        SiteListParams
    ),
    responses(
        (status = 200, description = "Published articles rendered in the requested language.", body = crate::presentation::http::openapi::SiteArticleListResponse),
        (status = 404, description = "Unsupported language.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Site"
)]
pub async fn article_index(
    Extension(state): Extension<HttpState>,
    Path(lang): Path<String>,
    Query(params): Query<SiteListParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery {
            language: lang,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/{lang}/articles/{slug}",
    params(
        ("lang" = String, Path, description = "Language code"),
        ("slug" = String, Path, description = "Translation slug")
    ),
    responses(
        (status = 200, description = "Article resolved for the requested language.", body = ArticleDto),
        (status = 308, description = "Slug belongs to another language; the requested language has its own slug."),
        (status = 404, description = "No article, unsupported language, or hidden untranslated content.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Site"
)]
pub async fn article_details(
    Extension(state): Extension<HttpState>,
    Path((lang, slug)): Path<(String, String)>,
) -> HttpResult<Response> {
    let resolution = state
        .services
        .article_queries
        .resolve_article_details(ResolveArticleDetailsQuery {
            language: lang,
            slug,
        })
        .await
        .into_http()?;

    Ok(match resolution {
        ArticleDetailsResolution::Resolved(article) => Json(article).into_response(),
        ArticleDetailsResolution::RedirectTo(location) => {
            Redirect::permanent(&location).into_response()
        }
    })
}
