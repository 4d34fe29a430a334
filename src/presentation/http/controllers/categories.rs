// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, RenameCategoryCommand},
    dto::{CategoryDto, StackedCategoryDto, TabularCategoryDto},
    queries::categories::{GetCategoryByIdQuery, GetStackedCategoryQuery, GetTabularCategoryQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "All categories.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Created category.", body = CategoryDto)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(CreateCategoryCommand { name: payload.name })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Renamed category.", body = CategoryDto)
    ),
    tag = "Categories"
)]
pub async fn rename_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .rename_category(RenameCategoryCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted; referencing articles keep existing uncategorized.")
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/stacked-categories",
    responses(
        (status = 200, description = "Categories with their articles rendered as nested cards.", body = [StackedCategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_stacked_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<StackedCategoryDto>>> {
    state
        .services
        .category_queries
        .list_stacked_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/stacked-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "One category in the stacked rendering.", body = StackedCategoryDto)
    ),
    tag = "Categories"
)]
pub async fn get_stacked_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StackedCategoryDto>> {
    state
        .services
        .category_queries
        .get_stacked_category(GetStackedCategoryQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tabular-categories",
    responses(
        (status = 200, description = "Categories with their articles rendered as flat rows.", body = [TabularCategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_tabular_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TabularCategoryDto>>> {
    state
        .services
        .category_queries
        .list_tabular_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tabular-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "One category in the tabular rendering.", body = TabularCategoryDto)
    ),
    tag = "Categories"
)]
pub async fn get_tabular_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TabularCategoryDto>> {
    state
        .services
        .category_queries
        .get_tabular_category(GetTabularCategoryQuery { id })
        .await
        .into_http()
        .map(Json)
}
