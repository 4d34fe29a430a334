// src/application/queries/categories/mod.rs
mod get;
mod list;
mod service;
mod views;

pub use get::GetCategoryByIdQuery;
pub use service::CategoryQueryService;
pub use views::{GetStackedCategoryQuery, GetTabularCategoryQuery};
