// src/application/queries/articles/mod.rs
mod details;
mod get_by_id;
mod get_by_slug;
mod index;
mod list;
mod service;
mod slugs;

pub use details::{ArticleDetailsResolution, ResolveArticleDetailsQuery};
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use index::ListPublishedArticlesQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use slugs::GetArticleSlugsQuery;
