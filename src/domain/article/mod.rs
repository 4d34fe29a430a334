pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{
    Article, ArticleTranslation, ArticleUpdate, NewArticle, NewTranslation, article_details_path,
    article_index_path,
};
pub use repository::{ArticleListFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleListCursor, ArticleSlug, ArticleTitle};
