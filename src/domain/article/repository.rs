use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle, NewTranslation};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor, ArticleSlug};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Filters for article listings.
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub include_drafts: bool,
    pub category_id: Option<CategoryId>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert the article core and its initial translation atomically.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Add or replace the translation for the payload language.
    async fn upsert_translation(
        &self,
        id: ArticleId,
        translation: NewTranslation,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article>;
    /// Remove one translation row. Refuses to remove the last one.
    async fn delete_translation(
        &self,
        id: ArticleId,
        language: &LanguageCode,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article>;
    /// Delete the article; translation rows go with it.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Look up the article owning `slug`. Slugs are globally unique, so the
    /// hit also identifies the language the slug belongs to.
    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<(Article, LanguageCode)>>;
    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;
    /// `language -> slug` for one article, in a single query.
    async fn slug_map(&self, id: ArticleId) -> DomainResult<BTreeMap<LanguageCode, ArticleSlug>>;
}
