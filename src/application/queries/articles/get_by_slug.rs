// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Management lookup by slug. Slugs are globally unique, so the slug
    /// alone names one translation and therefore one article.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let (article, _owner) = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
