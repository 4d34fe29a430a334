// src/application/queries/articles/details.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleSlug, article_details_path},
        language::LanguageCode,
    },
};

/// Resolution of the language-prefixed `article-details` route.
pub struct ResolveArticleDetailsQuery {
    pub language: String,
    pub slug: String,
}

/// Outcome of resolving `/{lang}/articles/{slug}`.
#[derive(Debug)]
pub enum ArticleDetailsResolution {
    Resolved(ArticleDto),
    /// The slug belongs to another language and the requested language has
    /// its own translation: the canonical path for that translation.
    RedirectTo(String),
}

impl ArticleQueryService {
    /// Serve an exact slug match directly; redirect a fallback-slug hit to
    /// the canonical slug when the requested language has its own
    /// translation; otherwise serve through fallback resolution, which with
    /// `hide_untranslated` enabled turns a chain miss into a miss.
    pub async fn resolve_article_details(
        &self,
        query: ResolveArticleDetailsQuery,
    ) -> ApplicationResult<ArticleDetailsResolution> {
        let language = LanguageCode::new(query.language)?;
        if !self.settings.is_supported(&language) {
            return Err(ApplicationError::not_found("unsupported language"));
        }
        let slug = ArticleSlug::new(query.slug)?;

        let (article, owner) = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|(article, _)| article.published)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if owner != language {
            if let Some(translation) = article.translation_in(&language) {
                return Ok(ArticleDetailsResolution::RedirectTo(article_details_path(
                    &language,
                    &translation.slug,
                )));
            }
        }

        ArticleDto::resolve(&article, &language, &self.settings)
            .map(ArticleDetailsResolution::Resolved)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
