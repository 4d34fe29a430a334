// src/application/queries/articles/index.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleListFilter, language::LanguageCode},
};

/// Site listing: published articles rendered in one language.
pub struct ListPublishedArticlesQuery {
    pub language: String,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_published_articles(
        &self,
        query: ListPublishedArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let language = LanguageCode::new(query.language)?;
        if !self.settings.is_supported(&language) {
            return Err(ApplicationError::not_found("unsupported language"));
        }

        let limit = self.normalize_limit(query.limit);
        let cursor = self.decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(&ArticleListFilter::default(), limit, cursor)
            .await?;

        // With hide_untranslated enabled, articles the chain cannot resolve
        // drop out of the page instead of surfacing in a wrong language.
        let items = records
            .iter()
            .filter_map(|article| ArticleDto::resolve(article, &language, &self.settings))
            .collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
