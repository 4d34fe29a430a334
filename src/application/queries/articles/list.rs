// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, CursorPage},
        error::ApplicationResult,
    },
    domain::{article::ArticleListFilter, category::CategoryId},
};

/// Management listing: every translation of every matching article, newest
/// first, with an opaque keyset cursor.
pub struct ListArticlesQuery {
    pub include_drafts: bool,
    pub category_id: Option<i64>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDetailDto>> {
        let limit = self.normalize_limit(query.limit);
        let cursor = self.decode_cursor(query.cursor.as_deref())?;
        let filter = ArticleListFilter {
            include_drafts: query.include_drafts,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
        };

        let (records, next_cursor) = self.read_repo.list_page(&filter, limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
