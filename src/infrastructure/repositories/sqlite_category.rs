// src/infrastructure/repositories/sqlite_category.rs
use crate::domain::article::Article;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;
use super::sqlite_article::SqliteArticleReadRepository;
use crate::domain::article::{ArticleListCursor, ArticleListFilter, ArticleReadRepository};

const COLUMNS: &str = "id, name, created_at, updated_at";

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
    articles: SqliteArticleReadRepository,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let articles = SqliteArticleReadRepository::new(Arc::clone(&pool));
        Self { pool, articles }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, created_at, updated_at) \
             VALUES (?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET name = ?, updated_at = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(update.name.as_str())
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        // ON DELETE SET NULL clears the reference on any article rows.
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {COLUMNS} FROM categories ORDER BY name, id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn articles_in(&self, id: CategoryId) -> DomainResult<Vec<Article>> {
        let filter = ArticleListFilter {
            include_drafts: true,
            category_id: Some(id),
        };

        // Inline views are bounded in practice; walk the pages to the end.
        let mut articles = Vec::new();
        let mut cursor: Option<ArticleListCursor> = None;
        loop {
            let (page, next) = self.articles.list_page(&filter, 100, cursor).await?;
            articles.extend(page);
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        Ok(articles)
    }
}
