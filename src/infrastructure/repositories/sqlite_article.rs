// src/infrastructure/repositories/sqlite_article.rs
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListCursor, ArticleListFilter,
    ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleTranslation, ArticleUpdate,
    ArticleWriteRepository, NewArticle, NewTranslation,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::error::map_sqlx;

const CORE_COLUMNS: &str = "id, published, category_id, created_at, updated_at";
const TRANSLATION_COLUMNS: &str = "article_id, language_code, title, slug, content";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    published: i64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct TranslationRow {
    article_id: i64,
    language_code: String,
    title: String,
    slug: String,
    content: String,
}

impl TryFrom<TranslationRow> for ArticleTranslation {
    type Error = DomainError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        Ok(ArticleTranslation {
            language: LanguageCode::new(row.language_code)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
        })
    }
}

fn build_article(row: ArticleRow, translations: Vec<ArticleTranslation>) -> DomainResult<Article> {
    Article::from_parts(
        ArticleId::new(row.id)?,
        row.published != 0,
        row.category_id.map(CategoryId::new).transpose()?,
        row.created_at,
        row.updated_at,
        translations,
    )
}

/// Translation rows for a set of articles, one query, grouped by article.
async fn load_translations(
    pool: &SqlitePool,
    ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<ArticleTranslation>>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {TRANSLATION_COLUMNS} FROM article_translations WHERE article_id IN ("
    ));
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    builder.push(") ORDER BY language_code");

    let rows = builder
        .build_query_as::<TranslationRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    let mut grouped: HashMap<i64, Vec<ArticleTranslation>> = HashMap::new();
    for row in rows {
        let article_id = row.article_id;
        grouped
            .entry(article_id)
            .or_default()
            .push(ArticleTranslation::try_from(row)?);
    }
    Ok(grouped)
}

async fn load_article(pool: &SqlitePool, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {CORE_COLUMNS} FROM articles WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    let Some(row) = row else {
        return Ok(None);
    };
    let mut translations = load_translations(pool, &[row.id]).await?;
    let translations = translations.remove(&row.id).unwrap_or_default();
    build_article(row, translations).map(Some)
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            published,
            category_id,
            created_at,
            updated_at,
            translation,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (published, category_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {CORE_COLUMNS}"
        ))
        .bind(i64::from(published))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO article_translations (article_id, language_code, title, slug, content) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(translation.language.as_str())
        .bind(translation.title.as_str())
        .bind(translation.slug.as_str())
        .bind(translation.content.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        build_article(row, vec![translation.into()])
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            published,
            category_change,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);
        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(i64::from(published));
        }
        if let Some(change) = category_change {
            builder.push(", category_id = ");
            builder.push_bind(change.category_id.map(i64::from));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {CORE_COLUMNS}"));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let mut translations = load_translations(&self.pool, &[row.id]).await?;
        let translations = translations.remove(&row.id).unwrap_or_default();
        build_article(row, translations)
    }

    async fn upsert_translation(
        &self,
        id: ArticleId,
        translation: NewTranslation,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO article_translations (article_id, language_code, title, slug, content) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (article_id, language_code) DO UPDATE SET \
             title = excluded.title, slug = excluded.slug, content = excluded.content",
        )
        .bind(i64::from(id))
        .bind(translation.language.as_str())
        .bind(translation.title.as_str())
        .bind(translation.slug.as_str())
        .bind(translation.content.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query("UPDATE articles SET updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, i64::from(id))
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete_translation(
        &self,
        id: ArticleId,
        language: &LanguageCode,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let remaining: i64 = sqlx::query_scalar(
            "SELECT COUNT(1) FROM article_translations WHERE article_id = ?",
        )
        .bind(i64::from(id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if remaining <= 1 {
            return Err(DomainError::Conflict(
                "cannot remove the last translation of an article".into(),
            ));
        }

        let result = sqlx::query(
            "DELETE FROM article_translations WHERE article_id = ? AND language_code = ?",
        )
        .bind(i64::from(id))
        .bind(language.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "no translation for language {language}"
            )));
        }

        sqlx::query("UPDATE articles SET updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, i64::from(id))
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        load_article(&self.pool, i64::from(id)).await
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<(Article, LanguageCode)>> {
        let hit: Option<(i64, String)> = sqlx::query_as(
            "SELECT article_id, language_code FROM article_translations WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some((article_id, language_code)) = hit else {
            return Ok(None);
        };
        let owner = LanguageCode::new(language_code)?;
        let article = load_article(&self.pool, article_id)
            .await?
            .ok_or_else(|| DomainError::Persistence("translation without article".into()))?;
        Ok(Some((article, owner)))
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {CORE_COLUMNS} FROM articles WHERE 1 = 1"));

        if !filter.include_drafts {
            builder.push(" AND published = 1");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(cursor) = &cursor {
            builder.push(" AND (created_at < ");
            builder.push_bind(cursor.created_at);
            builder.push(" OR (created_at = ");
            builder.push_bind(cursor.created_at);
            builder.push(" AND id < ");
            builder.push_bind(i64::from(cursor.article_id));
            builder.push("))");
        }

        // One extra row tells whether another page exists.
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit) + 1);

        let mut rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let has_more = rows.len() > limit as usize;
        rows.truncate(limit as usize);

        let next_cursor = if has_more {
            rows.last().map(|row| {
                ArticleId::new(row.id)
                    .map(|id| ArticleListCursor::from_parts(row.created_at, id))
            })
        } else {
            None
        }
        .transpose()?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut translations = load_translations(&self.pool, &ids).await?;

        let articles = rows
            .into_iter()
            .map(|row| {
                let rows = translations.remove(&row.id).unwrap_or_default();
                build_article(row, rows)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, next_cursor))
    }

    async fn slug_map(&self, id: ArticleId) -> DomainResult<BTreeMap<LanguageCode, ArticleSlug>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT language_code, slug FROM article_translations \
             WHERE article_id = ? ORDER BY language_code",
        )
        .bind(i64::from(id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(language, slug)| Ok((LanguageCode::new(language)?, ArticleSlug::new(slug)?)))
            .collect()
    }
}
