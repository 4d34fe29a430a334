// tests/support/mocks.rs
//! In-memory store backing the service-level unit tests. One shared state
//! implements the article and category repositories so cross-aggregate
//! behavior (category deletion clearing article references) can be
//! exercised without a database.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use glossa_core::application::ports::{time::Clock, util::SlugGenerator};
use glossa_core::domain::article::{
    Article, ArticleId, ArticleListCursor, ArticleListFilter, ArticleReadRepository, ArticleSlug,
    ArticleTranslation, ArticleUpdate, ArticleWriteRepository, NewArticle, NewTranslation,
};
use glossa_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use glossa_core::domain::errors::{DomainError, DomainResult};
use glossa_core::domain::language::LanguageCode;

#[derive(Default)]
struct StoreState {
    articles: Vec<Article>,
    categories: Vec<Category>,
    next_article_id: i64,
    next_category_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slug_taken(
        state: &StoreState,
        slug: &ArticleSlug,
        ignore: Option<(ArticleId, &LanguageCode)>,
    ) -> bool {
        state.articles.iter().any(|article| {
            article.translations().iter().any(|translation| {
                &translation.slug == slug
                    && ignore != Some((article.id, &translation.language))
            })
        })
    }

    fn category_missing(state: &StoreState, id: CategoryId) -> bool {
        !state.categories.iter().any(|category| category.id == id)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();

        let slug = &article.translation.slug;
        if Self::slug_taken(&state, slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if let Some(category_id) = article.category_id {
            if Self::category_missing(&state, category_id) {
                return Err(DomainError::Validation(
                    "referenced record does not exist".into(),
                ));
            }
        }

        state.next_article_id += 1;
        let stored = Article::from_parts(
            ArticleId::new(state.next_article_id)?,
            article.published,
            article.category_id,
            article.created_at,
            article.updated_at,
            vec![article.translation.into()],
        )?;
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();

        if let Some(change) = &update.category_change {
            if let Some(category_id) = change.category_id {
                if Self::category_missing(&state, category_id) {
                    return Err(DomainError::Validation(
                        "referenced record does not exist".into(),
                    ));
                }
            }
        }

        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(published) = update.published {
            article.published = published;
        }
        if let Some(change) = update.category_change {
            article.category_id = change.category_id;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn upsert_translation(
        &self,
        id: ArticleId,
        translation: NewTranslation,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();

        if Self::slug_taken(&state, &translation.slug, Some((id, &translation.language))) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.upsert_translation(translation.into(), updated_at);
        Ok(article.clone())
    }

    async fn delete_translation(
        &self,
        id: ArticleId,
        language: &LanguageCode,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.remove_translation(language, updated_at)?;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.articles.retain(|article| article.id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<(Article, LanguageCode)>> {
        let state = self.state.lock().unwrap();
        for article in &state.articles {
            for translation in article.translations() {
                if &translation.slug == slug {
                    return Ok(Some((article.clone(), translation.language.clone())));
                }
            }
        }
        Ok(None)
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| filter.include_drafts || article.published)
            .filter(|article| {
                filter
                    .category_id
                    .is_none_or(|category_id| article.category_id == Some(category_id))
            })
            .filter(|article| {
                cursor.as_ref().is_none_or(|cursor| {
                    (article.created_at, i64::from(article.id))
                        < (cursor.created_at, i64::from(cursor.article_id))
                })
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });

        let has_more = matching.len() > limit as usize;
        matching.truncate(limit as usize);
        let next_cursor = if has_more {
            matching
                .last()
                .map(|article| ArticleListCursor::from_parts(article.created_at, article.id))
        } else {
            None
        };
        Ok((matching, next_cursor))
    }

    async fn slug_map(&self, id: ArticleId) -> DomainResult<BTreeMap<LanguageCode, ArticleSlug>> {
        let state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Ok(article.slug_map())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        state.next_category_id += 1;
        let stored = Category {
            id: CategoryId::new(state.next_category_id)?,
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        state.categories.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|category| category.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = update.name;
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.categories.retain(|category| category.id != id);
        // Mirrors ON DELETE SET NULL on the article reference.
        for article in &mut state.articles {
            if article.category_id == Some(id) {
                article.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }

    async fn articles_in(&self, id: CategoryId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| article.category_id == Some(id))
            .cloned()
            .collect();
        articles.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        Ok(articles)
    }
}

/// Clock pinned to a known instant so timestamps are assertable.
pub struct FixedClock;

impl FixedClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// Minimal slugifier matching what the `slug` crate does for ASCII input.
pub struct SimpleSlugGenerator;

impl SlugGenerator for SimpleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut last_dash = true;
        for ch in input.chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                out.push('-');
                last_dash = true;
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        out
    }
}

/// Application services wired entirely over one [`InMemoryStore`].
pub fn in_memory_services(
    store: &InMemoryStore,
    settings: glossa_core::domain::language::LanguageSettings,
) -> glossa_core::application::services::ApplicationServices {
    glossa_core::application::services::ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(FixedClock),
        Arc::new(SimpleSlugGenerator),
        settings,
    )
}
