use crate::domain::article::Article;
use crate::domain::category::{
    Category, CategoryDisplay, StackedCategory, TabularCategory,
};
use crate::domain::language::LanguageSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::articles::ArticleDto;
use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// One inline row of the tabular category view: identifying fields only,
/// translated ones resolved in the default language.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleInlineRowDto {
    pub id: i64,
    pub language: String,
    pub title: String,
    pub slug: String,
    pub published: bool,
}

fn inline_row(article: &Article, settings: &LanguageSettings) -> Option<ArticleInlineRowDto> {
    let translation = article
        .resolve(settings.default_language(), settings)
        .or_else(|| article.first_translation())?;
    Some(ArticleInlineRowDto {
        id: article.id.into(),
        language: translation.language.to_string(),
        title: translation.title.to_string(),
        slug: translation.slug.to_string(),
        published: article.published,
    })
}

/// Category rendered through the [`StackedCategory`] proxy: full article
/// cards nested under the category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StackedCategoryDto {
    pub id: i64,
    pub name: String,
    pub verbose_name: String,
    pub articles: Vec<ArticleDto>,
}

impl StackedCategoryDto {
    pub fn new(
        category: StackedCategory,
        articles: &[Article],
        settings: &LanguageSettings,
    ) -> Self {
        let articles = articles
            .iter()
            .filter_map(|article| {
                ArticleDto::resolve_lenient(article, settings.default_language(), settings)
            })
            .collect();
        Self {
            id: category.id().into(),
            name: category.name().to_string(),
            verbose_name: StackedCategory::VERBOSE_NAME.to_string(),
            articles,
        }
    }
}

/// Category rendered through the [`TabularCategory`] proxy: flat rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TabularCategoryDto {
    pub id: i64,
    pub name: String,
    pub verbose_name: String,
    pub articles: Vec<ArticleInlineRowDto>,
}

impl TabularCategoryDto {
    pub fn new(
        category: TabularCategory,
        articles: &[Article],
        settings: &LanguageSettings,
    ) -> Self {
        let articles = articles
            .iter()
            .filter_map(|article| inline_row(article, settings))
            .collect();
        Self {
            id: category.id().into(),
            name: category.name().to_string(),
            verbose_name: TabularCategory::VERBOSE_NAME.to_string(),
            articles,
        }
    }
}
