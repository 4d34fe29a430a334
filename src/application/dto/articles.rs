use crate::domain::article::{Article, ArticleTranslation, article_details_path};
use crate::domain::language::{LanguageCode, LanguageSettings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::serde_time;

/// An article as seen from one language: translated fields come from the
/// translation that fallback resolution picked, `language` names it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub language: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub url: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    /// Render `article` for `language`. `None` when resolution comes up
    /// empty, which only happens with `hide_untranslated` enabled.
    pub fn resolve(
        article: &Article,
        language: &LanguageCode,
        settings: &LanguageSettings,
    ) -> Option<Self> {
        article
            .resolve(language, settings)
            .map(|translation| Self::from_translation(article, translation, language))
    }

    /// Like [`ArticleDto::resolve`] but never hides the article: a chain
    /// miss falls through to the first available translation. Management
    /// views use this so configuration cannot make records invisible.
    pub fn resolve_lenient(
        article: &Article,
        language: &LanguageCode,
        settings: &LanguageSettings,
    ) -> Option<Self> {
        article
            .resolve(language, settings)
            .or_else(|| article.first_translation())
            .map(|translation| Self::from_translation(article, translation, language))
    }

    pub fn from_translation(
        article: &Article,
        translation: &ArticleTranslation,
        language: &LanguageCode,
    ) -> Self {
        Self {
            id: article.id.into(),
            language: translation.language.to_string(),
            title: translation.title.to_string(),
            slug: translation.slug.to_string(),
            content: translation.content.to_string(),
            published: article.published,
            category_id: article.category_id.map(Into::into),
            url: article_details_path(language, &translation.slug),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationDto {
    pub language: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub url: String,
}

impl From<&ArticleTranslation> for TranslationDto {
    fn from(translation: &ArticleTranslation) -> Self {
        Self {
            language: translation.language.to_string(),
            title: translation.title.to_string(),
            slug: translation.slug.to_string(),
            content: translation.content.to_string(),
            url: article_details_path(&translation.language, &translation.slug),
        }
    }
}

/// The management view of an article: the language-independent core plus
/// every translation row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: i64,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub translations: Vec<TranslationDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDetailDto {
    fn from(article: Article) -> Self {
        let mut translations: Vec<TranslationDto> =
            article.translations().iter().map(Into::into).collect();
        translations.sort_by(|a, b| a.language.cmp(&b.language));
        Self {
            id: article.id.into(),
            published: article.published,
            category_id: article.category_id.map(Into::into),
            translations,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// `language -> slug` for one article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugMapDto {
    pub id: i64,
    pub slugs: BTreeMap<String, String>,
}
