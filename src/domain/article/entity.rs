// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::{LanguageCode, LanguageSettings};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One per-language row of an article: everything whose value varies by
/// language lives here.
#[derive(Debug, Clone)]
pub struct ArticleTranslation {
    pub language: LanguageCode,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
}

/// Article aggregate: the language-independent core plus its translations.
///
/// The translation list is kept behind accessors so the "at most one
/// translation per language" invariant cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub published: bool,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    translations: Vec<ArticleTranslation>,
}

impl Article {
    pub fn from_parts(
        id: ArticleId,
        published: bool,
        category_id: Option<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        translations: Vec<ArticleTranslation>,
    ) -> DomainResult<Self> {
        if translations.is_empty() {
            return Err(DomainError::Validation(
                "an article requires at least one translation".into(),
            ));
        }
        for (index, translation) in translations.iter().enumerate() {
            if translations[..index]
                .iter()
                .any(|other| other.language == translation.language)
            {
                return Err(DomainError::Validation(format!(
                    "duplicate translation for language {}",
                    translation.language
                )));
            }
        }
        Ok(Self {
            id,
            published,
            category_id,
            created_at,
            updated_at,
            translations,
        })
    }

    pub fn translations(&self) -> &[ArticleTranslation] {
        &self.translations
    }

    pub fn translation_in(&self, language: &LanguageCode) -> Option<&ArticleTranslation> {
        self.translations
            .iter()
            .find(|translation| &translation.language == language)
    }

    /// Fallback resolution: walk the requested language, the configured
    /// fallback chain and the default language in order. When the whole
    /// chain misses and untranslated content is not hidden, the available
    /// translation with the lowest language code is served so responses
    /// stay deterministic.
    pub fn resolve(
        &self,
        language: &LanguageCode,
        settings: &LanguageSettings,
    ) -> Option<&ArticleTranslation> {
        for candidate in settings.resolution_order(language) {
            if let Some(translation) = self.translation_in(&candidate) {
                return Some(translation);
            }
        }
        if settings.hide_untranslated() {
            return None;
        }
        self.first_translation()
    }

    /// The translation with the lowest language code. Aggregates always
    /// carry at least one translation, so this only returns `None` for
    /// values built through row mapping before validation.
    pub fn first_translation(&self) -> Option<&ArticleTranslation> {
        self.translations
            .iter()
            .min_by(|a, b| a.language.cmp(&b.language))
    }

    /// The language-prefixed `article-details` path for this article as
    /// seen from `language`. The slug may come from a fallback translation
    /// but the prefix stays the requested language, matching how the
    /// original resolved URLs under an active-language override.
    pub fn absolute_url(
        &self,
        language: &LanguageCode,
        settings: &LanguageSettings,
    ) -> Option<String> {
        self.resolve(language, settings)
            .map(|translation| article_details_path(language, &translation.slug))
    }

    /// Mapping `language -> slug` covering exactly the languages a
    /// translation exists for.
    pub fn slug_map(&self) -> BTreeMap<LanguageCode, ArticleSlug> {
        self.translations
            .iter()
            .map(|translation| (translation.language.clone(), translation.slug.clone()))
            .collect()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.updated_at = now;
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }

    /// Add a translation or replace the existing one for its language.
    pub fn upsert_translation(&mut self, translation: ArticleTranslation, now: DateTime<Utc>) {
        match self
            .translations
            .iter_mut()
            .find(|existing| existing.language == translation.language)
        {
            Some(existing) => *existing = translation,
            None => self.translations.push(translation),
        }
        self.updated_at = now;
    }

    /// Remove the translation for `language`. The last remaining
    /// translation cannot be removed: an article without translations is
    /// unrenderable in every language.
    pub fn remove_translation(
        &mut self,
        language: &LanguageCode,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleTranslation> {
        let index = self
            .translations
            .iter()
            .position(|translation| &translation.language == language)
            .ok_or_else(|| {
                DomainError::NotFound(format!("no translation for language {language}"))
            })?;
        if self.translations.len() == 1 {
            return Err(DomainError::Conflict(
                "cannot remove the last translation of an article".into(),
            ));
        }
        self.updated_at = now;
        Ok(self.translations.remove(index))
    }
}

/// Path of the named `article-details` route.
pub fn article_details_path(language: &LanguageCode, slug: &ArticleSlug) -> String {
    format!("/{language}/articles/{slug}")
}

/// Path of the language-prefixed article index.
pub fn article_index_path(language: &LanguageCode) -> String {
    format!("/{language}/articles")
}

#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub language: LanguageCode,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
}

impl From<NewTranslation> for ArticleTranslation {
    fn from(value: NewTranslation) -> Self {
        Self {
            language: value.language,
            title: value.title,
            slug: value.slug,
            content: value.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub published: bool,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub translation: NewTranslation,
}

#[derive(Debug, Clone)]
pub struct CategoryChange {
    pub category_id: Option<CategoryId>,
}

/// Partial update of the language-independent fields.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub published: Option<bool>,
    pub category_change: Option<CategoryChange>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            published: None,
            category_change: None,
            updated_at,
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_change = Some(CategoryChange { category_id });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn translation(language: &str, slug: &str) -> ArticleTranslation {
        ArticleTranslation {
            language: lang(language),
            title: ArticleTitle::new(format!("Title {language}")).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new(format!("Content {language}")).unwrap(),
        }
    }

    fn settings(hide_untranslated: bool) -> LanguageSettings {
        LanguageSettings::new(
            lang("en"),
            vec![lang("en"), lang("de"), lang("fr")],
            vec![],
            hide_untranslated,
        )
        .unwrap()
    }

    fn sample_article(translations: Vec<ArticleTranslation>) -> Article {
        Article::from_parts(
            ArticleId::new(1).unwrap(),
            false,
            None,
            Utc::now(),
            Utc::now(),
            translations,
        )
        .unwrap()
    }

    #[test]
    fn from_parts_rejects_duplicate_languages() {
        let result = Article::from_parts(
            ArticleId::new(1).unwrap(),
            false,
            None,
            Utc::now(),
            Utc::now(),
            vec![translation("en", "one"), translation("en", "two")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_parts_requires_a_translation() {
        let result = Article::from_parts(
            ArticleId::new(1).unwrap(),
            false,
            None,
            Utc::now(),
            Utc::now(),
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn resolve_prefers_the_requested_language() {
        let article = sample_article(vec![translation("en", "hello"), translation("de", "hallo")]);
        let resolved = article.resolve(&lang("de"), &settings(false)).unwrap();
        assert_eq!(resolved.language, lang("de"));
    }

    #[test]
    fn resolve_falls_back_to_the_default_language() {
        let article = sample_article(vec![translation("en", "hello"), translation("de", "hallo")]);
        let resolved = article.resolve(&lang("fr"), &settings(false)).unwrap();
        assert_eq!(resolved.language, lang("en"));
    }

    #[test]
    fn resolve_serves_any_translation_when_the_chain_misses() {
        let article = sample_article(vec![translation("de", "hallo"), translation("fr", "salut")]);
        let resolved = article.resolve(&lang("en"), &settings(false)).unwrap();
        assert_eq!(resolved.language, lang("de"));
    }

    #[test]
    fn resolve_hides_untranslated_content_when_configured() {
        let article = sample_article(vec![translation("de", "hallo")]);
        assert!(article.resolve(&lang("fr"), &settings(true)).is_none());
    }

    #[test]
    fn absolute_url_keeps_the_requested_prefix_for_fallback_slugs() {
        let article = sample_article(vec![translation("en", "hello")]);
        let url = article.absolute_url(&lang("de"), &settings(false)).unwrap();
        assert_eq!(url, "/de/articles/hello");
    }

    #[test]
    fn slug_map_covers_exactly_the_translated_languages() {
        let article = sample_article(vec![translation("en", "hello"), translation("fr", "salut")]);
        let map = article.slug_map();
        let languages: Vec<_> = map.keys().cloned().collect();
        assert_eq!(languages, vec![lang("en"), lang("fr")]);
        assert_eq!(map[&lang("fr")].as_str(), "salut");
    }

    #[test]
    fn upsert_replaces_instead_of_duplicating() {
        let mut article = sample_article(vec![translation("en", "hello")]);
        article.upsert_translation(translation("en", "hello-again"), Utc::now());
        assert_eq!(article.translations().len(), 1);
        assert_eq!(article.translations()[0].slug.as_str(), "hello-again");
    }

    #[test]
    fn the_last_translation_cannot_be_removed() {
        let mut article = sample_article(vec![translation("en", "hello")]);
        let err = article.remove_translation(&lang("en"), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn removing_a_translation_shrinks_the_slug_map() {
        let mut article = sample_article(vec![translation("en", "hello"), translation("de", "hallo")]);
        article.remove_translation(&lang("de"), Utc::now()).unwrap();
        assert_eq!(article.slug_map().keys().count(), 1);
    }

    #[test]
    fn publish_sets_state() {
        let mut article = sample_article(vec![translation("en", "hello")]);
        let now = Utc::now();
        article.publish(now);
        assert!(article.published);
        assert_eq!(article.updated_at, now);
    }
}
