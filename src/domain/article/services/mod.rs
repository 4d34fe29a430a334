// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;

/// Domain service guarding the global slug uniqueness of translations.
///
/// Slugs derived from a title are suffixed (`-2`, `-3`, ...) until free;
/// explicitly supplied slugs are never rewritten, a taken one is a
/// conflict. In both cases the translation being edited may keep its own
/// slug, identified by `ignore`.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

type TranslationRef<'a> = (ArticleId, &'a LanguageCode);

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore: Option<TranslationRef<'_>>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            "article".to_string()
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 2u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            if self.is_available(&slug, ignore).await? {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }

    pub async fn claim_explicit_slug(
        &self,
        slug: ArticleSlug,
        ignore: Option<TranslationRef<'_>>,
    ) -> DomainResult<ArticleSlug> {
        if self.is_available(&slug, ignore).await? {
            Ok(slug)
        } else {
            Err(DomainError::Conflict(format!(
                "slug {slug:?} is already in use",
                slug = slug.as_str()
            )))
        }
    }

    async fn is_available(
        &self,
        slug: &ArticleSlug,
        ignore: Option<TranslationRef<'_>>,
    ) -> DomainResult<bool> {
        match self.read_repo.find_by_slug(slug).await? {
            None => Ok(true),
            Some((owner, owner_language)) => Ok(ignore
                .map(|(id, language)| owner.id == id && &owner_language == language)
                .unwrap_or(false)),
        }
    }
}
