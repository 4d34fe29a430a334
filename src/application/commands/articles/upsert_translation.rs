// src/application/commands/articles/upsert_translation.rs
use super::{ArticleCommandService, language::supported_language};
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle, NewTranslation},
};

/// Add a translation for a language or replace the existing one.
pub struct UpsertTranslationCommand {
    pub id: i64,
    pub language: String,
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
}

impl ArticleCommandService {
    pub async fn upsert_translation(
        &self,
        command: UpsertTranslationCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(command.id)?;
        let language = supported_language(&self.settings, command.language)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        // The translation being replaced may keep its own slug.
        let ignore = Some((id, &language));
        let slug = match command.slug {
            Some(value) => {
                self.slug_service
                    .claim_explicit_slug(ArticleSlug::new(value)?, ignore)
                    .await?
            }
            None => self.slug_service.generate_unique_slug(&title, ignore).await?,
        };

        let translation = NewTranslation {
            language,
            title,
            slug,
            content,
        };
        let now = self.clock.now();
        let updated = self
            .write_repo
            .upsert_translation(id, translation, now)
            .await?;
        Ok(updated.into())
    }
}
