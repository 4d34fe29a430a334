// src/application/commands/articles/remove_translation.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, language::LanguageCode},
};

pub struct RemoveTranslationCommand {
    pub id: i64,
    pub language: String,
}

impl ArticleCommandService {
    /// Remove one translation. The aggregate enforces that the last
    /// remaining translation stays, so an article never becomes
    /// unrenderable.
    pub async fn remove_translation(
        &self,
        command: RemoveTranslationCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(command.id)?;
        let language = LanguageCode::new(command.language)?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.remove_translation(&language, now)?;

        let updated = self
            .write_repo
            .delete_translation(id, &language, now)
            .await?;
        Ok(updated.into())
    }
}
